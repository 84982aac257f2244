use std::time::Duration;

use anyhow::Context;

use reqwest::Client;

use serde::{Deserialize, Serialize};

use thiserror::Error;

use url::Url;

const SUCCESS_NOTICE: &str = "Thank you! We'll get back to you within 24 hours.";
const FALLBACK_ERROR: &str = "Sorry, there was an error. Please try again.";

/// Typed client for the contact endpoint. This is the programmatic
/// counterpart of the landing page's form submitter: it fast-fails on blank
/// required fields, posts the form as JSON, and folds every failure mode
/// into a single user-presentable message.
#[derive(Debug)]
pub struct ContactClient {
    client: Client,
    contact_url: Url,
}

/// The named fields gathered from a contact form
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

/// What to show the visitor after a successful submission
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    /// Fixed success copy
    pub notice: &'static str,
    pub submission_id: Option<String>,
    pub estimated_response_time: Option<String>,
}

/// Submission failures. The `Display` text of each variant is the
/// notification shown to the visitor.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// A required field was blank; nothing was sent
    #[error("Please fill in all required fields.")]
    MissingFields,

    /// The server rejected the submission with its own message
    #[error("{0}")]
    Rejected(String),

    /// The request never completed, or the response was unreadable
    #[error("Sorry, there was an error. Please try again.")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct ContactEnvelope {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    data: Option<ReceiptData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReceiptData {
    #[serde(default)]
    submission_id: Option<String>,
    #[serde(default)]
    estimated_response_time: Option<String>,
}

impl ContactClient {
    pub fn new(base_url: Url, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build http client")?;

        let contact_url = base_url
            .join("contact")
            .context("Failed to create contact endpoint URL")?;

        Ok(Self {
            client,
            contact_url,
        })
    }

    /// Submit a contact form. Returns the success notification and receipt,
    /// or the error notification to show instead.
    pub async fn submit(&self, fields: &FormFields) -> Result<SubmissionOutcome, SubmitError> {
        // Mirror of the browser-side precondition: do not even issue the
        // request when a required field is blank.
        if fields.name.trim().is_empty()
            || fields.email.trim().is_empty()
            || fields.message.trim().is_empty()
        {
            return Err(SubmitError::MissingFields);
        }

        let res = self
            .client
            .post(self.contact_url.clone())
            .json(fields)
            .send()
            .await?;

        // The server answers with the same envelope on every status code;
        // `success` is what decides the outcome.
        let envelope: ContactEnvelope = res.json().await?;

        if envelope.success {
            let data = envelope.data;
            Ok(SubmissionOutcome {
                notice: SUCCESS_NOTICE,
                submission_id: data.as_ref().and_then(|d| d.submission_id.clone()),
                estimated_response_time: data.and_then(|d| d.estimated_response_time),
            })
        } else {
            Err(SubmitError::Rejected(
                envelope.error.unwrap_or_else(|| FALLBACK_ERROR.into()),
            ))
        }
    }
}
