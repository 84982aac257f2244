use actix_web::dev::HttpServiceFactory;
use actix_web::http::header;
use actix_web::{post, web, HttpRequest, HttpResponse, Responder};

use chrono::Utc;

use serde::{Deserialize, Serialize};

use uuid::Uuid;

use crate::domain::{
    sanitize, ContactName, ContactSubmission, EmailAddress, MessageBody, ServiceKind,
};
use crate::error::{FieldError, RestError, RestResult};
use crate::notify::{self, SubmissionNotifier};
use crate::rate_limit::FixedWindowLimiter;
use crate::settings::Settings;

/// Strict-policy minimum lengths, in graphemes
const MIN_NAME_LEN: usize = 2;
const MIN_MESSAGE_LEN: usize = 10;

const SUCCESS_MESSAGE: &str =
    "Thank you for your message! We'll get back to you within 24 hours.";
const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// JSON deserialization wrapper for incoming contact-form payloads.
/// Absent fields deserialize to empty strings so validation can report them
/// instead of the extractor rejecting the body.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    company: String,
    #[serde(default)]
    service: String,
    #[serde(default)]
    message: String,
}

impl ContactForm {
    /// Sanitize every field and validate under the configured policy,
    /// producing the submission the handler records.
    fn into_submission(
        self,
        strict: bool,
        client_ip: String,
        user_agent: String,
    ) -> RestResult<ContactSubmission> {
        let name = sanitize(&self.name);
        let email = sanitize(&self.email);
        let company = sanitize(&self.company);
        let service = sanitize(&self.service);
        let message = sanitize(&self.message);

        let (name, email, service, message) = if strict {
            validate_strict(&name, &email, &service, &message)?
        } else {
            validate_lenient(&name, &email, &service, &message)?
        };

        Ok(ContactSubmission {
            name,
            email,
            company,
            service,
            message,
            received_at: Utc::now(),
            client_ip,
            user_agent,
        })
    }
}

/// Lenient policy: require `name`, `email`, `message` to be present and the
/// email to look like an address, short-circuiting on the first failure.
/// `service` passes through as free text.
fn validate_lenient(
    name: &str,
    email: &str,
    service: &str,
    message: &str,
) -> RestResult<(ContactName, EmailAddress, String, MessageBody)> {
    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(RestError::validation(MISSING_FIELDS_MESSAGE));
    }

    let email: EmailAddress = email.parse().map_err(RestError::validation)?;
    let name: ContactName = name.parse().map_err(RestError::validation)?;
    let message: MessageBody = message.parse().map_err(RestError::validation)?;

    Ok((name, email, service.to_string(), message))
}

/// Strict policy: check every rule and report all violations at once.
fn validate_strict(
    name: &str,
    email: &str,
    service: &str,
    message: &str,
) -> RestResult<(ContactName, EmailAddress, String, MessageBody)> {
    let mut details = Vec::new();

    let name = match name.parse::<ContactName>() {
        Ok(name) if name.len() >= MIN_NAME_LEN => Some(name),
        _ => {
            details.push(FieldError {
                field: "name",
                message: "Name must be at least 2 characters long".into(),
            });
            None
        }
    };

    let email = match email.parse::<EmailAddress>() {
        Ok(email) => Some(email),
        Err(message) => {
            details.push(FieldError {
                field: "email",
                message,
            });
            None
        }
    };

    let service = match service.parse::<ServiceKind>() {
        Ok(service) => Some(service),
        Err(message) => {
            details.push(FieldError {
                field: "service",
                message,
            });
            None
        }
    };

    let message = match message.parse::<MessageBody>() {
        Ok(body) if body.len() >= MIN_MESSAGE_LEN => Some(body),
        _ => {
            details.push(FieldError {
                field: "message",
                message: "Message must be at least 10 characters long".into(),
            });
            None
        }
    };

    match (name, email, service, message) {
        (Some(name), Some(email), Some(service), Some(message)) => {
            Ok((name, email, service.as_str().to_string(), message))
        }
        _ => Err(RestError::validation_details(details)),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionReceipt {
    submission_id: String,
    estimated_response_time: &'static str,
}

#[derive(Debug, Serialize)]
struct ContactResponse {
    success: bool,
    message: &'static str,
    data: SubmissionReceipt,
}

/// Contact form submission endpoint
#[tracing::instrument(
    name = "Handle a contact form submission",
    skip(req, settings, limiter, notifier, form)
)]
#[post("")]
async fn create(
    req: HttpRequest,
    settings: web::Data<Settings>,
    limiter: web::Data<FixedWindowLimiter>,
    notifier: web::Data<dyn SubmissionNotifier>,
    form: web::Json<ContactForm>,
) -> RestResult<impl Responder> {
    let client_ip = req
        .connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string();

    if settings.contact.rate_limiting() && !limiter.try_acquire(&client_ip) {
        return Err(RestError::ContactLimitExceeded);
    }

    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let submission = form.into_inner().into_submission(
        settings.contact.strict_validation(),
        client_ip,
        user_agent,
    )?;

    // The log line is the submission's record of existence
    submission.record();

    // Outside integrations run on their own task and never hold up the
    // response; see `notify::dispatch`.
    notify::dispatch(
        notifier.into_inner(),
        submission,
        settings.contact.notify_timeout(),
    );

    Ok(HttpResponse::Ok().json(ContactResponse {
        success: true,
        message: SUCCESS_MESSAGE,
        data: SubmissionReceipt {
            submission_id: format!("sub_{}", Uuid::new_v4().simple()),
            estimated_response_time: "2-24 hours",
        },
    }))
}

/// Contact API endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/contact").service(create)
}
