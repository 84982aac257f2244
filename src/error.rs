use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use serde::Serialize;

use thiserror::Error;

pub type RestResult<T> = Result<T, RestError>;

/// A single violated validation rule, reported back to the client by field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum RestError {
    #[error("{message}")]
    Validation {
        message: String,
        details: Vec<FieldError>,
    },

    #[error("Too many contact form submissions. Please try again later.")]
    ContactLimitExceeded,

    #[error("Internal Server Error: {detail}")]
    Internal { detail: String, expose: bool },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RestError {
    /// A validation failure with a single user-facing message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// A validation failure reporting every violated rule
    pub fn validation_details(details: Vec<FieldError>) -> Self {
        Self::Validation {
            message: "Validation failed".into(),
            details,
        }
    }

    /// An unexpected failure. The detail is always logged; it is only echoed
    /// to the client when `expose` is set (non-production runtimes).
    pub fn internal(err: impl std::fmt::Display, expose: bool) -> Self {
        Self::Internal {
            detail: err.to_string(),
            expose,
        }
    }
}

/// The JSON error envelope shared by every failure response
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<FieldError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
}

const GENERIC_ERROR: &str = "An unexpected error occurred. Please try again later.";

impl ResponseError for RestError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::ContactLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            Self::Internal { .. } | Self::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Self::Validation { message, details } => ErrorBody {
                success: false,
                error: message.clone(),
                details: (!details.is_empty()).then(|| details.clone()),
                code: (!details.is_empty()).then_some("VALIDATION_ERROR"),
            },
            Self::ContactLimitExceeded => ErrorBody {
                success: false,
                error: self.to_string(),
                details: None,
                code: Some("CONTACT_LIMIT_EXCEEDED"),
            },
            Self::Internal { detail, expose } => ErrorBody {
                success: false,
                error: if *expose {
                    detail.clone()
                } else {
                    GENERIC_ERROR.into()
                },
                details: None,
                code: Some("INTERNAL_ERROR"),
            },
            Self::Other(err) => {
                tracing::error!("Unhandled error: {:#}", err);
                ErrorBody {
                    success: false,
                    error: GENERIC_ERROR.into(),
                    details: None,
                    code: Some("INTERNAL_ERROR"),
                }
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
