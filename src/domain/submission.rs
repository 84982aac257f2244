use chrono::{DateTime, Utc};

use crate::domain::{ContactName, EmailAddress, MessageBody};

/// One accepted contact-form submission.
///
/// Every string in here has already passed [`sanitize`](crate::domain::sanitize);
/// the submission lives for a single request and is never persisted.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: EmailAddress,
    pub company: String,
    pub service: String,
    pub message: MessageBody,

    pub received_at: DateTime<Utc>,
    pub client_ip: String,
    pub user_agent: String,
}

impl ContactSubmission {
    /// Emit the submission as a structured log line. This is the only side
    /// effect a submission is guaranteed to have.
    pub fn record(&self) {
        tracing::info!(
            received_at = %self.received_at.to_rfc3339(),
            name = %self.name,
            email = %self.email,
            company = %self.company,
            service = %self.service,
            message = %self.message,
            client_ip = %self.client_ip,
            user_agent = %self.user_agent,
            "New contact form submission"
        );
    }
}
