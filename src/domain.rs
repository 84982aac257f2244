mod contact_name;
mod email_address;
mod message_body;
mod sanitize;
mod service_kind;
mod submission;

pub use contact_name::ContactName;
pub use email_address::EmailAddress;
pub use message_body::MessageBody;
pub use sanitize::{sanitize, MAX_FIELD_LEN};
pub use service_kind::ServiceKind;
pub use submission::ContactSubmission;
