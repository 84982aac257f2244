mod contact_client;

pub use contact_client::{ContactClient, FormFields, SubmissionOutcome, SubmitError};
