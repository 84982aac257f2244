use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::ContactSubmission;

/// Extension point for forwarding accepted submissions to an outside system
/// (CRM, mailer, chat webhook). Implementations must tolerate being dropped
/// mid-flight; the HTTP response never waits for them.
#[async_trait]
pub trait SubmissionNotifier: Send + Sync {
    async fn notify(&self, submission: &ContactSubmission) -> anyhow::Result<()>;
}

/// Default notifier: does nothing. The submission log line is the only
/// record of a submission unless a real notifier is wired in.
#[derive(Debug, Default)]
pub struct NoopNotifier;

#[async_trait]
impl SubmissionNotifier for NoopNotifier {
    async fn notify(&self, _submission: &ContactSubmission) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Hand a submission to the notifier on its own task, bounded by `timeout`.
/// Failures and timeouts are logged and otherwise swallowed.
pub fn dispatch(
    notifier: Arc<dyn SubmissionNotifier>,
    submission: ContactSubmission,
    timeout: Duration,
) {
    tokio::spawn(async move {
        match tokio::time::timeout(timeout, notifier.notify(&submission)).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => tracing::warn!("Submission notifier failed: {:#}", err),
            Err(_) => tracing::warn!(?timeout, "Submission notifier timed out"),
        }
    });
}
