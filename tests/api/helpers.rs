use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use reqwest::{Client, Method, Response};

use agency_site::app;
use agency_site::domain::ContactSubmission;
use agency_site::notify::SubmissionNotifier;
use agency_site::settings::Settings;

/// Per-test server configuration
pub struct TestOptions {
    pub environment: &'static str,
    pub strict_validation: bool,
    pub rate_limiting: bool,
    pub rate_limit_quota: u32,
    pub rate_limit_window_seconds: u64,
    pub notifier: Option<Arc<dyn SubmissionNotifier>>,
}

impl Default for TestOptions {
    fn default() -> Self {
        Self {
            environment: "dev",
            strict_validation: false,
            rate_limiting: false,
            rate_limit_quota: 5,
            rate_limit_window_seconds: 3600,
            notifier: None,
        }
    }
}

fn test_settings(options: &TestOptions) -> Settings {
    serde_json::from_value(serde_json::json!({
        "app": {
            "host": "127.0.0.1",
            "port": 0,
            "environment": options.environment,
            "static_dir": "static",
        },
        "contact": {
            "strict_validation": options.strict_validation,
            "rate_limiting": options.rate_limiting,
            "rate_limit_quota": options.rate_limit_quota,
            "rate_limit_window_seconds": options.rate_limit_window_seconds,
            "notify_timeout_milliseconds": 2000,
        }
    }))
    .expect("Failed to build test settings")
}

pub struct TestApp {
    addr: String,

    pub client: Client,
    pub recorder: Arc<RecordingNotifier>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(TestOptions::default()).await
    }

    pub async fn spawn_with(options: TestOptions) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to listen on random port");
        let port = listener.local_addr().unwrap().port();

        let addr = format!("http://127.0.0.1:{}", port);

        let settings = test_settings(&options);

        let recorder = Arc::new(RecordingNotifier::default());
        let notifier: Arc<dyn SubmissionNotifier> = match options.notifier {
            Some(notifier) => notifier,
            None => recorder.clone(),
        };

        let server =
            app::run(listener, settings, notifier).expect("Failed to spawn app instance");
        let _ = tokio::spawn(server);

        let client = Client::new();

        Self {
            addr,
            client,
            recorder,
        }
    }

    pub fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", &self.addr, url);
        self.client.request(method, url)
    }

    pub async fn get(&self, url: &str) -> reqwest::Result<Response> {
        self.request(Method::GET, url).send().await
    }

    pub async fn post_contact(&self, body: &serde_json::Value) -> reqwest::Result<Response> {
        self.request(Method::POST, "contact")
            .json(body)
            .send()
            .await
    }

    /// Poll the recording notifier until a submission arrives. Notifiers run
    /// on their own task, so the HTTP response can land first.
    pub async fn wait_for_submission(&self) -> ContactSubmission {
        for _ in 0..50 {
            if let Some(submission) = self.recorder.submissions().pop() {
                return submission;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("No submission reached the notifier");
    }
}

/// Test notifier that remembers every submission it is handed
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    submissions: Mutex<Vec<ContactSubmission>>,
}

impl RecordingNotifier {
    pub fn submissions(&self) -> Vec<ContactSubmission> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionNotifier for RecordingNotifier {
    async fn notify(&self, submission: &ContactSubmission) -> anyhow::Result<()> {
        self.submissions.lock().unwrap().push(submission.clone());
        Ok(())
    }
}

/// Test notifier that always fails
#[derive(Debug, Default)]
pub struct FailingNotifier;

#[async_trait]
impl SubmissionNotifier for FailingNotifier {
    async fn notify(&self, _submission: &ContactSubmission) -> anyhow::Result<()> {
        anyhow::bail!("notifier is down")
    }
}

/// Test notifier that never completes
#[derive(Debug, Default)]
pub struct HangingNotifier;

#[async_trait]
impl SubmissionNotifier for HangingNotifier {
    async fn notify(&self, _submission: &ContactSubmission) -> anyhow::Result<()> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(())
    }
}

pub fn valid_payload() -> serde_json::Value {
    serde_json::json!({
        "name": "Jo",
        "email": "jo@x.com",
        "message": "Hello there, I need a website."
    })
}
