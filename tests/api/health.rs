use reqwest::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn health_reports_process_status() {
    let app = TestApp::spawn().await;

    let res = app.get("health").await.expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!("OK", body["status"]);
    assert_eq!("dev", body["environment"]);
    assert_eq!(env!("CARGO_PKG_VERSION"), body["version"]);
    assert!(body["uptime"].is_u64());
    assert!(body["timestamp"].is_string());
    assert!(body["pid"].is_u64());
}
