use std::time::Duration;

use reqwest::StatusCode;

use crate::helpers::{valid_payload, TestApp, TestOptions};

fn throttled(quota: u32, window_seconds: u64) -> TestOptions {
    TestOptions {
        rate_limiting: true,
        rate_limit_quota: quota,
        rate_limit_window_seconds: window_seconds,
        ..TestOptions::default()
    }
}

#[tokio::test]
async fn submissions_beyond_the_quota_are_rejected() {
    let app = TestApp::spawn_with(throttled(2, 3600)).await;

    for _ in 0..2 {
        let res = app
            .post_contact(&valid_payload())
            .await
            .expect("Failed to execute request");
        assert_eq!(StatusCode::OK, res.status());
    }

    let res = app
        .post_contact(&valid_payload())
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::TOO_MANY_REQUESTS, res.status());

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(false, body["success"]);
    assert_eq!("CONTACT_LIMIT_EXCEEDED", body["code"]);
    assert_eq!(
        "Too many contact form submissions. Please try again later.",
        body["error"]
    );
}

#[tokio::test]
async fn the_quota_resets_once_the_window_elapses() {
    let app = TestApp::spawn_with(throttled(1, 1)).await;

    let res = app.post_contact(&valid_payload()).await.unwrap();
    assert_eq!(StatusCode::OK, res.status());

    let res = app.post_contact(&valid_payload()).await.unwrap();
    assert_eq!(StatusCode::TOO_MANY_REQUESTS, res.status());

    tokio::time::sleep(Duration::from_millis(1100)).await;

    let res = app.post_contact(&valid_payload()).await.unwrap();
    assert_eq!(StatusCode::OK, res.status());
}

#[tokio::test]
async fn throttling_is_off_by_default() {
    let app = TestApp::spawn().await;

    for _ in 0..10 {
        let res = app
            .post_contact(&valid_payload())
            .await
            .expect("Failed to execute request");
        assert_eq!(StatusCode::OK, res.status());
    }
}

#[tokio::test]
async fn rejected_submissions_still_count_against_the_quota() {
    let app = TestApp::spawn_with(throttled(1, 3600)).await;

    // The limiter runs before validation, as a transport-level policy
    let res = app
        .post_contact(&serde_json::json!({}))
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::BAD_REQUEST, res.status());

    let res = app
        .post_contact(&valid_payload())
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::TOO_MANY_REQUESTS, res.status());
}
