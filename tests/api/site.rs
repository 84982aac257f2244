use reqwest::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn landing_page_is_served_as_html() {
    let app = TestApp::spawn().await;

    let res = app.get("").await.expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());
    let content_type = res.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let body = res.text().await.unwrap();
    assert!(body.contains("<html"));
}

#[tokio::test]
async fn robots_policy_keeps_crawlers_out_of_the_api() {
    let app = TestApp::spawn().await;

    let res = app
        .get("robots.txt")
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());

    let body = res.text().await.unwrap();
    assert!(body.contains("User-agent: *"));
    assert!(body.contains("Disallow: /api/"));
    assert!(body.contains("Disallow: /health"));
    assert!(body.contains("Sitemap: http://"));
}

#[tokio::test]
async fn sitemap_lists_the_page_sections() {
    let app = TestApp::spawn().await;

    let res = app
        .get("sitemap.xml")
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());
    let content_type = res.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/xml"));

    let body = res.text().await.unwrap();
    assert!(body.contains("<urlset"));
    assert_eq!(4, body.matches("<url>").count());
    assert!(body.contains("#services"));
}

#[tokio::test]
async fn unmatched_routes_return_a_json_not_found() {
    let app = TestApp::spawn().await;

    let res = app
        .get("no/such/page")
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::NOT_FOUND, res.status());

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(false, body["success"]);
    assert_eq!("Page not found", body["error"]);
    assert_eq!("NOT_FOUND", body["code"]);
}
