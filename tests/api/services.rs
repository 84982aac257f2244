use reqwest::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn catalog_lists_the_four_offerings() {
    let app = TestApp::spawn().await;

    let res = app
        .get("api/services")
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(true, body["success"]);

    let offerings = body["data"].as_array().unwrap();
    assert_eq!(4, offerings.len());

    let ids: Vec<&str> = offerings
        .iter()
        .map(|offering| offering["id"].as_str().unwrap())
        .collect();
    assert_eq!(vec!["website", "chatbot", "marketing", "automation"], ids);

    for offering in offerings {
        assert!(offering["name"].is_string());
        assert!(offering["description"].is_string());
        assert!(offering["startingPrice"].is_u64());
        assert_eq!("PHP", offering["currency"]);
        assert!(!offering["features"].as_array().unwrap().is_empty());
    }
}
