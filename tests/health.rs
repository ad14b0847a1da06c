//! Health endpoint smoke test

mod common;

use axum::http::StatusCode;

use common::{send, test_app};

#[tokio::test]
async fn health_reports_ok() {
    let (app, _guard) = test_app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}
