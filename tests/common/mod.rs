//! Shared test harness: isolated database + in-process router
//!
//! Each test gets its own temp-dir SQLite file and a fully assembled app;
//! requests go through the router with tower's oneshot, no network involved.

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use bistro_server::api;
use bistro_server::core::{Config, ServerState};

/// Spin up an isolated app instance on a fresh database.
/// Keep the returned TempDir alive for the duration of the test.
pub async fn test_app() -> (Router, TempDir) {
    let dir = TempDir::new().expect("create temp dir");
    let db_path = dir.path().join("test.sqlite");

    let config = Config::with_overrides(db_path.to_string_lossy(), 0);
    let state = ServerState::initialize(&config)
        .await
        .expect("initialize state");

    (api::build_app(state), dir)
}

/// Send one request through the router; collect status and JSON body.
/// Empty response bodies come back as `Value::Null`.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .expect("build request"),
        None => builder.body(Body::empty()).expect("build request"),
    };

    let response = app.clone().oneshot(request).await.expect("infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    (status, json)
}

/// Send a request with a raw, possibly malformed body
pub async fn send_raw(app: &Router, method: &str, uri: &str, body: &str) -> StatusCode {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request");

    app.clone()
        .oneshot(request)
        .await
        .expect("infallible")
        .status()
}
