//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`employees`] - employee management, with nested timesheets
//! - [`menus`] - menu management, with nested menu items

pub mod employees;
pub mod health;
pub mod menus;

use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
};
use tower_http::cors::CorsLayer;

use crate::core::ServerState;

/// HTTP request log middleware
async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();
    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the complete application router
pub fn build_app(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(employees::router(state.clone()))
        .merge(menus::router(state.clone()))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(log_request))
}
