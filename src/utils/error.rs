//! Unified error handling
//!
//! [`AppError`] is the request-path error type. Every variant maps to a
//! fixed HTTP status:
//!
//! | Variant | Status |
//! |---------|--------|
//! | Validation | 400 |
//! | NotFound | 404 |
//! | Conflict | 400 |
//! | Database | 500 |
//! | Internal | 500 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::repository::RepoError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Required field missing from the request body
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Path identifier did not resolve to a row
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Dependent rows block the requested operation
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Underlying store failure
    #[error("Database error: {0}")]
    Database(String),

    /// Anything else that surfaces as a server fault
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Result type used by HTTP handlers and middleware
pub type AppResult<T> = Result<T, AppError>;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg.clone()),

            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),

            // Dependent rows reject the request as a client error,
            // same status as a failed validation
            AppError::Conflict(msg) => (StatusCode::BAD_REQUEST, "conflict", msg.clone()),

            AppError::Database(msg) => {
                tracing::error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "Database error".to_string(),
                )
            }

            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}
