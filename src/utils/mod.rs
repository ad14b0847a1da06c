//! Utility module - shared helpers and types
//!
//! - [`AppError`] / [`AppResult`] - application error type and result alias
//! - [`logger`] - tracing setup
//! - [`validation`] - required-field checks for request bodies

pub mod error;
pub mod logger;
pub mod validation;

pub use error::{AppError, AppResult};
