//! Repository Module
//!
//! Parameterized SQL per table. Every repository touches the database
//! through three statement shapes only: `fetch_optional` (single row or
//! absent), `fetch_all` (ordered rows, possibly empty), and `execute`
//! (mutation, with `rows_affected` / `last_insert_rowid` on the result).
//! Handlers never construct SQL themselves.

pub mod employee;
pub mod menu;
pub mod menu_item;
pub mod timesheet;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
