//! Bistro Server - restaurant back-office REST API
//!
//! CRUD over two resource hierarchies backed by SQLite:
//!
//! - **Employees** with nested **Timesheets** (employee deletion is a
//!   soft retire, timesheet history is never cascaded)
//! - **Menus** with nested **MenuItems** (a menu cannot be removed while
//!   items still reference it)
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/          # configuration, state, server lifecycle
//! ├── api/           # HTTP routes, handlers, path resolvers
//! ├── db/            # pool, models, per-table repositories
//! └── utils/         # errors, logging, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export common types
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::{AppError, AppResult};
pub use crate::utils::logger::init_logger;

/// Load `.env` and initialize logging. Call once at startup.
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_logger();
    Ok(())
}
