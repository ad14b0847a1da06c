//! Data models
//!
//! Row types derive `sqlx::FromRow` and serialize field-for-field as the
//! API exposes them. Payload types are the pre-validation request bodies;
//! all of their fields are optional so that presence is checked by the
//! validation helpers, not by deserialization.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod employee;
pub mod menu;
pub mod menu_item;
pub mod timesheet;

// Re-exports
pub use employee::*;
pub use menu::*;
pub use menu_item::*;
pub use timesheet::*;
