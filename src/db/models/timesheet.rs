//! Timesheet Model

use serde::{Deserialize, Serialize};

/// Timesheet row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Timesheet {
    pub id: i64,
    pub hours: f64,
    pub rate: f64,
    /// Work date as a unix timestamp in milliseconds
    pub date: i64,
    /// Back-reference to the owning employee
    pub employee_id: i64,
}

/// `timesheet` object of a create/update request body, before validation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimesheetPayload {
    pub hours: Option<f64>,
    pub rate: Option<f64>,
    pub date: Option<i64>,
}

/// Request body wrapper: `{ "timesheet": { ... } }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimesheetBody {
    #[serde(default)]
    pub timesheet: TimesheetPayload,
}

/// Validated timesheet fields, bound into INSERT/UPDATE statements
#[derive(Debug, Clone)]
pub struct TimesheetFields {
    pub hours: f64,
    pub rate: f64,
    pub date: i64,
}
