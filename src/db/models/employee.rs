//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub wage: f64,
    /// 1 while employed, 0 once retired (soft delete)
    pub is_current_employee: i64,
}

/// `employee` object of a create/update request body, before validation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeePayload {
    pub name: Option<String>,
    pub position: Option<String>,
    pub wage: Option<f64>,
    #[serde(rename = "isCurrentEmployee")]
    pub is_current_employee: Option<i64>,
}

/// Request body wrapper: `{ "employee": { ... } }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeBody {
    #[serde(default)]
    pub employee: EmployeePayload,
}

/// Validated employee fields, bound into INSERT/UPDATE statements
#[derive(Debug, Clone)]
pub struct EmployeeFields {
    pub name: String,
    pub position: String,
    pub wage: f64,
    pub is_current_employee: i64,
}
