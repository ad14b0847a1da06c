//! Employee path-parameter resolvers
//!
//! Each resolver loads the row addressed by its path segment before any
//! handler logic runs. Unknown (or non-numeric) identifiers terminate the
//! request with 404; on a hit the row rides along in request extensions.

use std::collections::HashMap;

use axum::{
    extract::{Path, Request, State},
    middleware::Next,
    response::Response,
};

use crate::core::ServerState;
use crate::db::repository::{employee, timesheet};
use crate::utils::{AppError, AppResult};

/// Resolve `:employeeId` and attach the Employee row
pub async fn resolve_employee(
    State(state): State<ServerState>,
    Path(params): Path<HashMap<String, String>>,
    mut req: Request,
    next: Next,
) -> AppResult<Response> {
    let raw = params.get("employeeId").cloned().unwrap_or_default();
    let found = match raw.parse::<i64>() {
        Ok(id) => employee::find_by_id(&state.pool, id).await?,
        Err(_) => None,
    };
    let employee =
        found.ok_or_else(|| AppError::not_found(format!("Employee {raw} not found")))?;

    req.extensions_mut().insert(employee);
    Ok(next.run(req).await)
}

/// Resolve `:timesheetId` and attach the Timesheet row
pub async fn resolve_timesheet(
    State(state): State<ServerState>,
    Path(params): Path<HashMap<String, String>>,
    mut req: Request,
    next: Next,
) -> AppResult<Response> {
    let raw = params.get("timesheetId").cloned().unwrap_or_default();
    let found = match raw.parse::<i64>() {
        Ok(id) => timesheet::find_by_id(&state.pool, id).await?,
        Err(_) => None,
    };
    let timesheet =
        found.ok_or_else(|| AppError::not_found(format!("Timesheet {raw} not found")))?;

    req.extensions_mut().insert(timesheet);
    Ok(next.run(req).await)
}
