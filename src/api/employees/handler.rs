//! Employee API Handlers

use axum::{
    Json,
    extract::{Extension, State},
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::core::ServerState;
use crate::db::models::{
    Employee, EmployeeBody, EmployeeFields, EmployeePayload, Timesheet, TimesheetBody,
    TimesheetFields, TimesheetPayload,
};
use crate::db::repository::{employee, timesheet};
use crate::utils::AppResult;
use crate::utils::validation::{require_integer, require_number, require_text};

/// Check required employee fields. isCurrentEmployee stays 1 unless the
/// body explicitly sends 0.
fn validate_employee(payload: EmployeePayload) -> AppResult<EmployeeFields> {
    let name = require_text(payload.name, "name")?;
    let position = require_text(payload.position, "position")?;
    let wage = require_number(payload.wage, "wage")?;
    let is_current_employee = if payload.is_current_employee == Some(0) { 0 } else { 1 };

    Ok(EmployeeFields {
        name,
        position,
        wage,
        is_current_employee,
    })
}

fn validate_timesheet(payload: TimesheetPayload) -> AppResult<TimesheetFields> {
    let hours = require_number(payload.hours, "hours")?;
    let rate = require_number(payload.rate, "rate")?;
    let date = require_integer(payload.date, "date")?;

    Ok(TimesheetFields { hours, rate, date })
}

/// GET /employees - list currently-employed employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Value>> {
    let employees = employee::find_current(&state.pool).await?;
    Ok(Json(json!({ "employees": employees })))
}

/// POST /employees - create an employee
pub async fn create(
    State(state): State<ServerState>,
    Json(body): Json<EmployeeBody>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let data = validate_employee(body.employee)?;
    let employee = employee::create(&state.pool, data).await?;
    Ok((StatusCode::CREATED, Json(json!({ "employee": employee }))))
}

/// GET /employees/:employeeId - return the resolved employee
pub async fn get_by_id(Extension(employee): Extension<Employee>) -> Json<Value> {
    Json(json!({ "employee": employee }))
}

/// PUT /employees/:employeeId - overwrite all employee fields
pub async fn update(
    State(state): State<ServerState>,
    Extension(current): Extension<Employee>,
    Json(body): Json<EmployeeBody>,
) -> AppResult<Json<Value>> {
    let data = validate_employee(body.employee)?;
    let employee = employee::update(&state.pool, current.id, data).await?;
    Ok(Json(json!({ "employee": employee })))
}

/// DELETE /employees/:employeeId - soft delete, the row stays retrievable
pub async fn remove(
    State(state): State<ServerState>,
    Extension(current): Extension<Employee>,
) -> AppResult<Json<Value>> {
    let employee = employee::retire(&state.pool, current.id).await?;
    Ok(Json(json!({ "employee": employee })))
}

/// GET /employees/:employeeId/timesheets - list the employee's timesheets
pub async fn list_timesheets(
    State(state): State<ServerState>,
    Extension(employee): Extension<Employee>,
) -> AppResult<Json<Value>> {
    let timesheets = timesheet::find_for_employee(&state.pool, employee.id).await?;
    Ok(Json(json!({ "timesheets": timesheets })))
}

/// POST /employees/:employeeId/timesheets - create a timesheet for the employee
pub async fn create_timesheet(
    State(state): State<ServerState>,
    Extension(employee): Extension<Employee>,
    Json(body): Json<TimesheetBody>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let data = validate_timesheet(body.timesheet)?;
    let timesheet = timesheet::create(&state.pool, employee.id, data).await?;
    Ok((StatusCode::CREATED, Json(json!({ "timesheet": timesheet }))))
}

/// PUT /employees/:employeeId/timesheets/:timesheetId
///
/// The response keeps the plural `timesheets` key of the original API.
pub async fn update_timesheet(
    State(state): State<ServerState>,
    Extension(employee): Extension<Employee>,
    Extension(current): Extension<Timesheet>,
    Json(body): Json<TimesheetBody>,
) -> AppResult<Json<Value>> {
    let data = validate_timesheet(body.timesheet)?;
    let timesheet = timesheet::update(&state.pool, current.id, employee.id, data).await?;
    Ok(Json(json!({ "timesheets": timesheet })))
}

/// DELETE /employees/:employeeId/timesheets/:timesheetId - hard delete
pub async fn remove_timesheet(
    State(state): State<ServerState>,
    Extension(current): Extension<Timesheet>,
) -> AppResult<StatusCode> {
    timesheet::delete(&state.pool, current.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
