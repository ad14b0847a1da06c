//! Timesheet Repository

use super::{RepoError, RepoResult};
use crate::db::models::{Timesheet, TimesheetFields};
use sqlx::SqlitePool;

const TIMESHEET_SELECT: &str =
    "SELECT id, hours, rate, date, employee_id FROM Timesheet";

/// Find all timesheets of one employee
pub async fn find_for_employee(pool: &SqlitePool, employee_id: i64) -> RepoResult<Vec<Timesheet>> {
    let sql = format!("{TIMESHEET_SELECT} WHERE employee_id = ? ORDER BY id");
    let timesheets = sqlx::query_as::<_, Timesheet>(&sql)
        .bind(employee_id)
        .fetch_all(pool)
        .await?;
    Ok(timesheets)
}

/// Find timesheet by id
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Timesheet>> {
    let sql = format!("{TIMESHEET_SELECT} WHERE id = ?");
    let timesheet = sqlx::query_as::<_, Timesheet>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(timesheet)
}

/// Insert a new timesheet for an employee and re-fetch it by the assigned id
pub async fn create(
    pool: &SqlitePool,
    employee_id: i64,
    data: TimesheetFields,
) -> RepoResult<Timesheet> {
    let result = sqlx::query(
        "INSERT INTO Timesheet (hours, rate, date, employee_id) VALUES (?, ?, ?, ?)",
    )
    .bind(data.hours)
    .bind(data.rate)
    .bind(data.date)
    .bind(employee_id)
    .execute(pool)
    .await?;

    find_by_id(pool, result.last_insert_rowid())
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create timesheet".into()))
}

/// Overwrite all mutable fields of a timesheet and re-fetch the row
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    employee_id: i64,
    data: TimesheetFields,
) -> RepoResult<Timesheet> {
    sqlx::query(
        "UPDATE Timesheet SET hours = ?, rate = ?, date = ?, employee_id = ? WHERE id = ?",
    )
    .bind(data.hours)
    .bind(data.rate)
    .bind(data.date)
    .bind(employee_id)
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Timesheet {id} not found")))
}

/// Hard delete a timesheet
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    sqlx::query("DELETE FROM Timesheet WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
