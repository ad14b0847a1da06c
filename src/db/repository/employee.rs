//! Employee Repository

use super::{RepoError, RepoResult};
use crate::db::models::{Employee, EmployeeFields};
use sqlx::SqlitePool;

const EMPLOYEE_SELECT: &str =
    "SELECT id, name, position, wage, is_current_employee FROM Employee";

/// Find all currently-employed employees
pub async fn find_current(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let sql = format!("{EMPLOYEE_SELECT} WHERE is_current_employee = 1 ORDER BY id");
    let employees = sqlx::query_as::<_, Employee>(&sql).fetch_all(pool).await?;
    Ok(employees)
}

/// Find employee by id, retired ones included
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let sql = format!("{EMPLOYEE_SELECT} WHERE id = ?");
    let employee = sqlx::query_as::<_, Employee>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(employee)
}

/// Insert a new employee and re-fetch it by the assigned id
pub async fn create(pool: &SqlitePool, data: EmployeeFields) -> RepoResult<Employee> {
    let result = sqlx::query(
        "INSERT INTO Employee (name, position, wage, is_current_employee) VALUES (?, ?, ?, ?)",
    )
    .bind(&data.name)
    .bind(&data.position)
    .bind(data.wage)
    .bind(data.is_current_employee)
    .execute(pool)
    .await?;

    find_by_id(pool, result.last_insert_rowid())
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create employee".into()))
}

/// Overwrite all mutable fields of an employee and re-fetch the row
pub async fn update(pool: &SqlitePool, id: i64, data: EmployeeFields) -> RepoResult<Employee> {
    sqlx::query(
        "UPDATE Employee SET name = ?, position = ?, wage = ?, is_current_employee = ? WHERE id = ?",
    )
    .bind(&data.name)
    .bind(&data.position)
    .bind(data.wage)
    .bind(data.is_current_employee)
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
}

/// Soft delete: flip is_current_employee to 0 and re-fetch the row
pub async fn retire(pool: &SqlitePool, id: i64) -> RepoResult<Employee> {
    sqlx::query("UPDATE Employee SET is_current_employee = 0 WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
}
