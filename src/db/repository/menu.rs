//! Menu Repository

use super::{RepoError, RepoResult};
use crate::db::models::Menu;
use sqlx::SqlitePool;

const MENU_SELECT: &str = "SELECT id, title FROM Menu";

/// Find all menus
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Menu>> {
    let sql = format!("{MENU_SELECT} ORDER BY id");
    let menus = sqlx::query_as::<_, Menu>(&sql).fetch_all(pool).await?;
    Ok(menus)
}

/// Find menu by id
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Menu>> {
    let sql = format!("{MENU_SELECT} WHERE id = ?");
    let menu = sqlx::query_as::<_, Menu>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(menu)
}

/// Insert a new menu and re-fetch it by the assigned id
pub async fn create(pool: &SqlitePool, title: &str) -> RepoResult<Menu> {
    let result = sqlx::query("INSERT INTO Menu (title) VALUES (?)")
        .bind(title)
        .execute(pool)
        .await?;

    find_by_id(pool, result.last_insert_rowid())
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create menu".into()))
}

/// Overwrite the menu title and re-fetch the row
pub async fn update(pool: &SqlitePool, id: i64, title: &str) -> RepoResult<Menu> {
    sqlx::query("UPDATE Menu SET title = ? WHERE id = ?")
        .bind(title)
        .bind(id)
        .execute(pool)
        .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Menu {id} not found")))
}

/// Hard delete a menu. The dependent-items guard runs before this.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    sqlx::query("DELETE FROM Menu WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
