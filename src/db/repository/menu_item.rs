//! MenuItem Repository

use super::{RepoError, RepoResult};
use crate::db::models::{MenuItem, MenuItemFields};
use sqlx::SqlitePool;

const MENU_ITEM_SELECT: &str =
    "SELECT id, name, description, inventory, price, menu_id FROM MenuItem";

/// Find all items of one menu
pub async fn find_for_menu(pool: &SqlitePool, menu_id: i64) -> RepoResult<Vec<MenuItem>> {
    let sql = format!("{MENU_ITEM_SELECT} WHERE menu_id = ? ORDER BY id");
    let items = sqlx::query_as::<_, MenuItem>(&sql)
        .bind(menu_id)
        .fetch_all(pool)
        .await?;
    Ok(items)
}

/// Count items still referencing one menu
pub async fn count_for_menu(pool: &SqlitePool, menu_id: i64) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM MenuItem WHERE menu_id = ?")
        .bind(menu_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Find menu item by id
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<MenuItem>> {
    let sql = format!("{MENU_ITEM_SELECT} WHERE id = ?");
    let item = sqlx::query_as::<_, MenuItem>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(item)
}

/// Insert a new item for a menu and re-fetch it by the assigned id
pub async fn create(
    pool: &SqlitePool,
    menu_id: i64,
    data: MenuItemFields,
) -> RepoResult<MenuItem> {
    let result = sqlx::query(
        "INSERT INTO MenuItem (name, description, inventory, price, menu_id) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.inventory)
    .bind(data.price)
    .bind(menu_id)
    .execute(pool)
    .await?;

    find_by_id(pool, result.last_insert_rowid())
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create menu item".into()))
}

/// Overwrite all mutable fields of a menu item and re-fetch the row
pub async fn update(pool: &SqlitePool, id: i64, data: MenuItemFields) -> RepoResult<MenuItem> {
    sqlx::query(
        "UPDATE MenuItem SET name = ?, description = ?, inventory = ?, price = ? WHERE id = ?",
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.inventory)
    .bind(data.price)
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("MenuItem {id} not found")))
}

/// Hard delete a menu item
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    sqlx::query("DELETE FROM MenuItem WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
