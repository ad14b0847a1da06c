//! Menu path-parameter resolvers and delete guard

use std::collections::HashMap;

use axum::{
    extract::{Path, Request, State},
    middleware::Next,
    response::Response,
};

use crate::core::ServerState;
use crate::db::models::Menu;
use crate::db::repository::{menu, menu_item};
use crate::utils::{AppError, AppResult};

/// Resolve `:menuId` and attach the Menu row
pub async fn resolve_menu(
    State(state): State<ServerState>,
    Path(params): Path<HashMap<String, String>>,
    mut req: Request,
    next: Next,
) -> AppResult<Response> {
    let raw = params.get("menuId").cloned().unwrap_or_default();
    let found = match raw.parse::<i64>() {
        Ok(id) => menu::find_by_id(&state.pool, id).await?,
        Err(_) => None,
    };
    let menu = found.ok_or_else(|| AppError::not_found(format!("Menu {raw} not found")))?;

    req.extensions_mut().insert(menu);
    Ok(next.run(req).await)
}

/// Resolve `:menuItemId` and attach the MenuItem row
pub async fn resolve_menu_item(
    State(state): State<ServerState>,
    Path(params): Path<HashMap<String, String>>,
    mut req: Request,
    next: Next,
) -> AppResult<Response> {
    let raw = params.get("menuItemId").cloned().unwrap_or_default();
    let found = match raw.parse::<i64>() {
        Ok(id) => menu_item::find_by_id(&state.pool, id).await?,
        Err(_) => None,
    };
    let item = found.ok_or_else(|| AppError::not_found(format!("MenuItem {raw} not found")))?;

    req.extensions_mut().insert(item);
    Ok(next.run(req).await)
}

/// Refuse to delete a menu while items still reference it.
/// Runs after [`resolve_menu`], so the Menu row is already in extensions.
pub async fn require_no_items(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> AppResult<Response> {
    let menu = req
        .extensions()
        .get::<Menu>()
        .cloned()
        .ok_or_else(|| AppError::internal("menu not resolved before delete guard"))?;

    let count = menu_item::count_for_menu(&state.pool, menu.id).await?;
    if count > 0 {
        return Err(AppError::conflict(format!(
            "Menu {} still has menu items",
            menu.id
        )));
    }

    Ok(next.run(req).await)
}
