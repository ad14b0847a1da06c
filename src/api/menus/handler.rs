//! Menu API Handlers

use axum::{
    Json,
    extract::{Extension, State},
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::core::ServerState;
use crate::db::models::{
    Menu, MenuBody, MenuItem, MenuItemBody, MenuItemFields, MenuItemPayload, MenuPayload,
};
use crate::db::repository::{menu, menu_item};
use crate::utils::AppResult;
use crate::utils::validation::{require_integer, require_number, require_text};

fn validate_menu(payload: MenuPayload) -> AppResult<String> {
    require_text(payload.title, "title")
}

/// Check required menu item fields; description is free-form and optional
fn validate_menu_item(payload: MenuItemPayload) -> AppResult<MenuItemFields> {
    let name = require_text(payload.name, "name")?;
    let inventory = require_integer(payload.inventory, "inventory")?;
    let price = require_number(payload.price, "price")?;

    Ok(MenuItemFields {
        name,
        description: payload.description,
        inventory,
        price,
    })
}

/// GET /menus - list all menus
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Value>> {
    let menus = menu::find_all(&state.pool).await?;
    Ok(Json(json!({ "menus": menus })))
}

/// POST /menus - create a menu
pub async fn create(
    State(state): State<ServerState>,
    Json(body): Json<MenuBody>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let title = validate_menu(body.menu)?;
    let menu = menu::create(&state.pool, &title).await?;
    Ok((StatusCode::CREATED, Json(json!({ "menu": menu }))))
}

/// GET /menus/:menuId - return the resolved menu
pub async fn get_by_id(Extension(menu): Extension<Menu>) -> Json<Value> {
    Json(json!({ "menu": menu }))
}

/// PUT /menus/:menuId - overwrite the menu title
pub async fn update(
    State(state): State<ServerState>,
    Extension(current): Extension<Menu>,
    Json(body): Json<MenuBody>,
) -> AppResult<Json<Value>> {
    let title = validate_menu(body.menu)?;
    let menu = menu::update(&state.pool, current.id, &title).await?;
    Ok(Json(json!({ "menu": menu })))
}

/// DELETE /menus/:menuId - hard delete, guarded against remaining items
pub async fn remove(
    State(state): State<ServerState>,
    Extension(current): Extension<Menu>,
) -> AppResult<StatusCode> {
    menu::delete(&state.pool, current.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /menus/:menuId/menu-items - list the menu's items, empty list included
pub async fn list_items(
    State(state): State<ServerState>,
    Extension(menu): Extension<Menu>,
) -> AppResult<Json<Value>> {
    let items = menu_item::find_for_menu(&state.pool, menu.id).await?;
    Ok(Json(json!({ "menuItems": items })))
}

/// POST /menus/:menuId/menu-items
///
/// The response keeps the plural `menuItems` key of the original API.
pub async fn create_item(
    State(state): State<ServerState>,
    Extension(menu): Extension<Menu>,
    Json(body): Json<MenuItemBody>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let data = validate_menu_item(body.menu_item)?;
    let item = menu_item::create(&state.pool, menu.id, data).await?;
    Ok((StatusCode::CREATED, Json(json!({ "menuItems": item }))))
}

/// PUT /menus/:menuId/menu-items/:menuItemId - overwrite all item fields
pub async fn update_item(
    State(state): State<ServerState>,
    Extension(current): Extension<MenuItem>,
    Json(body): Json<MenuItemBody>,
) -> AppResult<Json<Value>> {
    let data = validate_menu_item(body.menu_item)?;
    let item = menu_item::update(&state.pool, current.id, data).await?;
    Ok(Json(json!({ "menuItem": item })))
}

/// DELETE /menus/:menuId/menu-items/:menuItemId - hard delete
pub async fn remove_item(
    State(state): State<ServerState>,
    Extension(current): Extension<MenuItem>,
) -> AppResult<StatusCode> {
    menu_item::delete(&state.pool, current.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
