//! MenuItem Model

use serde::{Deserialize, Serialize};

/// MenuItem row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub inventory: i64,
    pub price: f64,
    /// Back-reference to the owning menu
    pub menu_id: i64,
}

/// `menuItem` object of a create/update request body, before validation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuItemPayload {
    pub name: Option<String>,
    /// Optional free text, not part of required-field validation
    pub description: Option<String>,
    pub inventory: Option<i64>,
    pub price: Option<f64>,
}

/// Request body wrapper: `{ "menuItem": { ... } }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuItemBody {
    #[serde(default, rename = "menuItem")]
    pub menu_item: MenuItemPayload,
}

/// Validated menu item fields, bound into INSERT/UPDATE statements
#[derive(Debug, Clone)]
pub struct MenuItemFields {
    pub name: String,
    pub description: Option<String>,
    pub inventory: i64,
    pub price: f64,
}
