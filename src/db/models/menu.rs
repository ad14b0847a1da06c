//! Menu Model

use serde::{Deserialize, Serialize};

/// Menu row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Menu {
    pub id: i64,
    pub title: String,
}

/// `menu` object of a create/update request body, before validation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuPayload {
    pub title: Option<String>,
}

/// Request body wrapper: `{ "menu": { ... } }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuBody {
    #[serde(default)]
    pub menu: MenuPayload,
}
