//! Menu API Module

mod handler;
mod resolver;

use axum::{
    Router, middleware,
    routing::{delete, get, put},
};

use crate::core::ServerState;

/// Menu router: /menus plus nested menu items
pub fn router(state: ServerState) -> Router<ServerState> {
    Router::new().nest("/menus", routes(state))
}

fn routes(state: ServerState) -> Router<ServerState> {
    // DELETE gets the dependent-items guard on top of the resolver
    let guarded = Router::new().route("/", delete(handler::remove)).layer(
        middleware::from_fn_with_state(state.clone(), resolver::require_no_items),
    );

    let scoped = Router::new()
        .route("/", get(handler::get_by_id).put(handler::update))
        .merge(guarded)
        .nest("/menu-items", item_routes(state.clone()))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            resolver::resolve_menu,
        ));

    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .nest("/{menuId}", scoped)
}

fn item_routes(state: ServerState) -> Router<ServerState> {
    let scoped = Router::new()
        .route("/", put(handler::update_item).delete(handler::remove_item))
        .layer(middleware::from_fn_with_state(
            state,
            resolver::resolve_menu_item,
        ));

    Router::new()
        .route("/", get(handler::list_items).post(handler::create_item))
        .nest("/{menuItemId}", scoped)
}
