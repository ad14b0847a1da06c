//! Employee API Module

mod handler;
mod resolver;

use axum::{
    Router, middleware,
    routing::{get, put},
};

use crate::core::ServerState;

/// Employee router: /employees plus nested timesheets
pub fn router(state: ServerState) -> Router<ServerState> {
    Router::new().nest("/employees", routes(state))
}

fn routes(state: ServerState) -> Router<ServerState> {
    // Everything under /{employeeId} runs the employee resolver first
    let scoped = Router::new()
        .route(
            "/",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::remove),
        )
        .nest("/timesheets", timesheet_routes(state.clone()))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            resolver::resolve_employee,
        ));

    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .nest("/{employeeId}", scoped)
}

fn timesheet_routes(state: ServerState) -> Router<ServerState> {
    let scoped = Router::new()
        .route(
            "/",
            put(handler::update_timesheet).delete(handler::remove_timesheet),
        )
        .layer(middleware::from_fn_with_state(
            state,
            resolver::resolve_timesheet,
        ));

    Router::new()
        .route(
            "/",
            get(handler::list_timesheets).post(handler::create_timesheet),
        )
        .nest("/{timesheetId}", scoped)
}
