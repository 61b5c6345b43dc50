//! API routes for timeclock-server

pub mod employees;
pub mod health;
pub mod time_entries;

use axum::Router;
use axum::routing::get;
use shared::error::{AppError, ErrorCode};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Map an unexpected store error to a 500, logging the cause
fn internal(e: impl std::fmt::Display) -> AppError {
    tracing::error!("Store error: {e}");
    AppError::new(ErrorCode::InternalError)
}

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    let employees = Router::new()
        .route("/", get(employees::list).post(employees::create))
        .route(
            "/{id}",
            get(employees::get_by_id)
                .put(employees::update)
                .delete(employees::delete),
        )
        .route(
            "/{employee_id}/time-entries",
            get(time_entries::list).post(time_entries::create),
        )
        .route(
            "/{employee_id}/time-entries/{entry_id}",
            get(time_entries::get_by_id)
                .put(time_entries::update)
                .delete(time_entries::delete),
        );

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/Employees", employees)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
