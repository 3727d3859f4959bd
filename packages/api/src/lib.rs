// ABOUTME: HTTP API layer for Listkeeper providing REST endpoints and routing
// ABOUTME: Integration layer over the checklist item service

use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub mod checklist_handlers;
pub mod error;
pub mod health;
pub mod state;

pub use error::{ApiResult, AppError};
pub use state::AppState;

/// Creates the checklist API router (nested under /api/checklist)
pub fn create_checklist_router() -> Router<AppState> {
    Router::new()
        .route("/", get(checklist_handlers::list_items))
        .route("/", post(checklist_handlers::create_item))
        .route("/search", get(checklist_handlers::search_items))
        .route("/bulk", post(checklist_handlers::create_items))
        .route("/{id}", get(checklist_handlers::get_item))
        .route("/{id}", put(checklist_handlers::update_item))
        .route("/{id}", delete(checklist_handlers::delete_item))
}

/// Creates the full application router with state applied
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .nest("/api/checklist", create_checklist_router())
        .with_state(state)
}
