pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::document::handlers as document;
use crate::preview::handlers as preview;
use crate::session::handlers as session;
use crate::state::AppState;
use crate::suggestion::handlers as suggestion;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Document
        .route(
            "/api/v1/resume",
            get(document::handle_get_resume).put(document::handle_put_resume),
        )
        .route(
            "/api/v1/resume/validation",
            get(document::handle_get_validation),
        )
        .route(
            "/api/v1/resume/:section/entries",
            post(document::handle_add_entry),
        )
        .route(
            "/api/v1/resume/:section/entries/reorder",
            post(document::handle_reorder_entries),
        )
        .route(
            "/api/v1/resume/:section/entries/:id",
            delete(document::handle_remove_entry),
        )
        // Section order
        .route("/api/v1/sections", get(session::handle_get_sections))
        .route(
            "/api/v1/sections/reorder",
            post(session::handle_reorder_sections),
        )
        // Reset / undo
        .route("/api/v1/reset", post(session::handle_reset))
        .route("/api/v1/reset/undo", post(session::handle_undo_reset))
        // Suggestions
        .route("/api/v1/suggestions", post(suggestion::handle_suggest))
        .route(
            "/api/v1/suggestions/accept",
            post(suggestion::handle_accept),
        )
        .route("/api/v1/preview", get(preview::handle_preview))
        .with_state(state)
}
