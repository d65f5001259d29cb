pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::editor::handlers::resume_routes;
use crate::export::handlers as export;
use crate::state::AppState;
use crate::templates::handlers as templates;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Document editing
        .nest("/api/v1/resume", resume_routes())
        // Templates
        .route("/api/v1/templates", get(templates::handle_list_templates))
        .route(
            "/api/v1/templates/:id/preview",
            get(templates::handle_preview),
        )
        .route("/api/v1/render", get(templates::handle_render))
        // Export
        .route("/api/v1/export/:format", post(export::handle_export))
        .with_state(state)
}
