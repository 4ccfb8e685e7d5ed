pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalogue
        .route("/api/v1/archetypes", get(handlers::handle_list_archetypes))
        .route("/api/v1/flaws", get(handlers::handle_list_flaws))
        // Generation
        .route(
            "/api/v1/candidates/generate",
            post(handlers::handle_generate),
        )
        .route("/api/v1/candidates/batch", post(handlers::handle_batch))
        .with_state(state)
}
