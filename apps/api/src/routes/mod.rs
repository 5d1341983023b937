pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/generate", post(handlers::handle_generate))
        .route("/optimize", post(handlers::handle_optimize))
        // Paths the create/optimize form pages post to
        .route("/api/generate-resume", post(handlers::handle_generate))
        .route("/api/optimize-resume", post(handlers::handle_optimize))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
