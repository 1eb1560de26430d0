//! Route definitions for the `/ai` feature endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::ai;
use crate::state::AppState;

/// Routes mounted at `/ai`. All POST, all require auth.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/chat", post(ai::chat))
        .route("/continue-writing", post(ai::continue_writing))
        .route("/refine", post(ai::refine))
        .route("/review", post(ai::review))
        .route("/deconstruct", post(ai::deconstruct))
        .route("/naming", post(ai::naming))
        .route("/generate-outline", post(ai::generate_outline))
        .route("/generate-character", post(ai::generate_character))
        .route("/generate-world", post(ai::generate_world))
        .route("/generate-draft", post(ai::generate_draft))
}
