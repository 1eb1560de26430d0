//! Flat alias routes for `/chapters/{id}`.

use axum::routing::get;
use axum::Router;

use crate::handlers::chapter;
use crate::state::AppState;

/// Routes mounted at `/chapters`.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(chapter::get_by_id)
            .put(chapter::update)
            .delete(chapter::delete),
    )
}
