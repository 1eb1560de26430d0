//! Flat alias routes for `/outlines/{id}`.

use axum::routing::get;
use axum::Router;

use crate::handlers::outline;
use crate::state::AppState;

/// Routes mounted at `/outlines`.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(outline::get_by_id)
            .put(outline::update)
            .delete(outline::delete),
    )
}
