//! Routes for the flat `/world-buildings` surface.

use axum::routing::get;
use axum::Router;

use crate::handlers::world_building;
use crate::state::AppState;

/// Routes mounted at `/world-buildings`.
///
/// ```text
/// GET    /?novel_id=   list (optionally filtered by novel)
/// GET    /{id}         get
/// PUT    /{id}         update
/// DELETE /{id}         delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(world_building::list))
        .route(
            "/{id}",
            get(world_building::get_by_id)
                .put(world_building::update)
                .delete(world_building::delete),
        )
}
