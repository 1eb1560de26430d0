//! Route definitions for `/novels` and its nested sub-resources.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::{chapter, character, novel, outline, world_building};
use crate::state::AppState;

/// Routes mounted at `/novels`.
///
/// ```text
/// GET    /                                    list
/// POST   /                                    create
/// GET    /{novel_id}                          get
/// PUT    /{novel_id}                          update
/// DELETE /{novel_id}                          delete
///
/// GET    /{novel_id}/chapters                 list chapters
/// POST   /{novel_id}/chapters                 create chapter
/// PATCH  /{novel_id}/chapters/reorder         reorder chapters
/// GET    /{novel_id}/chapters/{id}            get chapter
/// PUT    /{novel_id}/chapters/{id}            update chapter
/// DELETE /{novel_id}/chapters/{id}            delete chapter
///
/// GET    /{novel_id}/characters               list characters
/// POST   /{novel_id}/characters               create character
///
/// GET    /{novel_id}/outlines                 list outlines
/// POST   /{novel_id}/outlines                 create outline
/// PATCH  /{novel_id}/outlines/reorder         reorder outlines
///
/// GET    /{novel_id}/world-building           get document
/// PUT    /{novel_id}/world-building           upsert document
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(novel::list).post(novel::create))
        .route(
            "/{novel_id}",
            get(novel::get_by_id)
                .put(novel::update)
                .delete(novel::delete),
        )
        .route(
            "/{novel_id}/chapters",
            get(chapter::list).post(chapter::create),
        )
        .route("/{novel_id}/chapters/reorder", patch(chapter::reorder))
        .route(
            "/{novel_id}/chapters/{id}",
            get(chapter::get_nested)
                .put(chapter::update_nested)
                .delete(chapter::delete_nested),
        )
        .route(
            "/{novel_id}/characters",
            get(character::list).post(character::create),
        )
        .route(
            "/{novel_id}/outlines",
            get(outline::list).post(outline::create),
        )
        .route("/{novel_id}/outlines/reorder", patch(outline::reorder))
        .route(
            "/{novel_id}/world-building",
            get(world_building::get_for_novel).put(world_building::upsert_for_novel),
        )
}
