pub mod admin;
pub mod ai;
pub mod auth;
pub mod chapter;
pub mod character;
pub mod health;
pub mod novel;
pub mod outline;
pub mod world_building;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                      register (public)
/// /auth/login                         login (public)
/// /auth/me                            current user
///
/// /novels                             list, create
/// /novels/{novel_id}                  get, update, delete
/// /novels/{novel_id}/chapters         list, create, reorder, get, update, delete
/// /novels/{novel_id}/characters       list, create
/// /novels/{novel_id}/outlines         list, create, reorder
/// /novels/{novel_id}/world-building   get, upsert
///
/// /chapters/{id}                      flat aliases
/// /characters/{id}                    flat aliases
/// /outlines/{id}                      flat aliases
/// /world-buildings                    list, get, update, delete
///
/// /ai/*                               chat + nine assistant features
///
/// /admin/users, /admin/novels         moderation (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/novels", novel::router())
        .nest("/chapters", chapter::router())
        .nest("/characters", character::router())
        .nest("/outlines", outline::router())
        .nest("/world-buildings", world_building::router())
        .nest("/ai", ai::router())
        .nest("/admin", admin::router())
}
