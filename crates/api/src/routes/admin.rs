//! Route definitions for the `/admin` surface (admin flag required).

use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET   /users         list users
/// GET   /users/{id}    get user
/// PATCH /users/{id}    update user (ban, promote, reset password)
/// GET   /novels        list novels with owner identity
/// GET   /novels/{id}   get novel
/// PATCH /novels/{id}   update novel (ban, transfer ownership)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(admin::list_users))
        .route(
            "/users/{id}",
            get(admin::get_user).patch(admin::update_user),
        )
        .route("/novels", get(admin::list_novels))
        .route(
            "/novels/{id}",
            get(admin::get_novel).patch(admin::update_novel),
        )
}
