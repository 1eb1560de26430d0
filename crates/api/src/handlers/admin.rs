//! Handlers for the `/admin` surface (admin flag required).
//!
//! Admins see every user and every novel, banned or not, and can toggle
//! the ban/admin flags, reset passwords, and transfer novel ownership.

use axum::extract::{Path, State};
use axum::Json;
use scribe_core::error::CoreError;
use scribe_core::types::DbId;
use scribe_db::models::novel::{AdminNovel, AdminUpdateNovel};
use scribe_db::models::user::{AdminUpdateUser, UserView};
use scribe_db::repositories::{NovelRepo, UserRepo};
use serde::Deserialize;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Request body for `PATCH /admin/users/{id}`. The plaintext password, if
/// present, is hashed before it reaches the repository.
#[derive(Debug, Deserialize)]
pub struct AdminUserPatch {
    pub email: Option<String>,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub password: Option<String>,
    pub is_admin: Option<bool>,
    pub is_banned: Option<bool>,
}

/// GET /api/v1/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<UserView>>> {
    let users = UserRepo::list_all(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserView::from).collect()))
}

/// GET /api/v1/admin/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserView>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(UserView::from(user)))
}

/// PATCH /api/v1/admin/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<AdminUserPatch>,
) -> AppResult<Json<UserView>> {
    let password_hash = match &input.password {
        Some(password) => Some(
            hash_password(password)
                .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?,
        ),
        None => None,
    };

    let update = AdminUpdateUser {
        email: input.email,
        name: input.name,
        avatar: input.avatar,
        password_hash,
        is_admin: input.is_admin,
        is_banned: input.is_banned,
    };

    let user = UserRepo::admin_update(&state.pool, id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(UserView::from(user)))
}

/// GET /api/v1/admin/novels
pub async fn list_novels(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<AdminNovel>>> {
    let novels = NovelRepo::admin_list(&state.pool).await?;
    Ok(Json(novels))
}

/// GET /api/v1/admin/novels/{id}
pub async fn get_novel(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<AdminNovel>> {
    let novel = NovelRepo::admin_find(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Novel", id }))?;
    Ok(Json(novel))
}

/// PATCH /api/v1/admin/novels/{id}
pub async fn update_novel(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<AdminUpdateNovel>,
) -> AppResult<Json<AdminNovel>> {
    let novel = NovelRepo::admin_update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Novel", id }))?;
    Ok(Json(novel))
}
