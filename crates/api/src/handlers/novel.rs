//! Handlers for the `/novels` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use scribe_core::error::CoreError;
use scribe_core::types::DbId;
use scribe_db::models::novel::{CreateNovel, Novel, UpdateNovel};
use scribe_db::repositories::NovelRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/novels
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateNovel>,
) -> AppResult<(StatusCode, Json<Novel>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "title must not be empty".into(),
        )));
    }
    let novel = NovelRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(novel)))
}

/// GET /api/v1/novels
pub async fn list(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<Vec<Novel>>> {
    let novels = NovelRepo::list_by_user(&state.pool, user.user_id).await?;
    Ok(Json(novels))
}

/// GET /api/v1/novels/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Novel>> {
    let novel = NovelRepo::find_owned(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Novel", id }))?;
    Ok(Json(novel))
}

/// PUT /api/v1/novels/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNovel>,
) -> AppResult<Json<Novel>> {
    let novel = NovelRepo::update_owned(&state.pool, id, user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Novel", id }))?;
    Ok(Json(novel))
}

/// DELETE /api/v1/novels/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = NovelRepo::delete_owned(&state.pool, id, user.user_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Novel", id }))
    }
}
