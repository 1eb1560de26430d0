//! Handlers for outlines, nested under `/novels/{novel_id}/outlines` with
//! flat `/outlines/{id}` aliases. Reordering follows the same
//! full-permutation contract as chapters.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use scribe_core::error::CoreError;
use scribe_core::ordering::{assign_sort_orders, validate_permutation};
use scribe_core::types::DbId;
use scribe_db::models::outline::{CreateOutline, Outline, UpdateOutline};
use scribe_db::repositories::{NovelRepo, OutlineRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `PATCH /novels/{novel_id}/outlines/reorder`.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    /// The full permutation of the novel's outline IDs, in desired order.
    pub outline_ids: Vec<DbId>,
}

async fn owned_novel(state: &AppState, user: &AuthUser, novel_id: DbId) -> AppResult<()> {
    NovelRepo::find_owned(&state.pool, novel_id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Novel",
            id: novel_id,
        }))?;
    Ok(())
}

/// POST /api/v1/novels/{novel_id}/outlines
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(novel_id): Path<DbId>,
    Json(input): Json<CreateOutline>,
) -> AppResult<(StatusCode, Json<Outline>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "title must not be empty".into(),
        )));
    }
    owned_novel(&state, &user, novel_id).await?;

    let outline = OutlineRepo::create(&state.pool, novel_id, &input).await?;
    Ok((StatusCode::CREATED, Json(outline)))
}

/// GET /api/v1/novels/{novel_id}/outlines
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Path(novel_id): Path<DbId>,
) -> AppResult<Json<Vec<Outline>>> {
    owned_novel(&state, &user, novel_id).await?;
    let outlines = OutlineRepo::list_by_novel(&state.pool, novel_id).await?;
    Ok(Json(outlines))
}

/// PATCH /api/v1/novels/{novel_id}/outlines/reorder
pub async fn reorder(
    State(state): State<AppState>,
    user: AuthUser,
    Path(novel_id): Path<DbId>,
    Json(input): Json<ReorderRequest>,
) -> AppResult<Json<Vec<Outline>>> {
    owned_novel(&state, &user, novel_id).await?;

    let existing = OutlineRepo::ids_by_novel(&state.pool, novel_id).await?;
    validate_permutation(&existing, &input.outline_ids)?;

    let assignments = assign_sort_orders(&input.outline_ids);
    OutlineRepo::apply_sort_orders(&state.pool, novel_id, &assignments).await?;

    let outlines = OutlineRepo::list_by_novel(&state.pool, novel_id).await?;
    Ok(Json(outlines))
}

/// GET /api/v1/outlines/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Outline>> {
    let outline = OutlineRepo::find_owned(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Outline",
            id,
        }))?;
    Ok(Json(outline))
}

/// PUT /api/v1/outlines/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOutline>,
) -> AppResult<Json<Outline>> {
    OutlineRepo::find_owned(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Outline",
            id,
        }))?;

    let outline = OutlineRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Outline",
            id,
        }))?;
    Ok(Json(outline))
}

/// DELETE /api/v1/outlines/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    OutlineRepo::find_owned(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Outline",
            id,
        }))?;

    OutlineRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
