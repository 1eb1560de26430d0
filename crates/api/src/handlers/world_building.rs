//! Handlers for world-building documents.
//!
//! A novel carries at most one document; the nested `PUT` is an upsert.
//! The flat `/world-buildings` surface supports listing across novels
//! and direct updates by document ID.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use scribe_core::error::CoreError;
use scribe_core::types::DbId;
use scribe_db::models::world_building::{UpdateWorldBuilding, UpsertWorldBuilding, WorldBuilding};
use scribe_db::repositories::{NovelRepo, WorldBuildingRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters for `GET /world-buildings`.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub novel_id: Option<DbId>,
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

/// GET /api/v1/novels/{novel_id}/world-building
pub async fn get_for_novel(
    State(state): State<AppState>,
    user: AuthUser,
    Path(novel_id): Path<DbId>,
) -> AppResult<Json<WorldBuilding>> {
    owned_novel(&state, &user, novel_id).await?;

    let world = WorldBuildingRepo::get_by_novel(&state.pool, novel_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WorldBuilding",
            id: novel_id,
        }))?;
    Ok(Json(world))
}

/// PUT /api/v1/novels/{novel_id}/world-building
///
/// Creates the novel's world-building document or replaces it in full.
pub async fn upsert_for_novel(
    State(state): State<AppState>,
    user: AuthUser,
    Path(novel_id): Path<DbId>,
    Json(input): Json<UpsertWorldBuilding>,
) -> AppResult<Json<WorldBuilding>> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "title must not be empty".into(),
        )));
    }
    owned_novel(&state, &user, novel_id).await?;

    let world = WorldBuildingRepo::upsert(&state.pool, novel_id, &input).await?;
    Ok(Json(world))
}

/// GET /api/v1/world-buildings?novel_id=
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<WorldBuilding>>> {
    let worlds = WorldBuildingRepo::list_owned(&state.pool, user.user_id, query.novel_id).await?;
    Ok(Json(worlds))
}

/// GET /api/v1/world-buildings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<WorldBuilding>> {
    let world = WorldBuildingRepo::find_owned(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WorldBuilding",
            id,
        }))?;
    Ok(Json(world))
}

/// PUT /api/v1/world-buildings/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWorldBuilding>,
) -> AppResult<Json<WorldBuilding>> {
    WorldBuildingRepo::find_owned(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WorldBuilding",
            id,
        }))?;

    let world = WorldBuildingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WorldBuilding",
            id,
        }))?;
    Ok(Json(world))
}

/// DELETE /api/v1/world-buildings/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    WorldBuildingRepo::find_owned(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WorldBuilding",
            id,
        }))?;

    WorldBuildingRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
