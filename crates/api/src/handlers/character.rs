//! Handlers for characters, nested under `/novels/{novel_id}/characters`
//! with flat `/characters/{id}` aliases.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use scribe_core::error::CoreError;
use scribe_core::types::DbId;
use scribe_db::models::character::{Character, CreateCharacter, UpdateCharacter};
use scribe_db::repositories::{CharacterRepo, NovelRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

async fn owned_novel(state: &AppState, user: &AuthUser, novel_id: DbId) -> AppResult<()> {
    NovelRepo::find_owned(&state.pool, novel_id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Novel",
            id: novel_id,
        }))?;
    Ok(())
}

/// POST /api/v1/novels/{novel_id}/characters
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(novel_id): Path<DbId>,
    Json(input): Json<CreateCharacter>,
) -> AppResult<(StatusCode, Json<Character>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "name must not be empty".into(),
        )));
    }
    owned_novel(&state, &user, novel_id).await?;

    let character = CharacterRepo::create(&state.pool, novel_id, &input).await?;
    Ok((StatusCode::CREATED, Json(character)))
}

/// GET /api/v1/novels/{novel_id}/characters
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Path(novel_id): Path<DbId>,
) -> AppResult<Json<Vec<Character>>> {
    owned_novel(&state, &user, novel_id).await?;
    let characters = CharacterRepo::list_by_novel(&state.pool, novel_id).await?;
    Ok(Json(characters))
}

/// GET /api/v1/characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Character>> {
    let character = CharacterRepo::find_owned(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;
    Ok(Json(character))
}

/// PUT /api/v1/characters/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCharacter>,
) -> AppResult<Json<Character>> {
    CharacterRepo::find_owned(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;

    let character = CharacterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;
    Ok(Json(character))
}

/// DELETE /api/v1/characters/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    CharacterRepo::find_owned(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;

    CharacterRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
