//! Handlers for chapters, both nested under `/novels/{novel_id}/chapters`
//! and as flat `/chapters/{id}` aliases.
//!
//! Every chapter mutation finishes with a full recompute of the parent
//! novel's chapter/word aggregates.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use scribe_core::error::CoreError;
use scribe_core::ordering::{assign_sort_orders, validate_permutation};
use scribe_core::text::word_count;
use scribe_core::types::DbId;
use scribe_db::models::chapter::{Chapter, CreateChapter, UpdateChapter};
use scribe_db::repositories::{ChapterRepo, NovelRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `PATCH /novels/{novel_id}/chapters/reorder`.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    /// The full permutation of the novel's chapter IDs, in desired order.
    pub chapter_ids: Vec<DbId>,
}

/// Resolve a novel the caller owns, or 404.
async fn owned_novel(state: &AppState, user: &AuthUser, novel_id: DbId) -> AppResult<()> {
    NovelRepo::find_owned(&state.pool, novel_id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Novel",
            id: novel_id,
        }))?;
    Ok(())
}

/// POST /api/v1/novels/{novel_id}/chapters
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(novel_id): Path<DbId>,
    Json(input): Json<CreateChapter>,
) -> AppResult<(StatusCode, Json<Chapter>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "title must not be empty".into(),
        )));
    }
    owned_novel(&state, &user, novel_id).await?;

    let chapter = ChapterRepo::create(&state.pool, novel_id, &input).await?;
    NovelRepo::recalculate_stats(&state.pool, novel_id).await?;
    Ok((StatusCode::CREATED, Json(chapter)))
}

/// GET /api/v1/novels/{novel_id}/chapters
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Path(novel_id): Path<DbId>,
) -> AppResult<Json<Vec<Chapter>>> {
    owned_novel(&state, &user, novel_id).await?;
    let chapters = ChapterRepo::list_by_novel(&state.pool, novel_id).await?;
    Ok(Json(chapters))
}

/// PATCH /api/v1/novels/{novel_id}/chapters/reorder
///
/// The request must list every chapter of the novel exactly once; any
/// missing, unknown, or duplicated ID rejects the whole request and
/// leaves the stored order untouched.
pub async fn reorder(
    State(state): State<AppState>,
    user: AuthUser,
    Path(novel_id): Path<DbId>,
    Json(input): Json<ReorderRequest>,
) -> AppResult<Json<Vec<Chapter>>> {
    owned_novel(&state, &user, novel_id).await?;

    let existing = ChapterRepo::ids_by_novel(&state.pool, novel_id).await?;
    validate_permutation(&existing, &input.chapter_ids)?;

    let assignments = assign_sort_orders(&input.chapter_ids);
    ChapterRepo::apply_sort_orders(&state.pool, novel_id, &assignments).await?;

    let chapters = ChapterRepo::list_by_novel(&state.pool, novel_id).await?;
    Ok(Json(chapters))
}

/// GET /api/v1/chapters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Chapter>> {
    let chapter = ChapterRepo::find_owned(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Chapter",
            id,
        }))?;
    Ok(Json(chapter))
}

/// GET /api/v1/novels/{novel_id}/chapters/{id}
pub async fn get_nested(
    State(state): State<AppState>,
    user: AuthUser,
    Path((novel_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Chapter>> {
    let chapter = find_in_novel(&state, &user, novel_id, id).await?;
    Ok(Json(chapter))
}

/// PUT /api/v1/chapters/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateChapter>,
) -> AppResult<Json<Chapter>> {
    let existing = ChapterRepo::find_owned(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Chapter",
            id,
        }))?;
    apply_update(&state, existing, id, &input).await
}

/// PUT /api/v1/novels/{novel_id}/chapters/{id}
pub async fn update_nested(
    State(state): State<AppState>,
    user: AuthUser,
    Path((novel_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateChapter>,
) -> AppResult<Json<Chapter>> {
    let existing = find_in_novel(&state, &user, novel_id, id).await?;
    apply_update(&state, existing, id, &input).await
}

/// DELETE /api/v1/chapters/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = ChapterRepo::find_owned(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Chapter",
            id,
        }))?;
    remove(&state, existing).await
}

/// DELETE /api/v1/novels/{novel_id}/chapters/{id}
pub async fn delete_nested(
    State(state): State<AppState>,
    user: AuthUser,
    Path((novel_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let existing = find_in_novel(&state, &user, novel_id, id).await?;
    remove(&state, existing).await
}

/// Fetch a chapter scoped to both the owner and the novel in the path.
async fn find_in_novel(
    state: &AppState,
    user: &AuthUser,
    novel_id: DbId,
    id: DbId,
) -> AppResult<Chapter> {
    let chapter = ChapterRepo::find_owned(&state.pool, id, user.user_id)
        .await?
        .filter(|c| c.novel_id == novel_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Chapter",
            id,
        }))?;
    Ok(chapter)
}

async fn apply_update(
    state: &AppState,
    existing: Chapter,
    id: DbId,
    input: &UpdateChapter,
) -> AppResult<Json<Chapter>> {
    // Replacing the content replaces the derived word count too.
    let new_word_count = input.content.as_deref().map(word_count);

    let chapter = ChapterRepo::update(&state.pool, id, input, new_word_count)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Chapter",
            id,
        }))?;
    NovelRepo::recalculate_stats(&state.pool, existing.novel_id).await?;
    Ok(Json(chapter))
}

async fn remove(state: &AppState, existing: Chapter) -> AppResult<StatusCode> {
    let deleted = ChapterRepo::delete(&state.pool, existing.id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Chapter",
            id: existing.id,
        }));
    }
    NovelRepo::recalculate_stats(&state.pool, existing.novel_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
