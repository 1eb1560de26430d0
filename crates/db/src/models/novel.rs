//! Novel entity model and DTOs.
//!
//! `word_count` and `chapter_count` are denormalized aggregates; they are
//! recomputed in full by [`NovelRepo::recalculate_stats`] after every
//! chapter mutation.
//!
//! [`NovelRepo::recalculate_stats`]: crate::repositories::NovelRepo::recalculate_stats

use scribe_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A novel row from the `novels` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Novel {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub status: String,
    pub cover_image: Option<String>,
    pub tags: Option<String>,
    pub is_banned: bool,
    pub word_count: i32,
    pub chapter_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new novel.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNovel {
    pub title: String,
    pub description: Option<String>,
    pub genre: Option<String>,
    /// Defaults to `draft` when omitted.
    pub status: Option<String>,
    pub tags: Option<String>,
}

/// DTO for updating an existing novel. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNovel {
    pub title: Option<String>,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub status: Option<String>,
    pub tags: Option<String>,
    pub cover_image: Option<String>,
}

/// Admin-side partial update; can also transfer ownership and toggle the
/// ban flag.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminUpdateNovel {
    pub title: Option<String>,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub status: Option<String>,
    pub tags: Option<String>,
    pub cover_image: Option<String>,
    pub user_id: Option<DbId>,
    pub is_banned: Option<bool>,
}

/// Admin listing row: a novel joined with its owner's identity.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdminNovel {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub status: String,
    pub cover_image: Option<String>,
    pub tags: Option<String>,
    pub is_banned: bool,
    pub word_count: i32,
    pub chapter_count: i32,
    pub user_email: Option<String>,
    pub user_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
