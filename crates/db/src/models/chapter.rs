//! Chapter entity model and DTOs.

use scribe_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A chapter row from the `chapters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Chapter {
    pub id: DbId,
    pub novel_id: DbId,
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub word_count: i32,
    pub sort_order: i32,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new chapter.
///
/// A missing or non-positive `sort_order` appends the chapter after the
/// novel's current last chapter. `word_count` is always derived from
/// `content`, never taken from the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChapter {
    pub title: String,
    /// Defaults to an empty body when omitted.
    #[serde(default)]
    pub content: String,
    pub summary: Option<String>,
    pub sort_order: Option<i32>,
    /// Defaults to `draft` when omitted.
    pub status: Option<String>,
}

/// DTO for updating an existing chapter. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateChapter {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub sort_order: Option<i32>,
    pub status: Option<String>,
}
