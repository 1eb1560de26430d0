//! Outline entity model and DTOs.

use scribe_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An outline row from the `outlines` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Outline {
    pub id: DbId,
    pub novel_id: DbId,
    pub title: String,
    pub content: Option<String>,
    pub chapter_range: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new outline. A missing or non-positive `sort_order`
/// appends after the novel's current last outline.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOutline {
    pub title: String,
    pub content: Option<String>,
    pub chapter_range: Option<String>,
    pub sort_order: Option<i32>,
}

/// DTO for updating an existing outline. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOutline {
    pub title: Option<String>,
    pub content: Option<String>,
    pub chapter_range: Option<String>,
    pub sort_order: Option<i32>,
}
