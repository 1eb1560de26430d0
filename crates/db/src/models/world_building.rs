//! World-building entity model and DTOs.
//!
//! Each novel has at most one world-building document, enforced by a
//! unique constraint on `novel_id`; writes go through an upsert.

use scribe_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A world-building row from the `world_buildings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorldBuilding {
    pub id: DbId,
    pub novel_id: DbId,
    pub title: String,
    pub content: String,
    pub kind: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or fully replacing a novel's world-building document.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertWorldBuilding {
    pub title: String,
    pub content: String,
    pub kind: String,
}

/// DTO for partially updating an existing world-building document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateWorldBuilding {
    pub title: Option<String>,
    pub content: Option<String>,
    pub kind: Option<String>,
}
