//! Character entity model and DTOs.

use scribe_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A character row from the `characters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub novel_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub avatar: Option<String>,
    pub personality: Option<String>,
    pub background: Option<String>,
    pub relationships: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new character.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCharacter {
    pub name: String,
    pub description: Option<String>,
    pub avatar: Option<String>,
    pub personality: Option<String>,
    pub background: Option<String>,
    pub relationships: Option<String>,
}

/// DTO for updating an existing character. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCharacter {
    pub name: Option<String>,
    pub description: Option<String>,
    pub avatar: Option<String>,
    pub personality: Option<String>,
    pub background: Option<String>,
    pub relationships: Option<String>,
}
