//! Repository for the `characters` table.

use scribe_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::character::{Character, CreateCharacter, UpdateCharacter};

const COLUMNS: &str = "c.id, c.novel_id, c.name, c.description, c.avatar, c.personality, \
     c.background, c.relationships, c.created_at, c.updated_at";

/// Provides CRUD operations for characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character, returning the created row.
    pub async fn create(
        pool: &PgPool,
        novel_id: DbId,
        input: &CreateCharacter,
    ) -> Result<Character, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters AS c
                 (id, novel_id, name, description, avatar, personality, background, relationships)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(Uuid::new_v4())
            .bind(novel_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.avatar)
            .bind(&input.personality)
            .bind(&input.background)
            .bind(&input.relationships)
            .fetch_one(pool)
            .await
    }

    /// List all characters of a novel, newest first.
    pub async fn list_by_novel(
        pool: &PgPool,
        novel_id: DbId,
    ) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM characters c
             WHERE c.novel_id = $1
             ORDER BY c.created_at DESC"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(novel_id)
            .fetch_all(pool)
            .await
    }

    /// Find a character by ID, scoped to the owner of its novel.
    pub async fn find_owned(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM characters c
             JOIN novels n ON n.id = c.novel_id
             WHERE c.id = $1 AND n.user_id = $2 AND n.is_banned = FALSE"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a character. Only non-`None` fields are applied. Returns
    /// `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCharacter,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!(
            "UPDATE characters AS c SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                avatar = COALESCE($4, avatar),
                personality = COALESCE($5, personality),
                background = COALESCE($6, background),
                relationships = COALESCE($7, relationships),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.avatar)
            .bind(&input.personality)
            .bind(&input.background)
            .bind(&input.relationships)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a character by ID. Returns `true` if a row was
    /// removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
