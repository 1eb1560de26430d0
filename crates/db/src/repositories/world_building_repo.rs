//! Repository for the `world_buildings` table.
//!
//! Each novel carries at most one world-building document, enforced by
//! `uq_world_buildings_novel_id`; writes go through an upsert.

use scribe_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::world_building::{UpdateWorldBuilding, UpsertWorldBuilding, WorldBuilding};

const COLUMNS: &str = "w.id, w.novel_id, w.title, w.content, w.kind, w.created_at, w.updated_at";

/// Provides upsert-style persistence for world-building documents.
pub struct WorldBuildingRepo;

impl WorldBuildingRepo {
    /// Insert the novel's world-building document, or replace its fields if
    /// one already exists. Returns the resulting row either way.
    pub async fn upsert(
        pool: &PgPool,
        novel_id: DbId,
        input: &UpsertWorldBuilding,
    ) -> Result<WorldBuilding, sqlx::Error> {
        let query = format!(
            "INSERT INTO world_buildings AS w (id, novel_id, title, content, kind)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (novel_id) DO UPDATE SET
                title = EXCLUDED.title,
                content = EXCLUDED.content,
                kind = EXCLUDED.kind,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorldBuilding>(&query)
            .bind(Uuid::new_v4())
            .bind(novel_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.kind)
            .fetch_one(pool)
            .await
    }

    /// The world-building document of a novel, if one exists.
    pub async fn get_by_novel(
        pool: &PgPool,
        novel_id: DbId,
    ) -> Result<Option<WorldBuilding>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM world_buildings w WHERE w.novel_id = $1");
        sqlx::query_as::<_, WorldBuilding>(&query)
            .bind(novel_id)
            .fetch_optional(pool)
            .await
    }

    /// List world-building documents across the caller's novels, optionally
    /// restricted to one novel. Banned novels are excluded like everywhere
    /// else on the owner-facing surface.
    pub async fn list_owned(
        pool: &PgPool,
        user_id: DbId,
        novel_id: Option<DbId>,
    ) -> Result<Vec<WorldBuilding>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM world_buildings w
             JOIN novels n ON n.id = w.novel_id
             WHERE n.user_id = $1 AND n.is_banned = FALSE
               AND ($2::uuid IS NULL OR w.novel_id = $2)
             ORDER BY w.updated_at DESC"
        );
        sqlx::query_as::<_, WorldBuilding>(&query)
            .bind(user_id)
            .bind(novel_id)
            .fetch_all(pool)
            .await
    }

    /// Find a world-building document by ID, scoped to the owner of its
    /// novel.
    pub async fn find_owned(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<WorldBuilding>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM world_buildings w
             JOIN novels n ON n.id = w.novel_id
             WHERE w.id = $1 AND n.user_id = $2 AND n.is_banned = FALSE"
        );
        sqlx::query_as::<_, WorldBuilding>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a world-building document. Only non-`None` fields are
    /// applied. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWorldBuilding,
    ) -> Result<Option<WorldBuilding>, sqlx::Error> {
        let query = format!(
            "UPDATE world_buildings AS w SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                kind = COALESCE($4, kind),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorldBuilding>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.kind)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a world-building document by ID. Returns `true`
    /// if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM world_buildings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
