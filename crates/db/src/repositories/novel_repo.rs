//! Repository for the `novels` table.
//!
//! Owner-facing reads exclude banned novels; the `admin_*` methods see
//! everything.

use scribe_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::novel::{AdminNovel, AdminUpdateNovel, CreateNovel, Novel, UpdateNovel};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, title, description, genre, status, cover_image, tags, \
     is_banned, word_count, chapter_count, created_at, updated_at";

/// Admin projection: novel columns joined with the owner's identity.
const ADMIN_COLUMNS: &str =
    "n.id, n.user_id, n.title, n.description, n.genre, n.status, n.cover_image, n.tags, \
     n.is_banned, n.word_count, n.chapter_count, u.email AS user_email, u.name AS user_name, \
     n.created_at, n.updated_at";

/// Provides CRUD operations for novels plus aggregate maintenance.
pub struct NovelRepo;

impl NovelRepo {
    /// Insert a new novel owned by `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateNovel,
    ) -> Result<Novel, sqlx::Error> {
        let query = format!(
            "INSERT INTO novels (id, user_id, title, description, genre, status, tags)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'draft'), $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Novel>(&query)
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.genre)
            .bind(&input.status)
            .bind(&input.tags)
            .fetch_one(pool)
            .await
    }

    /// List all novels owned by a user, newest first. Banned novels are
    /// omitted, same as every other owner-facing read.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Novel>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM novels
             WHERE user_id = $1 AND is_banned = FALSE
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Novel>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find a novel by ID, scoped to its owner. Banned novels are treated
    /// as absent so every sub-resource of a banned novel 404s uniformly.
    pub async fn find_owned(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Novel>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM novels
             WHERE id = $1 AND user_id = $2 AND is_banned = FALSE"
        );
        sqlx::query_as::<_, Novel>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a novel owned by `user_id`. Only non-`None` fields are
    /// applied. Returns `None` if the novel is absent, banned, or not
    /// owned by the caller.
    pub async fn update_owned(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateNovel,
    ) -> Result<Option<Novel>, sqlx::Error> {
        let query = format!(
            "UPDATE novels SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                genre = COALESCE($5, genre),
                status = COALESCE($6, status),
                tags = COALESCE($7, tags),
                cover_image = COALESCE($8, cover_image),
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2 AND is_banned = FALSE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Novel>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.genre)
            .bind(&input.status)
            .bind(&input.tags)
            .bind(&input.cover_image)
            .fetch_optional(pool)
            .await
    }

    /// Delete a novel owned by `user_id`; children cascade at the schema
    /// level. Returns `true` if a row was removed.
    pub async fn delete_owned(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM novels WHERE id = $1 AND user_id = $2 AND is_banned = FALSE")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Recompute and persist the denormalized chapter/word aggregates from
    /// the live chapter rows. Called after every chapter mutation; always a
    /// full recompute, never incremental.
    pub async fn recalculate_stats(pool: &PgPool, novel_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE novels SET
                chapter_count = (SELECT COUNT(*) FROM chapters WHERE novel_id = $1),
                word_count = (SELECT COALESCE(SUM(word_count), 0) FROM chapters WHERE novel_id = $1),
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(novel_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    // -----------------------------------------------------------------
    // Admin methods: no ownership scoping, banned rows included.
    // -----------------------------------------------------------------

    /// List every novel with its owner's identity, most recently updated
    /// first.
    pub async fn admin_list(pool: &PgPool) -> Result<Vec<AdminNovel>, sqlx::Error> {
        let query = format!(
            "SELECT {ADMIN_COLUMNS} FROM novels n
             LEFT JOIN users u ON u.id = n.user_id
             ORDER BY n.updated_at DESC"
        );
        sqlx::query_as::<_, AdminNovel>(&query).fetch_all(pool).await
    }

    /// Find any novel by ID with its owner's identity.
    pub async fn admin_find(pool: &PgPool, id: DbId) -> Result<Option<AdminNovel>, sqlx::Error> {
        let query = format!(
            "SELECT {ADMIN_COLUMNS} FROM novels n
             LEFT JOIN users u ON u.id = n.user_id
             WHERE n.id = $1"
        );
        sqlx::query_as::<_, AdminNovel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Apply an admin-side partial update (including ownership transfer
    /// and ban toggling). Returns the joined projection, or `None` if the
    /// novel does not exist.
    pub async fn admin_update(
        pool: &PgPool,
        id: DbId,
        input: &AdminUpdateNovel,
    ) -> Result<Option<AdminNovel>, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE novels SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                genre = COALESCE($4, genre),
                status = COALESCE($5, status),
                tags = COALESCE($6, tags),
                cover_image = COALESCE($7, cover_image),
                user_id = COALESCE($8, user_id),
                is_banned = COALESCE($9, is_banned),
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.genre)
        .bind(&input.status)
        .bind(&input.tags)
        .bind(&input.cover_image)
        .bind(input.user_id)
        .bind(input.is_banned)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Self::admin_find(pool, id).await
    }
}
