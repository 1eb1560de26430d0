//! Repository for the `chapters` table.
//!
//! Ownership checks join through `novels`; a chapter belonging to another
//! user's novel, or to a banned novel, is indistinguishable from a missing
//! one. Aggregate maintenance on the parent novel is the caller's
//! responsibility (see `NovelRepo::recalculate_stats`).

use scribe_core::ordering::resolve_sort_order;
use scribe_core::text::word_count;
use scribe_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::chapter::{Chapter, CreateChapter, UpdateChapter};

/// Column list shared across queries; alias `c` matches the join queries.
const COLUMNS: &str = "c.id, c.novel_id, c.title, c.content, c.summary, c.word_count, \
     c.sort_order, c.status, c.created_at, c.updated_at";

/// Provides CRUD and reorder operations for chapters.
pub struct ChapterRepo;

impl ChapterRepo {
    /// Insert a new chapter, returning the created row.
    ///
    /// A missing or non-positive requested order appends after the current
    /// last chapter. `word_count` is derived from the content.
    pub async fn create(
        pool: &PgPool,
        novel_id: DbId,
        input: &CreateChapter,
    ) -> Result<Chapter, sqlx::Error> {
        let current_max = Self::max_sort_order(pool, novel_id).await?;
        let sort_order = resolve_sort_order(input.sort_order, current_max);

        let query = format!(
            "INSERT INTO chapters AS c (id, novel_id, title, content, summary, word_count, sort_order, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, 'draft'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Chapter>(&query)
            .bind(Uuid::new_v4())
            .bind(novel_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.summary)
            .bind(word_count(&input.content))
            .bind(sort_order)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// List all chapters of a novel in reading order.
    pub async fn list_by_novel(pool: &PgPool, novel_id: DbId) -> Result<Vec<Chapter>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM chapters c
             WHERE c.novel_id = $1
             ORDER BY c.sort_order ASC, c.created_at ASC"
        );
        sqlx::query_as::<_, Chapter>(&query)
            .bind(novel_id)
            .fetch_all(pool)
            .await
    }

    /// Find a chapter by ID, scoped to the owner of its novel.
    pub async fn find_owned(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Chapter>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM chapters c
             JOIN novels n ON n.id = c.novel_id
             WHERE c.id = $1 AND n.user_id = $2 AND n.is_banned = FALSE"
        );
        sqlx::query_as::<_, Chapter>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a chapter. Only non-`None` fields are applied; when `content`
    /// changes the stored `word_count` is replaced with `new_word_count`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateChapter,
        new_word_count: Option<i32>,
    ) -> Result<Option<Chapter>, sqlx::Error> {
        let query = format!(
            "UPDATE chapters AS c SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                summary = COALESCE($4, summary),
                sort_order = COALESCE($5, sort_order),
                status = COALESCE($6, status),
                word_count = COALESCE($7, word_count),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Chapter>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.summary)
            .bind(input.sort_order)
            .bind(&input.status)
            .bind(new_word_count)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a chapter by ID. Returns `true` if a row was
    /// removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM chapters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All chapter IDs of a novel; the reference set for permutation
    /// validation before a reorder.
    pub async fn ids_by_novel(pool: &PgPool, novel_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM chapters WHERE novel_id = $1")
            .bind(novel_id)
            .fetch_all(pool)
            .await
    }

    /// Write a validated set of `(chapter_id, sort_order)` assignments in
    /// one transaction, so a failed reorder leaves every order untouched.
    pub async fn apply_sort_orders(
        pool: &PgPool,
        novel_id: DbId,
        assignments: &[(DbId, i32)],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        for (id, sort_order) in assignments {
            sqlx::query(
                "UPDATE chapters SET sort_order = $3, updated_at = NOW()
                 WHERE id = $2 AND novel_id = $1",
            )
            .bind(novel_id)
            .bind(id)
            .bind(sort_order)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await
    }

    /// Highest sort order currently used within a novel, if any chapters
    /// exist.
    async fn max_sort_order(pool: &PgPool, novel_id: DbId) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<i32>>(
            "SELECT MAX(sort_order) FROM chapters WHERE novel_id = $1",
        )
        .bind(novel_id)
        .fetch_one(pool)
        .await
    }
}
