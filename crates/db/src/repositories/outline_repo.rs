//! Repository for the `outlines` table. Same ownership and ordering rules
//! as chapters, minus the aggregate maintenance.

use scribe_core::ordering::resolve_sort_order;
use scribe_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::outline::{CreateOutline, Outline, UpdateOutline};

/// Column list shared across queries; alias `o` matches the join queries.
const COLUMNS: &str = "o.id, o.novel_id, o.title, o.content, o.chapter_range, o.sort_order, \
     o.created_at, o.updated_at";

/// Provides CRUD and reorder operations for outlines.
pub struct OutlineRepo;

impl OutlineRepo {
    /// Insert a new outline, returning the created row. A missing or
    /// non-positive requested order appends after the current last outline.
    pub async fn create(
        pool: &PgPool,
        novel_id: DbId,
        input: &CreateOutline,
    ) -> Result<Outline, sqlx::Error> {
        let current_max = Self::max_sort_order(pool, novel_id).await?;
        let sort_order = resolve_sort_order(input.sort_order, current_max);

        let query = format!(
            "INSERT INTO outlines AS o (id, novel_id, title, content, chapter_range, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Outline>(&query)
            .bind(Uuid::new_v4())
            .bind(novel_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.chapter_range)
            .bind(sort_order)
            .fetch_one(pool)
            .await
    }

    /// List all outlines of a novel in order.
    pub async fn list_by_novel(pool: &PgPool, novel_id: DbId) -> Result<Vec<Outline>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM outlines o
             WHERE o.novel_id = $1
             ORDER BY o.sort_order ASC, o.created_at ASC"
        );
        sqlx::query_as::<_, Outline>(&query)
            .bind(novel_id)
            .fetch_all(pool)
            .await
    }

    /// Find an outline by ID, scoped to the owner of its novel.
    pub async fn find_owned(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Outline>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM outlines o
             JOIN novels n ON n.id = o.novel_id
             WHERE o.id = $1 AND n.user_id = $2 AND n.is_banned = FALSE"
        );
        sqlx::query_as::<_, Outline>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update an outline. Only non-`None` fields are applied. Returns
    /// `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOutline,
    ) -> Result<Option<Outline>, sqlx::Error> {
        let query = format!(
            "UPDATE outlines AS o SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                chapter_range = COALESCE($4, chapter_range),
                sort_order = COALESCE($5, sort_order),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Outline>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.chapter_range)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an outline by ID. Returns `true` if a row was
    /// removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM outlines WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All outline IDs of a novel; the reference set for permutation
    /// validation before a reorder.
    pub async fn ids_by_novel(pool: &PgPool, novel_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM outlines WHERE novel_id = $1")
            .bind(novel_id)
            .fetch_all(pool)
            .await
    }

    /// Write a validated set of `(outline_id, sort_order)` assignments in
    /// one transaction.
    pub async fn apply_sort_orders(
        pool: &PgPool,
        novel_id: DbId,
        assignments: &[(DbId, i32)],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        for (id, sort_order) in assignments {
            sqlx::query(
                "UPDATE outlines SET sort_order = $3, updated_at = NOW()
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

    async fn max_sort_order(pool: &PgPool, novel_id: DbId) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<i32>>(
            "SELECT MAX(sort_order) FROM outlines WHERE novel_id = $1",
        )
        .bind(novel_id)
        .fetch_one(pool)
        .await
    }
}
