//! Repository for the `comments` table.
//!
//! Comments are created and read; there is no update.

use cragbook_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{Comment, CommentSummary, CreateComment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, route_id, comment_text, added_date, added_by";

pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateComment) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (route_id, comment_text, added_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(input.route_id)
            .bind(&input.comment_text)
            .bind(&input.added_by)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Comments on one route, oldest first.
    pub async fn list_by_route(
        pool: &PgPool,
        route_id: DbId,
    ) -> Result<Vec<CommentSummary>, sqlx::Error> {
        sqlx::query_as::<_, CommentSummary>(
            "SELECT id, comment_text, added_date, added_by FROM comments
             WHERE route_id = $1
             ORDER BY added_date ASC",
        )
        .bind(route_id)
        .fetch_all(pool)
        .await
    }

    /// Delete a comment by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
