//! Repository for the `areas` table.

use cragbook_core::catalog::SortField;
use cragbook_core::types::DbId;
use sqlx::PgPool;

use crate::models::area::{Area, CreateArea, UpdateArea};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, area_name, state, added_date, added_by";

/// Provides CRUD operations for areas.
pub struct AreaRepo;

impl AreaRepo {
    /// Insert a new area, returning the created row. `added_date` is `NOW()`.
    pub async fn create(pool: &PgPool, input: &CreateArea) -> Result<Area, sqlx::Error> {
        let query = format!(
            "INSERT INTO areas (area_name, state, added_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Area>(&query)
            .bind(&input.area_name)
            .bind(&input.state)
            .bind(&input.added_by)
            .fetch_one(pool)
            .await
    }

    /// Find an area by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Area>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM areas WHERE id = $1");
        sqlx::query_as::<_, Area>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all areas in ascending `sort` order.
    pub async fn list(pool: &PgPool, sort: SortField) -> Result<Vec<Area>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM areas a ORDER BY {}",
            sort.order_by("a")
        );
        sqlx::query_as::<_, Area>(&query).fetch_all(pool).await
    }

    /// Replace an area's fields, keeping its id.
    ///
    /// `added_date` is reset to `NOW()` on every update.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArea,
    ) -> Result<Option<Area>, sqlx::Error> {
        let query = format!(
            "UPDATE areas SET
                area_name = $2,
                state = $3,
                added_by = $4,
                added_date = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Area>(&query)
            .bind(id)
            .bind(&input.area_name)
            .bind(&input.state)
            .bind(&input.added_by)
            .fetch_optional(pool)
            .await
    }

    /// Delete an area by ID. Returns `true` if a row was removed.
    ///
    /// Performs no dependent check; see [`crate::repositories::CatalogRepo::delete_area`].
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM areas WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether an area with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM areas WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Total number of areas.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM areas")
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }
}
