//! Repository for the `sectors` table.

use cragbook_core::catalog::SortField;
use cragbook_core::types::DbId;
use sqlx::PgPool;

use crate::models::sector::{
    CreateSector, Sector, SectorDependent, SectorSummary, SectorWithArea, UpdateSector,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, sector_name, area_id, added_date, added_by";

/// Sector columns plus the owning area's columns prefixed with `area_`.
/// Expects `sectors s JOIN areas a`.
const WITH_AREA_COLUMNS: &str = "s.id, s.sector_name, s.added_date, s.added_by, \
     a.id AS area_id, a.area_name AS area_area_name, a.state AS area_state, \
     a.added_date AS area_added_date, a.added_by AS area_added_by";

/// Provides CRUD and lookup operations for sectors.
pub struct SectorRepo;

impl SectorRepo {
    /// Insert a new sector, returning the created row.
    ///
    /// The referenced area must exist; otherwise the insert fails on
    /// `fk_sectors_area`.
    pub async fn create(pool: &PgPool, input: &CreateSector) -> Result<Sector, sqlx::Error> {
        let query = format!(
            "INSERT INTO sectors (sector_name, area_id, added_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sector>(&query)
            .bind(&input.sector_name)
            .bind(input.area_id)
            .bind(&input.added_by)
            .fetch_one(pool)
            .await
    }

    /// Find a sector by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Sector>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sectors WHERE id = $1");
        sqlx::query_as::<_, Sector>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a sector with its area resolved.
    pub async fn find_with_area(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SectorWithArea>, sqlx::Error> {
        let query = format!(
            "SELECT {WITH_AREA_COLUMNS} FROM sectors s
             JOIN areas a ON a.id = s.area_id
             WHERE s.id = $1"
        );
        sqlx::query_as::<_, SectorWithArea>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all sectors with their areas resolved, in ascending `sort` order.
    pub async fn list_with_area(
        pool: &PgPool,
        sort: SortField,
    ) -> Result<Vec<SectorWithArea>, sqlx::Error> {
        let query = format!(
            "SELECT {WITH_AREA_COLUMNS} FROM sectors s
             JOIN areas a ON a.id = s.area_id
             ORDER BY {}",
            sort.order_by("s")
        );
        sqlx::query_as::<_, SectorWithArea>(&query)
            .fetch_all(pool)
            .await
    }

    /// Sectors directly owned by an area, sorted by name.
    pub async fn list_by_area(
        pool: &PgPool,
        area_id: DbId,
    ) -> Result<Vec<SectorSummary>, sqlx::Error> {
        let query = format!(
            "SELECT s.id, s.sector_name FROM sectors s
             WHERE s.area_id = $1
             ORDER BY {}",
            SortField::SectorName.order_by("s")
        );
        sqlx::query_as::<_, SectorSummary>(&query)
            .bind(area_id)
            .fetch_all(pool)
            .await
    }

    /// Sectors referencing an area, each with its own route count.
    ///
    /// These are what block deleting the area.
    pub async fn list_dependents_of_area(
        pool: &PgPool,
        area_id: DbId,
    ) -> Result<Vec<SectorDependent>, sqlx::Error> {
        let query = format!(
            "SELECT s.id, s.sector_name, COUNT(r.id) AS route_count
             FROM sectors s
             LEFT JOIN routes r ON r.sector_id = s.id
             WHERE s.area_id = $1
             GROUP BY s.id, s.sector_name
             ORDER BY {}",
            SortField::SectorName.order_by("s")
        );
        sqlx::query_as::<_, SectorDependent>(&query)
            .bind(area_id)
            .fetch_all(pool)
            .await
    }

    /// Number of sectors referencing an area.
    pub async fn count_by_area(pool: &PgPool, area_id: DbId) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sectors WHERE area_id = $1")
            .bind(area_id)
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }

    /// Replace a sector's fields, keeping its id.
    ///
    /// `added_date` is reset to `NOW()`. Moving the sector to another area
    /// moves its routes' `area_id` with it in the same transaction.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSector,
    ) -> Result<Option<Sector>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE sectors SET
                sector_name = $2,
                area_id = $3,
                added_by = $4,
                added_date = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let sector = sqlx::query_as::<_, Sector>(&query)
            .bind(id)
            .bind(&input.sector_name)
            .bind(input.area_id)
            .bind(&input.added_by)
            .fetch_optional(&mut *tx)
            .await?;

        if sector.is_some() {
            sqlx::query("UPDATE routes SET area_id = $2 WHERE sector_id = $1 AND area_id <> $2")
                .bind(id)
                .bind(input.area_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(sector)
    }

    /// Delete a sector by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sectors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of sectors.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sectors")
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }
}
