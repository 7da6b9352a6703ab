//! Repository for the `routes` table.

use cragbook_core::catalog::SortField;
use cragbook_core::types::DbId;
use sqlx::PgPool;

use crate::models::route::{
    CreateRoute, Route, RouteSummary, RouteWithArea, RouteWithParents, UpdateRoute,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, route_name, route_type, route_grade, area_id, sector_id, added_date, added_by";

const OWN_COLUMNS: &str =
    "r.id, r.route_name, r.route_type, r.route_grade, r.sector_id, r.added_date, r.added_by";

/// The joined area's columns prefixed with `area_`. Expects `areas a`.
const AREA_COLUMNS: &str = "a.id AS area_id, a.area_name AS area_area_name, \
     a.state AS area_state, a.added_date AS area_added_date, a.added_by AS area_added_by";

/// The joined sector's columns prefixed with `sector_`. Expects `sectors s`.
const SECTOR_COLUMNS: &str = "s.id AS sector_id, s.sector_name AS sector_sector_name, \
     s.area_id AS sector_area_id, s.added_date AS sector_added_date, \
     s.added_by AS sector_added_by";

/// Provides CRUD and lookup operations for routes.
pub struct RouteRepo;

impl RouteRepo {
    /// Insert a new route, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRoute) -> Result<Route, sqlx::Error> {
        let query = format!(
            "INSERT INTO routes (route_name, route_type, route_grade, area_id, sector_id, added_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Route>(&query)
            .bind(&input.route_name)
            .bind(&input.route_type)
            .bind(&input.route_grade)
            .bind(input.area_id)
            .bind(input.sector_id)
            .bind(&input.added_by)
            .fetch_one(pool)
            .await
    }

    /// Find a route by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Route>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM routes WHERE id = $1");
        sqlx::query_as::<_, Route>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a route with its area and sector resolved.
    pub async fn find_with_parents(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RouteWithParents>, sqlx::Error> {
        // `area_id` and `sector_id` name the joined parents' ids here, so the
        // route's own reference columns are left out.
        let query = format!(
            "SELECT r.id, r.route_name, r.route_type, r.route_grade, r.added_date, r.added_by,
                    {AREA_COLUMNS}, {SECTOR_COLUMNS}
             FROM routes r
             JOIN areas a ON a.id = r.area_id
             JOIN sectors s ON s.id = r.sector_id
             WHERE r.id = $1"
        );
        sqlx::query_as::<_, RouteWithParents>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all routes with their areas resolved, in ascending `sort` order.
    pub async fn list_with_area(
        pool: &PgPool,
        sort: SortField,
    ) -> Result<Vec<RouteWithArea>, sqlx::Error> {
        let query = format!(
            "SELECT {OWN_COLUMNS}, {AREA_COLUMNS}
             FROM routes r
             JOIN areas a ON a.id = r.area_id
             ORDER BY {}",
            sort.order_by("r")
        );
        sqlx::query_as::<_, RouteWithArea>(&query)
            .fetch_all(pool)
            .await
    }

    /// Routes in a sector, sorted by grade string.
    ///
    /// The order is byte-wise, not by difficulty: `5.10a` precedes `5.9`.
    pub async fn list_by_sector(
        pool: &PgPool,
        sector_id: DbId,
    ) -> Result<Vec<RouteSummary>, sqlx::Error> {
        let query = format!(
            "SELECT r.id, r.route_name, r.route_type, r.route_grade FROM routes r
             WHERE r.sector_id = $1
             ORDER BY {}",
            SortField::RouteGrade.order_by("r")
        );
        sqlx::query_as::<_, RouteSummary>(&query)
            .bind(sector_id)
            .fetch_all(pool)
            .await
    }

    /// Number of routes referencing a sector.
    pub async fn count_by_sector(pool: &PgPool, sector_id: DbId) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM routes WHERE sector_id = $1")
            .bind(sector_id)
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }

    /// Replace a route's own fields. Area, sector and `added_date` are kept.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRoute,
    ) -> Result<Option<Route>, sqlx::Error> {
        let query = format!(
            "UPDATE routes SET
                route_name = $2,
                route_type = $3,
                route_grade = $4,
                added_by = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Route>(&query)
            .bind(id)
            .bind(&input.route_name)
            .bind(&input.route_type)
            .bind(&input.route_grade)
            .bind(&input.added_by)
            .fetch_optional(pool)
            .await
    }

    /// Delete a route by ID, cascading to its comments.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM routes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of routes.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM routes")
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }
}
