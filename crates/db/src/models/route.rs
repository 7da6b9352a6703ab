//! Route entity model and DTOs.

use cragbook_core::types::{DbId, Timestamp};
use cragbook_core::validation::forms::ValidRoute;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

use crate::models::area::Area;
use crate::models::comment::CommentSummary;
use crate::models::sector::Sector;

/// A route row from the `routes` table.
///
/// `area_id` is copied from the sector when the route is created.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Route {
    pub id: DbId,
    pub route_name: String,
    pub route_type: String,
    pub route_grade: String,
    pub area_id: DbId,
    pub sector_id: DbId,
    pub added_date: Timestamp,
    pub added_by: String,
}

/// A route with its area resolved, for the route list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteWithArea {
    pub id: DbId,
    pub route_name: String,
    pub route_type: String,
    pub route_grade: String,
    pub area: Area,
    pub sector_id: DbId,
    pub added_date: Timestamp,
    pub added_by: String,
}

impl<'r> FromRow<'r, PgRow> for RouteWithArea {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            route_name: row.try_get("route_name")?,
            route_type: row.try_get("route_type")?,
            route_grade: row.try_get("route_grade")?,
            area: Area::from_prefixed(row, "area_")?,
            sector_id: row.try_get("sector_id")?,
            added_date: row.try_get("added_date")?,
            added_by: row.try_get("added_by")?,
        })
    }
}

/// A route with both its area and its sector resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteWithParents {
    pub id: DbId,
    pub route_name: String,
    pub route_type: String,
    pub route_grade: String,
    pub area: Area,
    pub sector: Sector,
    pub added_date: Timestamp,
    pub added_by: String,
}

impl<'r> FromRow<'r, PgRow> for RouteWithParents {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            route_name: row.try_get("route_name")?,
            route_type: row.try_get("route_type")?,
            route_grade: row.try_get("route_grade")?,
            area: Area::from_prefixed(row, "area_")?,
            sector: Sector::from_prefixed(row, "sector_")?,
            added_date: row.try_get("added_date")?,
            added_by: row.try_get("added_by")?,
        })
    }
}

/// Projection used in sector detail and as a sector's deletion blocker.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct RouteSummary {
    pub id: DbId,
    pub route_name: String,
    pub route_type: String,
    pub route_grade: String,
}

/// DTO for creating a new route under a sector.
#[derive(Debug, Clone)]
pub struct CreateRoute {
    pub route_name: String,
    pub route_type: String,
    pub route_grade: String,
    pub area_id: DbId,
    pub sector_id: DbId,
    pub added_by: String,
}

impl CreateRoute {
    /// Attach validated form values to a sector, copying the sector's area.
    pub fn for_sector(route: ValidRoute, sector: &Sector) -> Self {
        Self {
            route_name: route.route_name,
            route_type: route.route_type,
            route_grade: route.route_grade,
            area_id: sector.area_id,
            sector_id: sector.id,
            added_by: route.added_by,
        }
    }
}

/// DTO for replacing a route's own fields. Parents and `added_date` stay.
#[derive(Debug, Clone)]
pub struct UpdateRoute {
    pub route_name: String,
    pub route_type: String,
    pub route_grade: String,
    pub added_by: String,
}

impl From<ValidRoute> for UpdateRoute {
    fn from(v: ValidRoute) -> Self {
        Self {
            route_name: v.route_name,
            route_type: v.route_type,
            route_grade: v.route_grade,
            added_by: v.added_by,
        }
    }
}

/// A route with its parents and its comments, oldest first.
#[derive(Debug, Clone, Serialize)]
pub struct RouteDetail {
    pub route: RouteWithParents,
    pub comments: Vec<CommentSummary>,
}
