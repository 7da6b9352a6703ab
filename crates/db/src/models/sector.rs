//! Sector entity model and DTOs.

use cragbook_core::types::{DbId, Timestamp};
use cragbook_core::validation::forms::ValidSector;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

use crate::models::area::Area;
use crate::models::route::RouteSummary;

/// A sector row from the `sectors` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Sector {
    pub id: DbId,
    pub sector_name: String,
    pub area_id: DbId,
    pub added_date: Timestamp,
    pub added_by: String,
}

impl Sector {
    /// Read a sector from columns named `{prefix}id`, `{prefix}sector_name`, ...
    pub fn from_prefixed(row: &PgRow, prefix: &str) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get(format!("{prefix}id").as_str())?,
            sector_name: row.try_get(format!("{prefix}sector_name").as_str())?,
            area_id: row.try_get(format!("{prefix}area_id").as_str())?,
            added_date: row.try_get(format!("{prefix}added_date").as_str())?,
            added_by: row.try_get(format!("{prefix}added_by").as_str())?,
        })
    }
}

/// A sector with its owning area resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorWithArea {
    pub id: DbId,
    pub sector_name: String,
    pub area: Area,
    pub added_date: Timestamp,
    pub added_by: String,
}

impl<'r> FromRow<'r, PgRow> for SectorWithArea {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            sector_name: row.try_get("sector_name")?,
            area: Area::from_prefixed(row, "area_")?,
            added_date: row.try_get("added_date")?,
            added_by: row.try_get("added_by")?,
        })
    }
}

/// Projection used in area detail listings.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct SectorSummary {
    pub id: DbId,
    pub sector_name: String,
}

/// A sector blocking deletion of its area, with its own route count.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct SectorDependent {
    pub id: DbId,
    pub sector_name: String,
    pub route_count: i64,
}

/// DTO for creating a new sector.
#[derive(Debug, Clone)]
pub struct CreateSector {
    pub sector_name: String,
    pub area_id: DbId,
    pub added_by: String,
}

impl From<ValidSector> for CreateSector {
    fn from(v: ValidSector) -> Self {
        Self {
            sector_name: v.sector_name,
            area_id: v.area_id,
            added_by: v.added_by,
        }
    }
}

/// DTO for replacing a sector. Every field is overwritten.
#[derive(Debug, Clone)]
pub struct UpdateSector {
    pub sector_name: String,
    pub area_id: DbId,
    pub added_by: String,
}

impl From<ValidSector> for UpdateSector {
    fn from(v: ValidSector) -> Self {
        Self {
            sector_name: v.sector_name,
            area_id: v.area_id,
            added_by: v.added_by,
        }
    }
}

/// A sector with its area and its routes sorted by grade.
#[derive(Debug, Clone, Serialize)]
pub struct SectorDetail {
    pub sector: SectorWithArea,
    pub routes: Vec<RouteSummary>,
}

/// What deleting a sector would run into.
#[derive(Debug, Clone, Serialize)]
pub struct SectorDeletePreview {
    pub sector: Sector,
    pub dependents: Vec<RouteSummary>,
}
