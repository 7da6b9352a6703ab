//! Area entity model and DTOs.

use cragbook_core::types::{DbId, Timestamp};
use cragbook_core::validation::forms::ValidArea;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

use crate::models::sector::{SectorDependent, SectorSummary};

/// An area row from the `areas` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Area {
    pub id: DbId,
    pub area_name: String,
    pub state: String,
    pub added_date: Timestamp,
    pub added_by: String,
}

impl Area {
    /// Read an area from columns named `{prefix}id`, `{prefix}area_name`, ...
    ///
    /// Used when an area is joined onto a child row.
    pub fn from_prefixed(row: &PgRow, prefix: &str) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get(format!("{prefix}id").as_str())?,
            area_name: row.try_get(format!("{prefix}area_name").as_str())?,
            state: row.try_get(format!("{prefix}state").as_str())?,
            added_date: row.try_get(format!("{prefix}added_date").as_str())?,
            added_by: row.try_get(format!("{prefix}added_by").as_str())?,
        })
    }
}

/// DTO for creating a new area. `added_date` is set by the database.
#[derive(Debug, Clone)]
pub struct CreateArea {
    pub area_name: String,
    pub state: String,
    pub added_by: String,
}

impl From<ValidArea> for CreateArea {
    fn from(v: ValidArea) -> Self {
        Self {
            area_name: v.area_name,
            state: v.state,
            added_by: v.added_by,
        }
    }
}

/// DTO for replacing an area. Every field is overwritten.
#[derive(Debug, Clone)]
pub struct UpdateArea {
    pub area_name: String,
    pub state: String,
    pub added_by: String,
}

impl From<ValidArea> for UpdateArea {
    fn from(v: ValidArea) -> Self {
        Self {
            area_name: v.area_name,
            state: v.state,
            added_by: v.added_by,
        }
    }
}

/// An area with the sectors it directly owns, sorted by name.
#[derive(Debug, Clone, Serialize)]
pub struct AreaDetail {
    pub area: Area,
    pub sectors: Vec<SectorSummary>,
}

/// What deleting an area would run into.
#[derive(Debug, Clone, Serialize)]
pub struct AreaDeletePreview {
    pub area: Area,
    pub dependents: Vec<SectorDependent>,
}
