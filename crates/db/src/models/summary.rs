//! Catalog-wide aggregates.

use serde::Serialize;

/// Record counts shown on the catalog index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub area_count: i64,
    pub sector_count: i64,
    pub route_count: i64,
}
