//! Shared query parameter types for API handlers.

use cragbook_core::catalog::SortField;
use serde::Deserialize;

/// List ordering (`?sort=`).
///
/// Unknown field names are rejected by the extractor. Known fields that do
/// not apply to the listed entity are rejected by
/// [`EntityKind::resolve_sort`](cragbook_core::catalog::EntityKind::resolve_sort).
#[derive(Debug, Default, Deserialize)]
pub struct SortParams {
    pub sort: Option<SortField>,
}
