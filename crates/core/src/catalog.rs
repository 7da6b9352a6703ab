//! Catalog vocabularies and entity addressing.
//!
//! The enumerations here mirror the `CHECK` constraints in the database
//! migrations; the store is the final authority on membership.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// The fifty US state names an Area may be located in.
pub const US_STATES: [&str; 50] = [
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];

pub const DEFAULT_STATE: &str = "Alabama";

pub const ROUTE_TYPES: [&str; 2] = ["Traditional", "Sport"];

pub const DEFAULT_ROUTE_TYPE: &str = "Sport";

/// Yosemite Decimal System grades, easiest first.
pub const ROUTE_GRADES: [&str; 30] = [
    "5.4", "5.5", "5.6", "5.7", "5.8", "5.9", "5.10a", "5.10b", "5.10c", "5.10d", "5.11a",
    "5.11b", "5.11c", "5.11d", "5.12a", "5.12b", "5.12c", "5.12d", "5.13a", "5.13b", "5.13c",
    "5.13d", "5.14a", "5.14b", "5.14c", "5.14d", "5.15a", "5.15b", "5.15c", "5.15d",
];

pub const DEFAULT_ROUTE_GRADE: &str = "5.4";

/// The four kinds of record in the catalog, leaf-most last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Area,
    Sector,
    Route,
    Comment,
}

impl EntityKind {
    /// Display name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Area => "Area",
            EntityKind::Sector => "Sector",
            EntityKind::Route => "Route",
            EntityKind::Comment => "Comment",
        }
    }

    /// Path segment under `/catalog`.
    pub fn collection(self) -> &'static str {
        match self {
            EntityKind::Area => "areas",
            EntityKind::Sector => "sectors",
            EntityKind::Route => "routes",
            EntityKind::Comment => "comments",
        }
    }

    /// Presentation address of a single record, e.g. `/catalog/areas/7`.
    pub fn url(self, id: DbId) -> String {
        format!("/catalog/{}/{id}", self.collection())
    }

    /// The child kind whose existence blocks deleting this kind, if any.
    pub fn guarded_by(self) -> Option<EntityKind> {
        match self {
            EntityKind::Area => Some(EntityKind::Sector),
            EntityKind::Sector => Some(EntityKind::Route),
            EntityKind::Route | EntityKind::Comment => None,
        }
    }

    /// Fields a list of this kind may be ordered by. The first is the default.
    pub fn sort_fields(self) -> &'static [SortField] {
        match self {
            EntityKind::Area => &[SortField::AreaName, SortField::AddedDate],
            EntityKind::Sector => &[SortField::SectorName, SortField::AddedDate],
            EntityKind::Route => &[
                SortField::RouteName,
                SortField::RouteGrade,
                SortField::AddedDate,
            ],
            EntityKind::Comment => &[SortField::AddedDate],
        }
    }

    /// Resolve a requested sort field against this kind's whitelist.
    ///
    /// `None` selects the default display field.
    pub fn resolve_sort(self, requested: Option<SortField>) -> Result<SortField, CoreError> {
        let allowed = self.sort_fields();
        match requested {
            None => Ok(allowed[0]),
            Some(field) if allowed.contains(&field) => Ok(field),
            Some(field) => Err(CoreError::Validation(format!(
                "{} lists cannot be sorted by {}",
                self.name(),
                field.column()
            ))),
        }
    }
}

/// A single ascending sort key. There is no descending order and no
/// secondary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    AreaName,
    SectorName,
    RouteName,
    RouteGrade,
    AddedDate,
}

impl SortField {
    pub fn column(self) -> &'static str {
        match self {
            SortField::AreaName => "area_name",
            SortField::SectorName => "sector_name",
            SortField::RouteName => "route_name",
            SortField::RouteGrade => "route_grade",
            SortField::AddedDate => "added_date",
        }
    }

    /// `ORDER BY` expression for a column of the table aliased `alias`.
    ///
    /// Text keys compare byte-wise, so `"5.10a"` sorts before `"5.9"`.
    pub fn order_by(self, alias: &str) -> String {
        match self {
            SortField::AddedDate => format!("{alias}.added_date ASC"),
            text => format!("{alias}.{} COLLATE \"C\" ASC", text.column()),
        }
    }
}
