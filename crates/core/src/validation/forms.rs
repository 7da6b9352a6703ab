//! Submitted forms for each catalog entity and their rule tables.

use serde::Deserialize;

use super::evaluator::validate_form;
use super::rules::{CharClass, FieldRule, FormInput, FormRejection};
use crate::catalog::{
    DEFAULT_ROUTE_GRADE, DEFAULT_ROUTE_TYPE, DEFAULT_STATE, ROUTE_GRADES, ROUTE_TYPES, US_STATES,
};
use crate::types::DbId;

const NAME_MIN: u64 = 3;
const NAME_MAX: u64 = 100;
const COMMENT_MAX: u64 = 144;

const ADDED_BY: FieldRule = FieldRule::text(
    "added_by",
    "Username",
    NAME_MIN,
    NAME_MAX,
    CharClass::Alphanumeric,
    "Username must be specified.",
    "Username has non-alphanumeric characters.",
);

pub const AREA_FORM: [FieldRule; 3] = [
    FieldRule::text(
        "area_name",
        "Area name",
        NAME_MIN,
        NAME_MAX,
        CharClass::AlphanumericSpace,
        "Area name must be specified.",
        "Area name has non-alphanumeric characters.",
    ),
    FieldRule::choice("state", "State", &US_STATES, DEFAULT_STATE),
    ADDED_BY,
];

pub const SECTOR_FORM: [FieldRule; 2] = [
    FieldRule::text(
        "sector_name",
        "Sector name",
        NAME_MIN,
        NAME_MAX,
        CharClass::AlphanumericSpace,
        "Sector name must be specified.",
        "Sector name has non-alphanumeric characters.",
    ),
    ADDED_BY,
];

pub const ROUTE_FORM: [FieldRule; 4] = [
    FieldRule::text(
        "route_name",
        "Route name",
        NAME_MIN,
        NAME_MAX,
        CharClass::AlphanumericSpace,
        "Route name must be specified.",
        "Route name has non-alphanumeric characters.",
    ),
    FieldRule::choice("route_type", "Route type", &ROUTE_TYPES, DEFAULT_ROUTE_TYPE),
    FieldRule::choice("route_grade", "Route grade", &ROUTE_GRADES, DEFAULT_ROUTE_GRADE),
    ADDED_BY,
];

pub const COMMENT_FORM: [FieldRule; 2] = [
    FieldRule::text(
        "comment_text",
        "Comment",
        NAME_MIN,
        COMMENT_MAX,
        CharClass::AlphanumericSpace,
        "Comment must have text.",
        "Comment has non-alphanumeric characters.",
    ),
    ADDED_BY,
];

// ---------------------------------------------------------------------------
// Area
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AreaForm {
    pub area_name: Option<String>,
    pub state: Option<String>,
    pub added_by: Option<String>,
}

impl FormInput for AreaForm {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "area_name" => self.area_name.as_deref(),
            "state" => self.state.as_deref(),
            "added_by" => self.added_by.as_deref(),
            _ => None,
        }
    }
}

/// A sanitized Area submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidArea {
    pub area_name: String,
    pub state: String,
    pub added_by: String,
}

pub fn validate_area(form: &AreaForm) -> Result<ValidArea, FormRejection> {
    let mut clean = validate_form(&AREA_FORM, form)?;
    Ok(ValidArea {
        area_name: clean.take("area_name"),
        state: clean.take("state"),
        added_by: clean.take("added_by"),
    })
}

// ---------------------------------------------------------------------------
// Sector
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectorForm {
    pub sector_name: Option<String>,
    /// Id of the owning Area.
    pub area: Option<DbId>,
    pub added_by: Option<String>,
}

impl FormInput for SectorForm {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "sector_name" => self.sector_name.as_deref(),
            "added_by" => self.added_by.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSector {
    pub sector_name: String,
    pub area_id: DbId,
    pub added_by: String,
}

/// Validate a Sector submission. The Area reference is checked for
/// presence here; whether it exists is up to the caller.
pub fn validate_sector(form: &SectorForm) -> Result<ValidSector, FormRejection> {
    let result = validate_form(&SECTOR_FORM, form);

    match (result, form.area) {
        (Ok(mut clean), Some(area_id)) => Ok(ValidSector {
            sector_name: clean.take("sector_name"),
            area_id,
            added_by: clean.take("added_by"),
        }),
        (Ok(clean), None) => {
            let mut rejection = FormRejection::single("area", "required", "Area must be specified.");
            rejection.values = clean.into_values();
            Err(rejection)
        }
        (Err(mut rejection), area) => {
            match area {
                Some(id) => {
                    rejection.values.insert("area".to_string(), id.to_string());
                }
                None => rejection.errors.extend(
                    FormRejection::single("area", "required", "Area must be specified.").errors,
                ),
            }
            Err(rejection)
        }
    }
}

// ---------------------------------------------------------------------------
// Route
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteForm {
    pub route_name: Option<String>,
    pub route_type: Option<String>,
    pub route_grade: Option<String>,
    pub added_by: Option<String>,
}

impl FormInput for RouteForm {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "route_name" => self.route_name.as_deref(),
            "route_type" => self.route_type.as_deref(),
            "route_grade" => self.route_grade.as_deref(),
            "added_by" => self.added_by.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRoute {
    pub route_name: String,
    pub route_type: String,
    pub route_grade: String,
    pub added_by: String,
}

pub fn validate_route(form: &RouteForm) -> Result<ValidRoute, FormRejection> {
    let mut clean = validate_form(&ROUTE_FORM, form)?;
    Ok(ValidRoute {
        route_name: clean.take("route_name"),
        route_type: clean.take("route_type"),
        route_grade: clean.take("route_grade"),
        added_by: clean.take("added_by"),
    })
}

// ---------------------------------------------------------------------------
// Comment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentForm {
    pub comment_text: Option<String>,
    pub added_by: Option<String>,
}

impl FormInput for CommentForm {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "comment_text" => self.comment_text.as_deref(),
            "added_by" => self.added_by.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidComment {
    pub comment_text: String,
    pub added_by: String,
}

pub fn validate_comment(form: &CommentForm) -> Result<ValidComment, FormRejection> {
    let mut clean = validate_form(&COMMENT_FORM, form)?;
    Ok(ValidComment {
        comment_text: clean.take("comment_text"),
        added_by: clean.take("added_by"),
    })
}
