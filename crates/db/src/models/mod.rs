//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - Populated variants with parent records resolved, where lists need them
//! - Narrow projections used by detail views and the deletion guard
//! - Create / update DTOs built from validated forms

pub mod area;
pub mod comment;
pub mod route;
pub mod sector;
pub mod summary;
