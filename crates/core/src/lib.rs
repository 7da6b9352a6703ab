//! Cragbook domain core.
//!
//! Pure domain logic with no database or HTTP dependencies: identifier
//! types, catalog vocabularies, the form validation engine, and the
//! cascade-guard deletion rules.

pub mod catalog;
pub mod deletion;
pub mod error;
pub mod types;
pub mod validation;
