//! Form validation engine.
//!
//! Per-entity rule tables, a single generic evaluator, and the sanitizer
//! that every accepted string passes through. No database access.

pub mod evaluator;
pub mod forms;
pub mod rules;
pub mod sanitize;

pub use evaluator::validate_form;
pub use rules::{CharClass, CleanForm, FieldRule, FieldViolation, FormInput, FormRejection};
