//! Field rule and result types.

use std::collections::BTreeMap;

use serde::Serialize;

/// Character restriction applied to a field after escaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// No restriction.
    Any,
    /// ASCII letters and digits only.
    Alphanumeric,
    /// ASCII letters, digits and the space character.
    AlphanumericSpace,
}

/// One row of a form's rule table.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    /// Human-readable field name for generated messages.
    pub label: &'static str,
    pub required: bool,
    /// Checked against the trimmed, unescaped value.
    pub min_length: Option<u64>,
    /// Checked against the stored (escaped) value.
    pub max_length: Option<u64>,
    pub class: CharClass,
    /// Informational only; membership is enforced by the store.
    pub enum_values: Option<&'static [&'static str]>,
    /// Substituted when the submitted value is absent or blank.
    pub default: Option<&'static str>,
    pub missing_message: &'static str,
    pub class_message: &'static str,
}

impl FieldRule {
    /// A required free-text field with the given bounds and class.
    pub const fn text(
        field: &'static str,
        label: &'static str,
        min_length: u64,
        max_length: u64,
        class: CharClass,
        missing_message: &'static str,
        class_message: &'static str,
    ) -> Self {
        Self {
            field,
            label,
            required: true,
            min_length: Some(min_length),
            max_length: Some(max_length),
            class,
            enum_values: None,
            default: None,
            missing_message,
            class_message,
        }
    }

    /// A choice field: escaped and defaulted, never restricted here.
    pub const fn choice(
        field: &'static str,
        label: &'static str,
        values: &'static [&'static str],
        default: &'static str,
    ) -> Self {
        Self {
            field,
            label,
            required: false,
            min_length: None,
            max_length: None,
            class: CharClass::Any,
            enum_values: Some(values),
            default: Some(default),
            missing_message: "",
            class_message: "",
        }
    }
}

/// Raw submitted values, looked up by field name.
pub trait FormInput {
    fn field(&self, name: &str) -> Option<&str>;
}

impl FormInput for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    /// Which check failed: `required`, `max_length` or `char_class`.
    pub rule: &'static str,
    pub message: String,
}

/// Every violation from one submission, plus the sanitized values so the
/// caller can show the form again as it was entered.
#[derive(Debug, Clone, Serialize)]
pub struct FormRejection {
    pub errors: Vec<FieldViolation>,
    pub values: BTreeMap<String, String>,
}

impl FormRejection {
    /// Rejection carrying a single violation that no rule table produced,
    /// such as a dangling reference.
    pub fn single(field: &str, rule: &'static str, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldViolation {
                field: field.to_string(),
                rule,
                message: message.into(),
            }],
            values: BTreeMap::new(),
        }
    }

    /// Whether any violation concerns `field`.
    pub fn has_error_for(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

/// Sanitized values of a submission that passed every rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanForm {
    values: BTreeMap<String, String>,
}

impl CleanForm {
    pub(crate) fn new(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Remove and return a field's value; empty when the field had none.
    pub fn take(&mut self, field: &str) -> String {
        self.values.remove(field).unwrap_or_default()
    }

    pub fn into_values(self) -> BTreeMap<String, String> {
        self.values
    }
}
