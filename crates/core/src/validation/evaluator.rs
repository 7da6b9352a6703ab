//! Rule evaluator: pure logic, no database access.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use validator::ValidateLength;

use super::rules::{CharClass, CleanForm, FieldRule, FieldViolation, FormInput, FormRejection};
use super::sanitize::escape_html;

static ALPHANUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Za-z0-9]+$").expect("valid regex"));

static ALPHANUMERIC_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Za-z0-9 ]+$").expect("valid regex"));

/// Evaluate every rule in `rules` against `input`.
///
/// Does not stop at the first failure: all violations across all fields are
/// collected. Either way the sanitized values are returned, keyed by field.
pub fn validate_form<F: FormInput + ?Sized>(
    rules: &[FieldRule],
    input: &F,
) -> Result<CleanForm, FormRejection> {
    let mut errors = Vec::new();
    let mut values = BTreeMap::new();

    for rule in rules {
        let value = evaluate_field(rule, input.field(rule.field), &mut errors);
        values.insert(rule.field.to_string(), value);
    }

    if errors.is_empty() {
        Ok(CleanForm::new(values))
    } else {
        Err(FormRejection { errors, values })
    }
}

/// Run one rule, pushing any violations, and return the sanitized value.
fn evaluate_field(rule: &FieldRule, raw: Option<&str>, errors: &mut Vec<FieldViolation>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default().to_string();

    if trimmed.is_empty() {
        if let Some(default) = rule.default {
            return default.to_string();
        }
    }

    if rule.required {
        let min = rule.min_length.unwrap_or(1).max(1);
        if !trimmed.validate_length(Some(min), None, None) {
            errors.push(violation(rule, "required", rule.missing_message.to_string()));
        }
    }

    let escaped = escape_html(&trimmed);
    if escaped.is_empty() {
        return escaped;
    }

    if let Some(max) = rule.max_length {
        if !escaped.validate_length(None, Some(max), None) {
            errors.push(violation(
                rule,
                "max_length",
                format!("{} must be at most {max} characters.", rule.label),
            ));
        }
    }

    if !matches_class(rule.class, &escaped) {
        errors.push(violation(rule, "char_class", rule.class_message.to_string()));
    }

    escaped
}

fn matches_class(class: CharClass, value: &str) -> bool {
    match class {
        CharClass::Any => true,
        CharClass::Alphanumeric => ALPHANUMERIC_RE.is_match(value),
        CharClass::AlphanumericSpace => ALPHANUMERIC_SPACE_RE.is_match(value),
    }
}

fn violation(rule: &FieldRule, kind: &'static str, message: String) -> FieldViolation {
    FieldViolation {
        field: rule.field.to_string(),
        rule: kind,
        message,
    }
}
