//! Cascade-guard deletion rules.
//!
//! An Area may only be deleted once no Sector references it, and a Sector
//! once no Route references it. Routes and Comments delete unconditionally.
//! The guard is advisory: a blocked delete reports its dependents so the
//! requester can clear them by hand. Nothing is deleted on their behalf.
//!
//! The count-then-delete sequence is not transactional. A child inserted
//! between the check and the delete is caught by the foreign key, not here.

use serde::Serialize;

use crate::catalog::EntityKind;

/// What the guard decided for one delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionDecision<T> {
    /// No dependents; the record may be removed.
    Proceed,
    /// Dependents exist; the record must stay.
    Blocked(Vec<T>),
}

/// Decide whether a record of `kind` with the given dependents may be
/// deleted.
///
/// Kinds without a guard always proceed, whatever is passed in.
pub fn evaluate_deletion<T>(kind: EntityKind, dependents: Vec<T>) -> DeletionDecision<T> {
    if kind.guarded_by().is_none() || dependents.is_empty() {
        DeletionDecision::Proceed
    } else {
        DeletionDecision::Blocked(dependents)
    }
}

/// Human-readable summary of a blocked delete.
pub fn blocked_message(kind: EntityKind, dependent_count: usize) -> String {
    let child = kind.guarded_by().map(EntityKind::name).unwrap_or("record");
    format!(
        "Cannot delete {}: {dependent_count} {}(s) still reference it.",
        kind.name().to_lowercase(),
        child.to_lowercase()
    )
}

/// Final result of a delete request, as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DeleteOutcome<T> {
    /// The record was removed.
    Deleted,
    /// No record had the id. Treated as success with no effect.
    NotFound,
    /// Dependents exist; nothing was removed.
    Blocked { message: String, dependents: Vec<T> },
}

impl<T> DeleteOutcome<T> {
    /// Build the outcome for a guard decision that blocked.
    pub fn blocked(kind: EntityKind, dependents: Vec<T>) -> Self {
        DeleteOutcome::Blocked {
            message: blocked_message(kind, dependents.len()),
            dependents,
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, DeleteOutcome::Blocked { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn area_without_sectors_proceeds() {
        let decision = evaluate_deletion::<&str>(EntityKind::Area, vec![]);
        assert_eq!(decision, DeletionDecision::Proceed);
    }

    #[test]
    fn area_with_sectors_is_blocked() {
        let decision = evaluate_deletion(EntityKind::Area, vec!["The Hood", "The Roost"]);
        assert_matches!(decision, DeletionDecision::Blocked(d) if d == vec!["The Hood", "The Roost"]);
    }

    #[test]
    fn sector_with_routes_is_blocked() {
        let decision = evaluate_deletion(EntityKind::Sector, vec!["T-Rex"]);
        assert_matches!(decision, DeletionDecision::Blocked(_));
    }

    #[test]
    fn route_and_comment_skip_the_check() {
        assert_eq!(
            evaluate_deletion(EntityKind::Route, vec!["anything"]),
            DeletionDecision::Proceed
        );
        assert_eq!(
            evaluate_deletion(EntityKind::Comment, vec!["anything"]),
            DeletionDecision::Proceed
        );
    }

    #[test]
    fn blocked_message_names_the_child_kind() {
        assert_eq!(
            blocked_message(EntityKind::Area, 2),
            "Cannot delete area: 2 sector(s) still reference it."
        );
        assert_eq!(
            blocked_message(EntityKind::Sector, 1),
            "Cannot delete sector: 1 route(s) still reference it."
        );
    }

    #[test]
    fn outcome_serializes_with_tag() {
        let outcome = DeleteOutcome::blocked(EntityKind::Sector, vec!["T-Rex"]);
        assert!(outcome.is_blocked());
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "blocked");
        assert_eq!(json["dependents"][0], "T-Rex");

        let json = serde_json::to_value(DeleteOutcome::<()>::NotFound).unwrap();
        assert_eq!(json["outcome"], "not_found");
    }
}
