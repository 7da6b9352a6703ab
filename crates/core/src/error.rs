use crate::types::DbId;
use crate::validation::rules::FormRejection;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// One or more form fields failed their rules. Carries every violation
    /// plus the sanitized values that were submitted.
    #[error("Validation failed: {} field error(s)", .0.errors.len())]
    InvalidForm(FormRejection),

    /// A delete collided with a reference the dependent check did not see.
    #[error("Conflict: {0}")]
    Conflict(String),
}
