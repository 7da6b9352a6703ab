//! Comment entity model and DTOs.

use cragbook_core::types::{DbId, Timestamp};
use cragbook_core::validation::forms::ValidComment;
use serde::Serialize;
use sqlx::FromRow;

/// A comment row from the `comments` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub route_id: DbId,
    pub comment_text: String,
    pub added_date: Timestamp,
    pub added_by: String,
}

/// Projection shown on a route's detail view.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct CommentSummary {
    pub id: DbId,
    pub comment_text: String,
    pub added_date: Timestamp,
    pub added_by: String,
}

/// DTO for creating a comment on a route.
#[derive(Debug, Clone)]
pub struct CreateComment {
    pub route_id: DbId,
    pub comment_text: String,
    pub added_by: String,
}

impl CreateComment {
    pub fn for_route(comment: ValidComment, route_id: DbId) -> Self {
        Self {
            route_id,
            comment_text: comment.comment_text,
            added_by: comment.added_by,
        }
    }
}
