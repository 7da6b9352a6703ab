pub mod area;
pub mod catalog;
pub mod comment;
pub mod route;
pub mod sector;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cragbook_core::deletion::DeleteOutcome;
use serde::Serialize;

use crate::response::DataResponse;

/// Map a delete outcome to its HTTP response.
///
/// Deleted and missing records both answer 204. A blocked delete answers
/// 409 with the outcome, including its dependents, in the data envelope.
pub(crate) fn delete_response<T: Serialize>(outcome: DeleteOutcome<T>) -> Response {
    match outcome {
        DeleteOutcome::Deleted | DeleteOutcome::NotFound => StatusCode::NO_CONTENT.into_response(),
        blocked @ DeleteOutcome::Blocked { .. } => {
            (StatusCode::CONFLICT, Json(DataResponse { data: blocked })).into_response()
        }
    }
}
