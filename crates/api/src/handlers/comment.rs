use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use cragbook_core::catalog::EntityKind;
use cragbook_core::error::CoreError;
use cragbook_core::types::DbId;
use cragbook_core::validation::forms::{validate_comment, CommentForm};
use cragbook_db::models::comment::CreateComment;
use cragbook_db::repositories::{CommentRepo, RouteRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /catalog/routes/{route_id}/comments
///
/// Comments are listed on their route; the Location points there.
pub async fn create_comment(
    State(state): State<AppState>,
    Path(route_id): Path<DbId>,
    payload: Result<Json<CommentForm>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(form) = payload?;
    if RouteRepo::find_by_id(&state.pool, route_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: EntityKind::Route.name(),
            id: route_id,
        }));
    }

    let valid = validate_comment(&form)?;
    let comment = CommentRepo::create(&state.pool, &CreateComment::for_route(valid, route_id)).await?;

    tracing::info!(comment_id = comment.id, route_id, "Comment added");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, EntityKind::Route.url(route_id))],
        Json(DataResponse { data: comment }),
    ))
}
