//! Handlers for areas, the root of the catalog.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use cragbook_core::catalog::EntityKind;
use cragbook_core::deletion::DeleteOutcome;
use cragbook_core::error::CoreError;
use cragbook_core::types::DbId;
use cragbook_core::validation::forms::{validate_area, AreaForm};
use cragbook_db::models::area::{CreateArea, UpdateArea};
use cragbook_db::repositories::{AreaRepo, CatalogRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::delete_response;
use crate::query::SortParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: EntityKind::Area.name(),
        id,
    })
}

/// GET /catalog/areas
pub async fn list_areas(
    State(state): State<AppState>,
    params: Result<Query<SortParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let sort = EntityKind::Area.resolve_sort(params.sort)?;
    let areas = AreaRepo::list(&state.pool, sort).await?;

    Ok(Json(DataResponse { data: areas }))
}

/// POST /catalog/areas
pub async fn create_area(
    State(state): State<AppState>,
    payload: Result<Json<AreaForm>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(form) = payload?;
    let valid = validate_area(&form)?;
    let area = AreaRepo::create(&state.pool, &CreateArea::from(valid)).await?;

    tracing::info!(area_id = area.id, added_by = %area.added_by, "Area created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, EntityKind::Area.url(area.id))],
        Json(DataResponse { data: area }),
    ))
}

/// GET /catalog/areas/{id}
///
/// The area and the sectors it owns.
pub async fn get_area(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let detail = CatalogRepo::area_detail(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(DataResponse { data: detail }))
}

/// PUT /catalog/areas/{id}
///
/// Full replace. The area's `added_date` moves to now.
pub async fn update_area(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<AreaForm>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(form) = payload?;
    let valid = validate_area(&form)?;
    let area = AreaRepo::update(&state.pool, id, &UpdateArea::from(valid))
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(area_id = id, "Area updated");

    Ok(Json(DataResponse { data: area }))
}

/// GET /catalog/areas/{id}/delete
///
/// What deleting the area would run into. Changes nothing.
pub async fn preview_area_delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let preview = CatalogRepo::area_delete_preview(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(DataResponse { data: preview }))
}

/// DELETE /catalog/areas/{id}
///
/// Refused with 409 while any sector references the area.
pub async fn delete_area(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let outcome = CatalogRepo::delete_area(&state.pool, id)
        .await
        .map_err(|err| AppError::from_guarded_delete(EntityKind::Area, id, err))?;

    match &outcome {
        DeleteOutcome::Deleted => tracing::info!(area_id = id, "Area deleted"),
        DeleteOutcome::NotFound => tracing::debug!(area_id = id, "Area already absent"),
        DeleteOutcome::Blocked { dependents, .. } => {
            tracing::debug!(area_id = id, sectors = dependents.len(), "Area delete blocked")
        }
    }

    Ok(delete_response(outcome))
}
