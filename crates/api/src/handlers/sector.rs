//! Handlers for sectors. Every sector belongs to one area.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use cragbook_core::catalog::EntityKind;
use cragbook_core::deletion::DeleteOutcome;
use cragbook_core::error::CoreError;
use cragbook_core::types::DbId;
use cragbook_core::validation::forms::{validate_sector, SectorForm, ValidSector};
use cragbook_core::validation::FormRejection;
use cragbook_db::models::sector::{CreateSector, UpdateSector};
use cragbook_db::repositories::{AreaRepo, CatalogRepo, SectorRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::handlers::delete_response;
use crate::query::SortParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: EntityKind::Sector.name(),
        id,
    })
}

/// Validate a submission and confirm the area it names exists.
async fn validate_with_area(pool: &PgPool, form: &SectorForm) -> AppResult<ValidSector> {
    let valid = validate_sector(form)?;

    if !AreaRepo::exists(pool, valid.area_id).await? {
        let mut rejection = FormRejection::single("area", "exists", "Area does not exist.");
        rejection
            .values
            .insert("sector_name".to_string(), valid.sector_name);
        rejection
            .values
            .insert("area".to_string(), valid.area_id.to_string());
        rejection.values.insert("added_by".to_string(), valid.added_by);
        return Err(rejection.into());
    }

    Ok(valid)
}

/// GET /catalog/sectors
///
/// Every sector with its area resolved.
pub async fn list_sectors(
    State(state): State<AppState>,
    params: Result<Query<SortParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let sort = EntityKind::Sector.resolve_sort(params.sort)?;
    let sectors = SectorRepo::list_with_area(&state.pool, sort).await?;

    Ok(Json(DataResponse { data: sectors }))
}

/// POST /catalog/sectors
pub async fn create_sector(
    State(state): State<AppState>,
    payload: Result<Json<SectorForm>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(form) = payload?;
    let valid = validate_with_area(&state.pool, &form).await?;
    let sector = SectorRepo::create(&state.pool, &CreateSector::from(valid)).await?;

    tracing::info!(
        sector_id = sector.id,
        area_id = sector.area_id,
        added_by = %sector.added_by,
        "Sector created",
    );

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, EntityKind::Sector.url(sector.id))],
        Json(DataResponse { data: sector }),
    ))
}

/// GET /catalog/sectors/{id}
///
/// The sector, its area, and its routes ordered by grade.
pub async fn get_sector(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let detail = CatalogRepo::sector_detail(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(DataResponse { data: detail }))
}

/// PUT /catalog/sectors/{id}
///
/// Full replace, including the owning area. `added_date` moves to now.
pub async fn update_sector(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<SectorForm>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(form) = payload?;
    let valid = validate_with_area(&state.pool, &form).await?;
    let sector = SectorRepo::update(&state.pool, id, &UpdateSector::from(valid))
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(sector_id = id, area_id = sector.area_id, "Sector updated");

    Ok(Json(DataResponse { data: sector }))
}

/// GET /catalog/sectors/{id}/delete
pub async fn preview_sector_delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let preview = CatalogRepo::sector_delete_preview(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(DataResponse { data: preview }))
}

/// DELETE /catalog/sectors/{id}
///
/// Refused with 409 while any route references the sector.
pub async fn delete_sector(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let outcome = CatalogRepo::delete_sector(&state.pool, id)
        .await
        .map_err(|err| AppError::from_guarded_delete(EntityKind::Sector, id, err))?;

    match &outcome {
        DeleteOutcome::Deleted => tracing::info!(sector_id = id, "Sector deleted"),
        DeleteOutcome::NotFound => tracing::debug!(sector_id = id, "Sector already absent"),
        DeleteOutcome::Blocked { dependents, .. } => {
            tracing::debug!(sector_id = id, routes = dependents.len(), "Sector delete blocked")
        }
    }

    Ok(delete_response(outcome))
}
