//! Handlers for climbing routes.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use cragbook_core::catalog::EntityKind;
use cragbook_core::deletion::DeleteOutcome;
use cragbook_core::error::CoreError;
use cragbook_core::types::DbId;
use cragbook_core::validation::forms::{validate_route, RouteForm};
use cragbook_db::models::route::{CreateRoute, UpdateRoute};
use cragbook_db::repositories::{CatalogRepo, RouteRepo, SectorRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::delete_response;
use crate::query::SortParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: EntityKind::Route.name(),
        id,
    })
}

/// GET /catalog/routes
pub async fn list_routes(
    State(state): State<AppState>,
    params: Result<Query<SortParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let sort = EntityKind::Route.resolve_sort(params.sort)?;
    let routes = RouteRepo::list_with_area(&state.pool, sort).await?;

    Ok(Json(DataResponse { data: routes }))
}

/// POST /catalog/sectors/{sector_id}/routes
///
/// The route takes its area from the sector.
pub async fn create_route(
    State(state): State<AppState>,
    Path(sector_id): Path<DbId>,
    payload: Result<Json<RouteForm>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(form) = payload?;
    let sector = SectorRepo::find_by_id(&state.pool, sector_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: EntityKind::Sector.name(),
            id: sector_id,
        }))?;

    let valid = validate_route(&form)?;
    let route = RouteRepo::create(&state.pool, &CreateRoute::for_sector(valid, &sector)).await?;

    tracing::info!(
        route_id = route.id,
        sector_id,
        area_id = route.area_id,
        grade = %route.route_grade,
        "Route created",
    );

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, EntityKind::Route.url(route.id))],
        Json(DataResponse { data: route }),
    ))
}

/// GET /catalog/routes/{id}
///
/// The route with its area, sector and comments.
pub async fn get_route(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let detail = CatalogRepo::route_detail(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(DataResponse { data: detail }))
}

/// PUT /catalog/routes/{id}
///
/// Replaces the route's own fields. Its sector, area and `added_date` stay.
pub async fn update_route(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<RouteForm>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(form) = payload?;
    let valid = validate_route(&form)?;
    let route = RouteRepo::update(&state.pool, id, &UpdateRoute::from(valid))
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(route_id = id, "Route updated");

    Ok(Json(DataResponse { data: route }))
}

/// DELETE /catalog/routes/{id}
///
/// Never blocked. The route's comments go with it.
pub async fn delete_route(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let outcome = CatalogRepo::delete_route(&state.pool, id).await?;

    match outcome {
        DeleteOutcome::NotFound => tracing::debug!(route_id = id, "Route already absent"),
        _ => tracing::info!(route_id = id, "Route deleted"),
    }

    Ok(delete_response(outcome))
}
