use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use cragbook_db::repositories::CatalogRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /catalog
///
/// Record counts for the landing page.
pub async fn summary(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let summary = CatalogRepo::summary(&state.pool).await?;

    Ok(Json(DataResponse { data: summary }))
}
