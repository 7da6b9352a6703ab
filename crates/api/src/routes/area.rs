//! Route definitions for areas, mounted at `/catalog/areas`.

use axum::routing::get;
use axum::Router;

use crate::handlers::area;
use crate::state::AppState;

/// ```text
/// GET    /                -> list_areas
/// POST   /                -> create_area
/// GET    /{id}            -> get_area
/// PUT    /{id}            -> update_area
/// DELETE /{id}            -> delete_area
/// GET    /{id}/delete     -> preview_area_delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(area::list_areas).post(area::create_area))
        .route(
            "/{id}",
            get(area::get_area)
                .put(area::update_area)
                .delete(area::delete_area),
        )
        .route("/{id}/delete", get(area::preview_area_delete))
}
