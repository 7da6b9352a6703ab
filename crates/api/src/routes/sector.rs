//! Route definitions for sectors, mounted at `/catalog/sectors`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{route, sector};
use crate::state::AppState;

/// ```text
/// GET    /                -> list_sectors
/// POST   /                -> create_sector
/// GET    /{id}            -> get_sector
/// PUT    /{id}            -> update_sector
/// DELETE /{id}            -> delete_sector
/// GET    /{id}/delete     -> preview_sector_delete
/// POST   /{id}/routes     -> create_route
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sector::list_sectors).post(sector::create_sector))
        .route(
            "/{id}",
            get(sector::get_sector)
                .put(sector::update_sector)
                .delete(sector::delete_sector),
        )
        .route("/{id}/delete", get(sector::preview_sector_delete))
        .route("/{id}/routes", post(route::create_route))
}
