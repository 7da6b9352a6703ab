//! Route definitions for climbing routes, mounted at `/catalog/routes`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{comment, route};
use crate::state::AppState;

/// ```text
/// GET    /                -> list_routes
/// GET    /{id}            -> get_route
/// PUT    /{id}            -> update_route
/// DELETE /{id}            -> delete_route
/// POST   /{id}/comments   -> create_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(route::list_routes))
        .route(
            "/{id}",
            get(route::get_route)
                .put(route::update_route)
                .delete(route::delete_route),
        )
        .route("/{id}/comments", post(comment::create_comment))
}
