pub mod area;
pub mod health;
pub mod route;
pub mod sector;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/catalog` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                  summary counts
///
/// /areas                             list, create
/// /areas/{id}                        get, update, delete (guarded)
/// /areas/{id}/delete                 delete preview
///
/// /sectors                           list, create
/// /sectors/{id}                      get, update, delete (guarded)
/// /sectors/{id}/delete               delete preview
/// /sectors/{id}/routes               create route
///
/// /routes                            list
/// /routes/{id}                       get, update, delete
/// /routes/{id}/comments              create comment
/// ```
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::catalog::summary))
        .nest("/areas", area::router())
        .nest("/sectors", sector::router())
        .nest("/routes", route::router())
}
