//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. [`CatalogRepo`] composes the
//! per-entity repositories into the multi-query reads and the guarded
//! deletes.

pub mod area_repo;
pub mod catalog_repo;
pub mod comment_repo;
pub mod route_repo;
pub mod sector_repo;

pub use area_repo::AreaRepo;
pub use catalog_repo::CatalogRepo;
pub use comment_repo::CommentRepo;
pub use route_repo::RouteRepo;
pub use sector_repo::SectorRepo;
