//! Multi-query reads and guarded deletes over the whole catalog.
//!
//! Independent lookups are issued together and awaited as a group; if any
//! one fails the whole operation fails. Lookups that depend on an earlier
//! result run in sequence.

use cragbook_core::catalog::EntityKind;
use cragbook_core::deletion::{evaluate_deletion, DeleteOutcome, DeletionDecision};
use cragbook_core::types::DbId;
use sqlx::PgPool;

use crate::models::area::{AreaDeletePreview, AreaDetail};
use crate::models::route::{RouteDetail, RouteSummary};
use crate::models::sector::{SectorDeletePreview, SectorDependent, SectorDetail};
use crate::models::summary::CatalogSummary;
use crate::repositories::{AreaRepo, CommentRepo, RouteRepo, SectorRepo};

pub struct CatalogRepo;

impl CatalogRepo {
    /// Count areas, sectors and routes concurrently.
    pub async fn summary(pool: &PgPool) -> Result<CatalogSummary, sqlx::Error> {
        let (area_count, sector_count, route_count) = tokio::try_join!(
            AreaRepo::count(pool),
            SectorRepo::count(pool),
            RouteRepo::count(pool),
        )?;
        Ok(CatalogSummary {
            area_count,
            sector_count,
            route_count,
        })
    }

    /// An area and its sectors, or `None` if the area does not exist.
    pub async fn area_detail(pool: &PgPool, id: DbId) -> Result<Option<AreaDetail>, sqlx::Error> {
        let (area, sectors) = tokio::try_join!(
            AreaRepo::find_by_id(pool, id),
            SectorRepo::list_by_area(pool, id),
        )?;
        Ok(area.map(|area| AreaDetail { area, sectors }))
    }

    /// A sector with its area and its routes, or `None`.
    pub async fn sector_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SectorDetail>, sqlx::Error> {
        let (sector, routes) = tokio::try_join!(
            SectorRepo::find_with_area(pool, id),
            RouteRepo::list_by_sector(pool, id),
        )?;
        Ok(sector.map(|sector| SectorDetail { sector, routes }))
    }

    /// A route with its parents and comments, or `None`.
    pub async fn route_detail(pool: &PgPool, id: DbId) -> Result<Option<RouteDetail>, sqlx::Error> {
        let (route, comments) = tokio::try_join!(
            RouteRepo::find_with_parents(pool, id),
            CommentRepo::list_by_route(pool, id),
        )?;
        Ok(route.map(|route| RouteDetail { route, comments }))
    }

    /// An area and the sectors that would block deleting it, or `None`.
    pub async fn area_delete_preview(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AreaDeletePreview>, sqlx::Error> {
        let (area, dependents) = tokio::try_join!(
            AreaRepo::find_by_id(pool, id),
            SectorRepo::list_dependents_of_area(pool, id),
        )?;
        Ok(area.map(|area| AreaDeletePreview { area, dependents }))
    }

    /// A sector and the routes that would block deleting it, or `None`.
    pub async fn sector_delete_preview(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SectorDeletePreview>, sqlx::Error> {
        let (sector, dependents) = tokio::try_join!(
            SectorRepo::find_by_id(pool, id),
            RouteRepo::list_by_sector(pool, id),
        )?;
        Ok(sector.map(|sector| SectorDeletePreview { sector, dependents }))
    }

    /// Delete an area unless sectors still reference it.
    ///
    /// A missing id is reported as [`DeleteOutcome::NotFound`], not an error.
    pub async fn delete_area(
        pool: &PgPool,
        id: DbId,
    ) -> Result<DeleteOutcome<SectorDependent>, sqlx::Error> {
        let dependents = SectorRepo::list_dependents_of_area(pool, id).await?;

        match evaluate_deletion(EntityKind::Area, dependents) {
            DeletionDecision::Blocked(dependents) => {
                Ok(DeleteOutcome::blocked(EntityKind::Area, dependents))
            }
            DeletionDecision::Proceed => Ok(removed(AreaRepo::delete(pool, id).await?)),
        }
    }

    /// Delete a sector unless routes still reference it.
    pub async fn delete_sector(
        pool: &PgPool,
        id: DbId,
    ) -> Result<DeleteOutcome<RouteSummary>, sqlx::Error> {
        let dependents = RouteRepo::list_by_sector(pool, id).await?;

        match evaluate_deletion(EntityKind::Sector, dependents) {
            DeletionDecision::Blocked(dependents) => {
                Ok(DeleteOutcome::blocked(EntityKind::Sector, dependents))
            }
            DeletionDecision::Proceed => Ok(removed(SectorRepo::delete(pool, id).await?)),
        }
    }

    /// Delete a route and its comments. Routes are never blocked.
    pub async fn delete_route(pool: &PgPool, id: DbId) -> Result<DeleteOutcome<()>, sqlx::Error> {
        Ok(removed(RouteRepo::delete(pool, id).await?))
    }

    /// Delete a single comment. Comments are never blocked.
    pub async fn delete_comment(pool: &PgPool, id: DbId) -> Result<DeleteOutcome<()>, sqlx::Error> {
        Ok(removed(CommentRepo::delete(pool, id).await?))
    }
}

fn removed<T>(deleted: bool) -> DeleteOutcome<T> {
    if deleted {
        DeleteOutcome::Deleted
    } else {
        DeleteOutcome::NotFound
    }
}
