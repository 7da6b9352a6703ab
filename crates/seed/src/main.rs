//! `cragbook-seed` -- populate an empty catalog with sample records.
//!
//! Writes go straight through the repositories, so the form rules are not
//! applied; only the store's own constraints are.
//!
//! # Usage
//!
//! ```text
//! cragbook-seed [DATABASE_URL]
//! ```
//!
//! The URL may also come from the `DATABASE_URL` environment variable.

use anyhow::Context;
use cragbook_db::models::area::{Area, CreateArea};
use cragbook_db::models::comment::{Comment, CreateComment};
use cragbook_db::models::route::{CreateRoute, Route};
use cragbook_db::models::sector::{CreateSector, Sector};
use cragbook_db::repositories::{AreaRepo, CommentRepo, RouteRepo, SectorRepo};
use cragbook_db::DbPool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const MAX_CONNECTIONS: u32 = 5;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cragbook_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = match std::env::args().nth(1) {
        Some(url) => url,
        None => std::env::var("DATABASE_URL")
            .context("pass a database URL as the first argument or set DATABASE_URL")?,
    };

    let pool = cragbook_db::create_pool(&database_url, MAX_CONNECTIONS)
        .await
        .context("failed to connect to database")?;
    cragbook_db::run_migrations(&pool)
        .await
        .context("failed to run database migrations")?;

    // Each tier needs the ids of the one before it.
    let areas = create_areas(&pool).await.context("adding areas")?;
    let sectors = create_sectors(&pool, &areas).await.context("adding sectors")?;
    let routes = create_routes(&pool, &sectors).await.context("adding routes")?;
    create_comments(&pool, &routes).await.context("adding comments")?;

    pool.close().await;
    tracing::info!("Seed complete");
    Ok(())
}

async fn area_create(pool: &DbPool, area_name: &str, state: &str, added_by: &str) -> anyhow::Result<Area> {
    let area = AreaRepo::create(
        pool,
        &CreateArea {
            area_name: area_name.to_string(),
            state: state.to_string(),
            added_by: added_by.to_string(),
        },
    )
    .await?;
    tracing::info!(area_id = area.id, area_name, "Added area");
    Ok(area)
}

async fn sector_create(
    pool: &DbPool,
    sector_name: &str,
    area: &Area,
    added_by: &str,
) -> anyhow::Result<Sector> {
    let sector = SectorRepo::create(
        pool,
        &CreateSector {
            sector_name: sector_name.to_string(),
            area_id: area.id,
            added_by: added_by.to_string(),
        },
    )
    .await?;
    tracing::info!(sector_id = sector.id, sector_name, "Added sector");
    Ok(sector)
}

async fn route_create(
    pool: &DbPool,
    route_name: &str,
    route_grade: &str,
    sector: &Sector,
    added_by: &str,
) -> anyhow::Result<Route> {
    let route = RouteRepo::create(
        pool,
        &CreateRoute {
            route_name: route_name.to_string(),
            route_type: "Sport".to_string(),
            route_grade: route_grade.to_string(),
            area_id: sector.area_id,
            sector_id: sector.id,
            added_by: added_by.to_string(),
        },
    )
    .await?;
    tracing::info!(route_id = route.id, route_name, "Added route");
    Ok(route)
}

async fn comment_create(
    pool: &DbPool,
    route: &Route,
    comment_text: &str,
    added_by: &str,
) -> anyhow::Result<Comment> {
    let comment = CommentRepo::create(
        pool,
        &CreateComment {
            route_id: route.id,
            comment_text: comment_text.to_string(),
            added_by: added_by.to_string(),
        },
    )
    .await?;
    tracing::info!(comment_id = comment.id, comment_text, "Added comment");
    Ok(comment)
}

async fn create_areas(pool: &DbPool) -> anyhow::Result<[Area; 3]> {
    tracing::info!("Adding areas");
    let (charleston, potosi, maple) = tokio::try_join!(
        area_create(pool, "Mt Charleston", "Nevada", "CP"),
        area_create(pool, "Mt Potosi", "Nevada", "cp"),
        area_create(pool, "Maple Canyon", "Utah", "Cp"),
    )?;
    Ok([charleston, potosi, maple])
}

async fn create_sectors(pool: &DbPool, areas: &[Area; 3]) -> anyhow::Result<[Sector; 4]> {
    tracing::info!("Adding sectors");
    let (hood, roost, clear_light, pipedream) = tokio::try_join!(
        sector_create(pool, "The Hood", &areas[0], "CeePee"),
        sector_create(pool, "The Roost", &areas[0], "CePe"),
        sector_create(pool, "Clear Light Cave", &areas[1], "C.P."),
        sector_create(pool, "Pipedream Cave", &areas[2], "CP."),
    )?;
    Ok([hood, roost, clear_light, pipedream])
}

async fn create_routes(pool: &DbPool, sectors: &[Sector; 4]) -> anyhow::Result<[Route; 5]> {
    tracing::info!("Adding routes");
    let (groove, ghetto, cat, all_you_can_eat, trex) = tokio::try_join!(
        route_create(pool, "Infections Groove", "5.13b", &sectors[0], "ColeP"),
        route_create(pool, "Ghetto Boys", "5.13c", &sectors[0], "ColePa"),
        route_create(pool, "T.H.E Cat", "5.13b", &sectors[1], "ColeP"),
        route_create(pool, "All You Can Eat", "5.15a", &sectors[2], "ColeP"),
        route_create(pool, "T-rex", "5.14a", &sectors[3], "CoP"),
    )?;
    Ok([groove, ghetto, cat, all_you_can_eat, trex])
}

async fn create_comments(pool: &DbPool, routes: &[Route; 5]) -> anyhow::Result<()> {
    tracing::info!("Adding comments");
    tokio::try_join!(
        comment_create(pool, &routes[0], "Great line", "Cole"),
        comment_create(pool, &routes[1], "Idk man, here is a comment", "Colep"),
        comment_create(pool, &routes[2], "Another route. Another comment", "ColePai"),
    )?;
    Ok(())
}
