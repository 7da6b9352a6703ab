//! HTTP-level integration tests for the catalog endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::{header, StatusCode};
use common::{
    body_json, build_test_app, create, delete, get, post_json, post_raw_json, put_json,
};
use serde_json::{json, Value};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_area(pool: &PgPool, name: &str, state: &str) -> Value {
    create(
        pool,
        "/catalog/areas",
        json!({"area_name": name, "state": state, "added_by": "CP"}),
    )
    .await
}

async fn create_sector(pool: &PgPool, area_id: i64, name: &str) -> Value {
    create(
        pool,
        "/catalog/sectors",
        json!({"sector_name": name, "area": area_id, "added_by": "CeePee"}),
    )
    .await
}

async fn create_route(pool: &PgPool, sector_id: i64, name: &str, grade: &str) -> Value {
    create(
        pool,
        &format!("/catalog/sectors/{sector_id}/routes"),
        json!({"route_name": name, "route_type": "Sport", "route_grade": grade, "added_by": "CoP"}),
    )
    .await
}

fn id_of(record: &Value) -> i64 {
    record["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Areas
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_area_returns_201_with_location(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/catalog/areas",
        json!({"area_name": " Mt Charleston ", "state": "Nevada", "added_by": "CP"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()[header::LOCATION].to_str().unwrap().to_string();
    let json = body_json(response).await;
    let id = id_of(&json["data"]);

    assert_eq!(location, format!("/catalog/areas/{id}"));
    assert_eq!(json["data"]["area_name"], "Mt Charleston");
    assert_eq!(json["data"]["state"], "Nevada");
    assert!(json["data"]["added_date"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_area_state_defaults_to_alabama(pool: PgPool) {
    let area = create(
        &pool,
        "/catalog/areas",
        json!({"area_name": "Horse Pens", "added_by": "CP"}),
    )
    .await;

    assert_eq!(area["state"], "Alabama");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_area_returns_400_with_all_errors(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/catalog/areas",
        json!({"area_name": "Tom & Jo", "state": "Utah", "added_by": ""}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let fields: Vec<_> = json["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(fields, vec!["area_name", "added_by"]);
    assert_eq!(json["values"]["area_name"], "Tom &amp; Jo");

    // Nothing was stored.
    let json = body_json(get(build_test_app(pool), "/catalog/areas").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_state_is_rejected_by_store(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/catalog/areas",
        json!({"area_name": "Squamish", "state": "British Columbia", "added_by": "CP"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_areas_sorted(pool: PgPool) {
    create_area(&pool, "Mt Potosi", "Nevada").await;
    create_area(&pool, "Maple Canyon", "Utah").await;

    let json = body_json(get(build_test_app(pool.clone()), "/catalog/areas").await).await;
    let names: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["area_name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Maple Canyon", "Mt Potosi"]);

    let json = body_json(
        get(build_test_app(pool), "/catalog/areas?sort=added_date").await,
    )
    .await;
    assert_eq!(json["data"][0]["area_name"], "Mt Potosi");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_areas_rejects_foreign_sort_field(pool: PgPool) {
    let response = get(build_test_app(pool.clone()), "/catalog/areas?sort=route_grade").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let response = get(build_test_app(pool), "/catalog/areas?sort=height").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_body_gets_json_error(pool: PgPool) {
    let response =
        post_raw_json(build_test_app(pool.clone()), "/catalog/areas", "{\"area_name\": ").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(!json["error"].as_str().unwrap().is_empty());

    // Wrong JSON type for a field.
    let response = post_json(
        build_test_app(pool),
        "/catalog/sectors",
        json!({"sector_name": "The Hood", "area": "seven", "added_by": "CP"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_area_detail_lists_sectors(pool: PgPool) {
    let area = create_area(&pool, "Mt Charleston", "Nevada").await;
    let area_id = id_of(&area);
    create_sector(&pool, area_id, "The Roost").await;
    create_sector(&pool, area_id, "The Hood").await;

    let response = get(build_test_app(pool), &format!("/catalog/areas/{area_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["area"]["area_name"], "Mt Charleston");
    assert_eq!(json["data"]["sectors"][0]["sector_name"], "The Hood");
    assert_eq!(json["data"]["sectors"][1]["sector_name"], "The Roost");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_missing_area_returns_404(pool: PgPool) {
    let response = get(build_test_app(pool), "/catalog/areas/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_area_keeps_id_and_resets_date(pool: PgPool) {
    let area = create_area(&pool, "Red Rock", "Nevada").await;
    let area_id = id_of(&area);

    let response = put_json(
        build_test_app(pool),
        &format!("/catalog/areas/{area_id}"),
        json!({"area_name": "Red Rocks", "state": "Colorado", "added_by": "cole"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(id_of(&json["data"]), area_id);
    assert_eq!(json["data"]["state"], "Colorado");
    assert_ne!(json["data"]["added_date"], area["added_date"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_area_returns_404(pool: PgPool) {
    let response = put_json(
        build_test_app(pool),
        "/catalog/areas/999999",
        json!({"area_name": "Red Rocks", "state": "Colorado", "added_by": "cole"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Sectors
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sector_requires_area(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/catalog/sectors",
        json!({"sector_name": "The Hood", "added_by": "CeePee"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["errors"][0]["field"], "area");
    assert_eq!(json["errors"][0]["message"], "Area must be specified.");
    assert_eq!(json["values"]["sector_name"], "The Hood");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sector_with_unknown_area_is_rejected(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/catalog/sectors",
        json!({"sector_name": "The Hood", "area": 999999, "added_by": "CeePee"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["errors"][0]["message"], "Area does not exist.");
    assert_eq!(json["values"]["area"], "999999");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sector_list_resolves_area(pool: PgPool) {
    let area = create_area(&pool, "Mt Potosi", "Nevada").await;
    create_sector(&pool, id_of(&area), "Clear Light Cave").await;

    let json = body_json(get(build_test_app(pool), "/catalog/sectors").await).await;
    assert_eq!(json["data"][0]["sector_name"], "Clear Light Cave");
    assert_eq!(json["data"][0]["area"]["area_name"], "Mt Potosi");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sector_detail_orders_routes_by_grade_string(pool: PgPool) {
    let area = create_area(&pool, "Mt Charleston", "Nevada").await;
    let sector = create_sector(&pool, id_of(&area), "The Hood").await;
    let sector_id = id_of(&sector);
    create_route(&pool, sector_id, "Warmup", "5.9").await;
    create_route(&pool, sector_id, "Project", "5.10a").await;

    let json = body_json(
        get(build_test_app(pool), &format!("/catalog/sectors/{sector_id}")).await,
    )
    .await;

    assert_eq!(json["data"]["sector"]["area"]["area_name"], "Mt Charleston");
    assert_eq!(json["data"]["routes"][0]["route_grade"], "5.10a");
    assert_eq!(json["data"]["routes"][1]["route_grade"], "5.9");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_sector_moves_it_to_another_area(pool: PgPool) {
    let first = create_area(&pool, "Mt Charleston", "Nevada").await;
    let second = create_area(&pool, "Mt Potosi", "Nevada").await;
    let sector = create_sector(&pool, id_of(&first), "The Hood").await;
    let sector_id = id_of(&sector);

    let response = put_json(
        build_test_app(pool),
        &format!("/catalog/sectors/{sector_id}"),
        json!({"sector_name": "The Hood", "area": id_of(&second), "added_by": "cole"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["area_id"], second["id"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_moved_sector_takes_its_routes_and_frees_old_area(pool: PgPool) {
    let old_area = create_area(&pool, "Mt Charleston", "Nevada").await;
    let old_area_id = id_of(&old_area);
    let new_area = create_area(&pool, "Mt Potosi", "Nevada").await;
    let sector = create_sector(&pool, old_area_id, "The Hood").await;
    let sector_id = id_of(&sector);
    let route = create_route(&pool, sector_id, "Infections Groove", "5.13b").await;

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/catalog/sectors/{sector_id}"),
        json!({"sector_name": "The Hood", "area": id_of(&new_area), "added_by": "cole"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(
        get(build_test_app(pool.clone()), &format!("/catalog/routes/{}", id_of(&route))).await,
    )
    .await;
    assert_eq!(json["data"]["route"]["area"]["id"], new_area["id"]);
    assert_eq!(json["data"]["route"]["sector"]["area_id"], new_area["id"]);

    let json = body_json(
        get(build_test_app(pool.clone()), &format!("/catalog/areas/{old_area_id}/delete")).await,
    )
    .await;
    assert_eq!(json["data"]["dependents"], json!([]));

    let response = delete(build_test_app(pool.clone()), &format!("/catalog/areas/{old_area_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The new area now guards the moved sector.
    let response = delete(build_test_app(pool), &format!("/catalog/areas/{}", id_of(&new_area))).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Routes and comments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_route_takes_area_from_sector(pool: PgPool) {
    let area = create_area(&pool, "Maple Canyon", "Utah").await;
    let sector = create_sector(&pool, id_of(&area), "Pipedream Cave").await;

    let response = post_json(
        build_test_app(pool),
        &format!("/catalog/sectors/{}/routes", id_of(&sector)),
        json!({"route_name": "Pipedream", "added_by": "CoP"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()[header::LOCATION].to_str().unwrap().to_string();
    let json = body_json(response).await;
    assert_eq!(location, format!("/catalog/routes/{}", id_of(&json["data"])));
    assert_eq!(json["data"]["area_id"], area["id"]);
    assert_eq!(json["data"]["sector_id"], sector["id"]);
    assert_eq!(json["data"]["route_type"], "Sport");
    assert_eq!(json["data"]["route_grade"], "5.4");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_route_under_missing_sector_returns_404(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/catalog/sectors/999999/routes",
        json!({"route_name": "Nowhere", "added_by": "CoP"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_route_preserves_added_date(pool: PgPool) {
    let area = create_area(&pool, "Mt Charleston", "Nevada").await;
    let sector = create_sector(&pool, id_of(&area), "The Hood").await;
    let route = create_route(&pool, id_of(&sector), "Infections Groove", "5.13b").await;
    let route_id = id_of(&route);

    let response = put_json(
        build_test_app(pool),
        &format!("/catalog/routes/{route_id}"),
        json!({"route_name": "Infectious Groove", "route_type": "Traditional", "route_grade": "5.13a", "added_by": "CoP"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["route_grade"], "5.13a");
    assert_eq!(json["data"]["added_date"], route["added_date"]);
    assert_eq!(json["data"]["sector_id"], sector["id"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_comments_appear_on_route_detail(pool: PgPool) {
    let area = create_area(&pool, "Mt Potosi", "Nevada").await;
    let sector = create_sector(&pool, id_of(&area), "Clear Light Cave").await;
    let route = create_route(&pool, id_of(&sector), "All You Can Eat", "5.15a").await;
    let route_id = id_of(&route);

    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/catalog/routes/{route_id}/comments"),
        json!({"comment_text": "Hardest in the state", "added_by": "Cole"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers()[header::LOCATION],
        format!("/catalog/routes/{route_id}").as_str()
    );
    create(
        &pool,
        &format!("/catalog/routes/{route_id}/comments"),
        json!({"comment_text": "Second visit", "added_by": "Cole"}),
    )
    .await;

    let json = body_json(
        get(build_test_app(pool), &format!("/catalog/routes/{route_id}")).await,
    )
    .await;

    assert_eq!(json["data"]["route"]["area"]["area_name"], "Mt Potosi");
    assert_eq!(json["data"]["route"]["sector"]["sector_name"], "Clear Light Cave");
    let comments = json["data"]["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["comment_text"], "Hardest in the state");
    assert_eq!(comments[1]["comment_text"], "Second visit");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_comment_validation(pool: PgPool) {
    let area = create_area(&pool, "Mt Potosi", "Nevada").await;
    let sector = create_sector(&pool, id_of(&area), "Clear Light Cave").await;
    let route = create_route(&pool, id_of(&sector), "All You Can Eat", "5.15a").await;

    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/catalog/routes/{}/comments", id_of(&route)),
        json!({"comment_text": "", "added_by": "Cole"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["errors"][0]["message"], "Comment must have text.");

    let response = post_json(
        build_test_app(pool),
        "/catalog/routes/999999/comments",
        json!({"comment_text": "Lost", "added_by": "Cole"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Guarded deletion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_protocol_end_to_end(pool: PgPool) {
    let area = create_area(&pool, "Mt Charleston", "Nevada").await;
    let area_id = id_of(&area);
    let sector = create_sector(&pool, area_id, "The Hood").await;
    let sector_id = id_of(&sector);
    let route = create_route(&pool, sector_id, "TRex", "5.14a").await;
    let route_id = id_of(&route);

    // Area is blocked by its sector.
    let response = delete(build_test_app(pool.clone()), &format!("/catalog/areas/{area_id}")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["data"]["outcome"], "blocked");
    assert_eq!(json["data"]["dependents"][0]["sector_name"], "The Hood");
    assert_eq!(json["data"]["dependents"][0]["route_count"], 1);

    // Sector is blocked by its route.
    let response =
        delete(build_test_app(pool.clone()), &format!("/catalog/sectors/{sector_id}")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["data"]["dependents"][0]["route_name"], "TRex");

    // Clear bottom-up.
    for uri in [
        format!("/catalog/routes/{route_id}"),
        format!("/catalog/sectors/{sector_id}"),
        format!("/catalog/areas/{area_id}"),
    ] {
        let response = delete(build_test_app(pool.clone()), &uri).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT, "DELETE {uri}");

        let response = get(build_test_app(pool.clone()), &uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {uri}");
    }

    let json = body_json(get(build_test_app(pool), "/catalog").await).await;
    assert_eq!(json["data"]["area_count"], 0);
    assert_eq!(json["data"]["sector_count"], 0);
    assert_eq!(json["data"]["route_count"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_record_returns_204(pool: PgPool) {
    for uri in [
        "/catalog/areas/999999",
        "/catalog/sectors/999999",
        "/catalog/routes/999999",
    ] {
        let response = delete(build_test_app(pool.clone()), uri).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT, "DELETE {uri}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_previews(pool: PgPool) {
    let area = create_area(&pool, "Maple Canyon", "Utah").await;
    let area_id = id_of(&area);
    let sector = create_sector(&pool, area_id, "Pipedream Cave").await;
    let sector_id = id_of(&sector);
    create_route(&pool, sector_id, "Pipedream", "5.12c").await;

    let json = body_json(
        get(build_test_app(pool.clone()), &format!("/catalog/areas/{area_id}/delete")).await,
    )
    .await;
    assert_eq!(json["data"]["area"]["area_name"], "Maple Canyon");
    assert_eq!(json["data"]["dependents"][0]["route_count"], 1);

    let json = body_json(
        get(build_test_app(pool.clone()), &format!("/catalog/sectors/{sector_id}/delete")).await,
    )
    .await;
    assert_eq!(json["data"]["sector"]["sector_name"], "Pipedream Cave");
    assert_eq!(json["data"]["dependents"][0]["route_name"], "Pipedream");

    // Previewing changed nothing.
    let response = get(build_test_app(pool.clone()), &format!("/catalog/areas/{area_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(build_test_app(pool), "/catalog/areas/999999/delete").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
