//! Integration tests for the one-per-novel world-building document.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, get_auth, send_json_auth};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn get_before_upsert_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, novel_id) = common::register_with_novel(&app, "writer@example.com").await;

    let response = get_auth(
        app,
        &format!("/api/v1/novels/{novel_id}/world-building"),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upsert_creates_then_replaces(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, novel_id) = common::register_with_novel(&app, "writer@example.com").await;

    let uri = format!("/api/v1/novels/{novel_id}/world-building");

    let response = send_json_auth(
        app.clone(),
        Method::PUT,
        &uri,
        &token,
        json!({"title": "长安城", "content": "坊市制度", "kind": "geography"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let first = body_json(response).await;
    assert_eq!(first["title"], "长安城");

    // Second upsert replaces in place, keeping the same row id.
    let response = send_json_auth(
        app.clone(),
        Method::PUT,
        &uri,
        &token,
        json!({"title": "长安城", "content": "坊市与宵禁", "kind": "geography"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let second = body_json(response).await;
    assert_eq!(second["id"], first["id"]);
    assert_eq!(second["content"], "坊市与宵禁");

    let response = get_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["content"], "坊市与宵禁");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn flat_list_filters_by_novel(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, novel_a) = common::register_with_novel(&app, "writer@example.com").await;

    // Second novel with its own document.
    let response = send_json_auth(
        app.clone(),
        Method::POST,
        "/api/v1/novels",
        &token,
        json!({"title": "别的书"}),
    )
    .await;
    let novel_b = body_json(response).await;
    let novel_b_id = novel_b["id"].as_str().unwrap().to_string();

    for novel_id in [&novel_a, &novel_b_id] {
        let response = send_json_auth(
            app.clone(),
            Method::PUT,
            &format!("/api/v1/novels/{novel_id}/world-building"),
            &token,
            json!({"title": "设定", "content": "草稿", "kind": "general"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get_auth(app.clone(), "/api/v1/world-buildings", &token).await;
    let all = body_json(response).await;
    assert_eq!(all.as_array().unwrap().len(), 2);

    let response = get_auth(
        app,
        &format!("/api/v1/world-buildings?novel_id={novel_a}"),
        &token,
    )
    .await;
    let filtered = body_json(response).await;
    let filtered = filtered.as_array().unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["novel_id"], novel_a.as_str());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn flat_update_is_partial(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, novel_id) = common::register_with_novel(&app, "writer@example.com").await;

    let response = send_json_auth(
        app.clone(),
        Method::PUT,
        &format!("/api/v1/novels/{novel_id}/world-building"),
        &token,
        json!({"title": "长安城", "content": "坊市制度", "kind": "geography"}),
    )
    .await;
    let doc = body_json(response).await;
    let doc_id = doc["id"].as_str().unwrap();

    let response = send_json_auth(
        app,
        Method::PUT,
        &format!("/api/v1/world-buildings/{doc_id}"),
        &token,
        json!({"content": "坊市与宵禁"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["title"], "长安城");
    assert_eq!(updated["content"], "坊市与宵禁");
}
