//! Integration tests for the `/novels` CRUD surface and ownership rules.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, delete_auth, get_auth, send_json_auth};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create / list / get
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_and_get_novel(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, novel_id) = common::register_with_novel(&app, "writer@example.com").await;

    let response = get_auth(app, &format!("/api/v1/novels/{novel_id}"), &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "雪落长安");
    assert_eq!(json["genre"], "历史");
    assert_eq!(json["word_count"], 0);
    assert_eq!(json["chapter_count"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_rejects_blank_title(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::register_user(&app, "writer@example.com", "test-password-1").await;

    let response = send_json_auth(
        app,
        Method::POST,
        "/api/v1/novels",
        &token,
        json!({"title": "   "}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_returns_only_own_novels(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token_a, _) = common::register_with_novel(&app, "alice@example.com").await;
    let (_token_b, _) = common::register_with_novel(&app, "bob@example.com").await;

    let response = get_auth(app, "/api/v1/novels", &token_a).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let novels = json.as_array().unwrap();
    assert_eq!(novels.len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn novels_require_authentication(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/novels").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Update / delete / ownership
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn update_applies_partial_changes(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, novel_id) = common::register_with_novel(&app, "writer@example.com").await;

    let response = send_json_auth(
        app.clone(),
        Method::PUT,
        &format!("/api/v1/novels/{novel_id}"),
        &token,
        json!({"description": "第二稿"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    // Untouched fields keep their values.
    assert_eq!(json["title"], "雪落长安");
    assert_eq!(json["description"], "第二稿");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_removes_novel(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, novel_id) = common::register_with_novel(&app, "writer@example.com").await;

    let response = delete_auth(
        app.clone(),
        &format!("/api/v1/novels/{novel_id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app, &format!("/api/v1/novels/{novel_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn foreign_novel_is_invisible(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_token_a, novel_id) = common::register_with_novel(&app, "alice@example.com").await;
    let token_b = common::register_user(&app, "bob@example.com", "test-password-1").await;

    // Another user's novel reads, updates, and deletes as if it did not exist.
    let response = get_auth(app.clone(), &format!("/api/v1/novels/{novel_id}"), &token_b).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send_json_auth(
        app.clone(),
        Method::PUT,
        &format!("/api/v1/novels/{novel_id}"),
        &token_b,
        json!({"title": "hijacked"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_auth(app, &format!("/api/v1/novels/{novel_id}"), &token_b).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn banned_novel_is_hidden_from_owner(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (token, novel_id) = common::register_with_novel(&app, "writer@example.com").await;

    sqlx::query("UPDATE novels SET is_banned = TRUE WHERE id = $1::uuid")
        .bind(&novel_id)
        .execute(&pool)
        .await
        .unwrap();

    let response = get_auth(app.clone(), &format!("/api/v1/novels/{novel_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_auth(app, "/api/v1/novels", &token).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}
