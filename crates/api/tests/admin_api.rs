//! Integration tests for the `/admin` moderation surface.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, get_auth, send_json_auth};
use serde_json::json;
use sqlx::PgPool;

/// Promote a registered user to admin directly in the database, then log
/// in again so the token carries the admin claim.
async fn make_admin(app: &axum::Router, pool: &PgPool, email: &str) -> String {
    sqlx::query("UPDATE users SET is_admin = TRUE WHERE email = $1")
        .bind(email)
        .execute(pool)
        .await
        .unwrap();

    let response = common::send_json(
        app.clone(),
        Method::POST,
        "/api/v1/auth/login",
        json!({"email": email, "password": "test-password-1"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["access_token"].as_str().unwrap().to_string()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_admin_is_forbidden(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::register_user(&app, "pleb@example.com", "test-password-1").await;

    let response = get_auth(app, "/api/v1/admin/users", &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_lists_users_and_novels_with_owner(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (_token, _novel_id) = common::register_with_novel(&app, "writer@example.com").await;
    common::register_user(&app, "admin@example.com", "test-password-1").await;
    let admin_token = make_admin(&app, &pool, "admin@example.com").await;

    let response = get_auth(app.clone(), "/api/v1/admin/users", &admin_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let users = body_json(response).await;
    assert_eq!(users.as_array().unwrap().len(), 2);

    let response = get_auth(app, "/api/v1/admin/novels", &admin_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let novels = body_json(response).await;
    let novels = novels.as_array().unwrap();
    assert_eq!(novels.len(), 1);
    // Admin listing carries the owner's identity.
    assert_eq!(novels[0]["user_email"], "writer@example.com");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_ban_hides_novel_from_owner_but_not_admin(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (owner_token, novel_id) = common::register_with_novel(&app, "writer@example.com").await;
    common::register_user(&app, "admin@example.com", "test-password-1").await;
    let admin_token = make_admin(&app, &pool, "admin@example.com").await;

    let response = send_json_auth(
        app.clone(),
        Method::PATCH,
        &format!("/api/v1/admin/novels/{novel_id}"),
        &admin_token,
        json!({"is_banned": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let patched = body_json(response).await;
    assert_eq!(patched["is_banned"], true);

    // Owner no longer sees it.
    let response = get_auth(
        app.clone(),
        &format!("/api/v1/novels/{novel_id}"),
        &owner_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Admin still does.
    let response = get_auth(
        app,
        &format!("/api/v1/admin/novels/{novel_id}"),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_bans_user(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    common::register_user(&app, "target@example.com", "test-password-1").await;
    common::register_user(&app, "admin@example.com", "test-password-1").await;
    let admin_token = make_admin(&app, &pool, "admin@example.com").await;

    // Find the target's id through the admin listing.
    let response = get_auth(app.clone(), "/api/v1/admin/users", &admin_token).await;
    let users = body_json(response).await;
    let target_id = users
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["email"] == "target@example.com")
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = send_json_auth(
        app.clone(),
        Method::PATCH,
        &format!("/api/v1/admin/users/{target_id}"),
        &admin_token,
        json!({"is_banned": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let patched = body_json(response).await;
    assert_eq!(patched["is_banned"], true);

    // A banned user cannot log in again.
    let response = common::send_json(
        app,
        Method::POST,
        "/api/v1/auth/login",
        json!({"email": "target@example.com", "password": "test-password-1"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
