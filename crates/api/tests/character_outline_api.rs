//! Integration tests for characters and outlines.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, delete_auth, get_auth, send_json_auth};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Characters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn character_crud_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, novel_id) = common::register_with_novel(&app, "writer@example.com").await;

    let response = send_json_auth(
        app.clone(),
        Method::POST,
        &format!("/api/v1/novels/{novel_id}/characters"),
        &token,
        json!({"name": "沈青梧", "personality": "孤傲", "background": "将门之后"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let character = body_json(response).await;
    let character_id = character["id"].as_str().unwrap().to_string();
    assert_eq!(character["name"], "沈青梧");

    // Partial update leaves other fields alone.
    let response = send_json_auth(
        app.clone(),
        Method::PUT,
        &format!("/api/v1/characters/{character_id}"),
        &token,
        json!({"description": "女主角"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["description"], "女主角");
    assert_eq!(updated["personality"], "孤傲");

    let response = delete_auth(
        app.clone(),
        &format!("/api/v1/characters/{character_id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(
        app,
        &format!("/api/v1/novels/{novel_id}/characters"),
        &token,
    )
    .await;
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn character_create_rejects_blank_name(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, novel_id) = common::register_with_novel(&app, "writer@example.com").await;

    let response = send_json_auth(
        app,
        Method::POST,
        &format!("/api/v1/novels/{novel_id}/characters"),
        &token,
        json!({"name": "  "}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn foreign_character_is_invisible(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token_a, novel_id) = common::register_with_novel(&app, "alice@example.com").await;
    let token_b = common::register_user(&app, "bob@example.com", "test-password-1").await;

    let response = send_json_auth(
        app.clone(),
        Method::POST,
        &format!("/api/v1/novels/{novel_id}/characters"),
        &token_a,
        json!({"name": "沈青梧"}),
    )
    .await;
    let character = body_json(response).await;
    let character_id = character["id"].as_str().unwrap();

    let response = get_auth(
        app,
        &format!("/api/v1/characters/{character_id}"),
        &token_b,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Outlines
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn outlines_append_and_reorder(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, novel_id) = common::register_with_novel(&app, "writer@example.com").await;

    let mut ids = Vec::new();
    for title in ["起", "承", "转"] {
        let response = send_json_auth(
            app.clone(),
            Method::POST,
            &format!("/api/v1/novels/{novel_id}/outlines"),
            &token,
            json!({"title": title, "chapter_range": "1-10"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let outline = body_json(response).await;
        ids.push(outline["id"].as_str().unwrap().to_string());
    }

    let response = send_json_auth(
        app.clone(),
        Method::PATCH,
        &format!("/api/v1/novels/{novel_id}/outlines/reorder"),
        &token,
        json!({"outline_ids": [ids[2], ids[0], ids[1]]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let outlines = body_json(response).await;
    let outlines = outlines.as_array().unwrap();
    assert_eq!(outlines[0]["title"], "转");
    assert_eq!(outlines[1]["title"], "起");
    assert_eq!(outlines[2]["title"], "承");

    // Partial permutations are rejected.
    let response = send_json_auth(
        app,
        Method::PATCH,
        &format!("/api/v1/novels/{novel_id}/outlines/reorder"),
        &token,
        json!({"outline_ids": [ids[0]]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn outline_update_and_delete(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, novel_id) = common::register_with_novel(&app, "writer@example.com").await;

    let response = send_json_auth(
        app.clone(),
        Method::POST,
        &format!("/api/v1/novels/{novel_id}/outlines"),
        &token,
        json!({"title": "起", "content": "开篇布局"}),
    )
    .await;
    let outline = body_json(response).await;
    let outline_id = outline["id"].as_str().unwrap().to_string();

    let response = send_json_auth(
        app.clone(),
        Method::PUT,
        &format!("/api/v1/outlines/{outline_id}"),
        &token,
        json!({"content": "开篇与伏笔"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["title"], "起");
    assert_eq!(updated["content"], "开篇与伏笔");

    let response = delete_auth(app.clone(), &format!("/api/v1/outlines/{outline_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app, &format!("/api/v1/outlines/{outline_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
