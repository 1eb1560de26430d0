//! Shared helpers for API integration tests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use scribe_ai::{ChatClient, ProviderConfig};
use scribe_api::auth::jwt::JwtConfig;
use scribe_api::config::ServerConfig;
use scribe_api::router::build_app_router;
use scribe_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and a known JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3001".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-do-not-use".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and an unconfigured AI client (so assistant endpoints
/// answer 501 without touching the network).
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let ai = ChatClient::new(ProviderConfig {
        api_key: None,
        api_url: "http://127.0.0.1:1/unreachable".to_string(),
        model: "test-model".to_string(),
    });

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        ai: Arc::new(ai),
    };

    build_app_router(state, &config)
}

/// Send a GET request without a body.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a JSON request without authentication.
pub async fn send_json(app: Router, method: Method, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a JSON request with a bearer token.
pub async fn send_json_auth(
    app: Router,
    method: Method,
    uri: &str,
    token: &str,
    body: Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request with a bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Register a fresh user through the API and return their access token.
pub async fn register_user(app: &Router, email: &str, password: &str) -> String {
    let response = send_json(
        app.clone(),
        Method::POST,
        "/api/v1/auth/register",
        json!({
            "email": email,
            "name": "Test Author",
            "password": password,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    json["access_token"].as_str().unwrap().to_string()
}

/// Register a user and create a novel owned by them. Returns (token, novel id).
pub async fn register_with_novel(app: &Router, email: &str) -> (String, String) {
    let token = register_user(app, email, "test-password-1").await;
    let response = send_json_auth(
        app.clone(),
        Method::POST,
        "/api/v1/novels",
        &token,
        json!({"title": "雪落长安", "genre": "历史", "description": "初稿"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let novel_id = json["id"].as_str().unwrap().to_string();
    (token, novel_id)
}
