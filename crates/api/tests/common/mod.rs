#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use holonet_api::config::ServerConfig;
use holonet_api::router::build_app_router;
use holonet_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Requests without an `X-User-Id` header act as user 1.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        current_user_id: 1,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Goes through [`build_app_router`], so tests exercise the same middleware
/// stack that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

fn json_request(method: Method, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::POST, uri, &body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::PUT, uri, &body)).await
}

/// POST with no body, e.g. follow and favorite endpoints.
pub async fn post_empty(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Send `method uri` acting as `user_id` via the `X-User-Id` header.
pub async fn as_user(app: Router, method: Method, uri: &str, user_id: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("x-user-id", user_id)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

/// Create a user through the API and return its id.
pub async fn create_user(pool: &PgPool, email: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/users",
        serde_json::json!({"email": email, "password": "hunter2"}),
    )
    .await;
    body_json(response).await["results"]["id"].as_i64().unwrap()
}

/// Create a post through the API and return its id.
pub async fn create_post(pool: &PgPool, user_id: i64, title: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/posts",
        serde_json::json!({
            "title": title,
            "description": "A short description",
            "body": "Post body",
            "image_url": "https://img.example/post.png",
            "user_id": user_id,
        }),
    )
    .await;
    body_json(response).await["results"]["id"].as_i64().unwrap()
}

/// Create a character through the API and return its uid.
pub async fn create_person(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/people",
        serde_json::json!({"name": name}),
    )
    .await;
    body_json(response).await["results"]["uid"].as_i64().unwrap()
}

/// Create a planet through the API and return its uid.
pub async fn create_planet(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/planets",
        serde_json::json!({"name": name}),
    )
    .await;
    body_json(response).await["results"]["uid"].as_i64().unwrap()
}

/// Create a vehicle through the API and return its id.
pub async fn create_vehicle(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/vehicles",
        serde_json::json!({
            "name": name,
            "model": "Digger Crawler",
            "manufacturer": "Corellia Mining Corporation",
            "vehicle_class": "wheeled",
        }),
    )
    .await;
    body_json(response).await["results"]["id"].as_i64().unwrap()
}
