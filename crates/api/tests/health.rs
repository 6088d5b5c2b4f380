//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn health_check_returns_ok_with_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404 in the envelope
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_route_returns_enveloped_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Not found");
    assert!(json["results"].is_null());
}

// ---------------------------------------------------------------------------
// Test: Known route with an unsupported method returns 405 in the envelope
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn wrong_method_returns_enveloped_405(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/comments/1").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Method not allowed");
    assert!(json["results"].is_null());
}

// ---------------------------------------------------------------------------
// Test: x-request-id is propagated to the response
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn response_carries_request_id(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id header should be set");
    assert!(!request_id.is_empty());
}

// ---------------------------------------------------------------------------
// Test: Every list route answers an empty store with `[]` and its message
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_lists_return_empty_array_with_message(pool: PgPool) {
    let cases = [
        ("/api/users", "Listado de Usuarios"),
        ("/api/posts", "Listado de Posts"),
        ("/api/comments", "Listado de Comentarios"),
        ("/api/medias", "Listado de Medios"),
        ("/api/followers", "Listado de Seguidores"),
        ("/api/people", "Listado de Personajes"),
        ("/api/planets", "Listado de Planetas"),
        ("/api/vehicles", "Listado de Vehiculos"),
    ];

    for (uri, message) in cases {
        let response = get(common::build_test_app(pool.clone()), uri).await;

        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let json = body_json(response).await;
        assert_eq!(json["message"], message, "{uri}");
        assert_eq!(json["results"], serde_json::json!([]), "{uri}");
    }
}
