//! Shared response envelope for API handlers.
//!
//! Every API response is `{ "results": ..., "message": "..." }`. Errors use
//! the same shape with `results: null` (see [`crate::error::AppError`]).

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// Standard `{ "results": T, "message": "..." }` response envelope.
///
/// Handlers that return nothing use `Envelope<()>`, which serializes
/// `results` as `null`.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub results: T,
    pub message: &'static str,
}

/// Status code plus JSON envelope, the success type of every handler.
pub type Reply<T> = (StatusCode, Json<Envelope<T>>);

/// 200 OK with `results` and `message`.
pub fn ok<T: Serialize>(results: T, message: &'static str) -> Reply<T> {
    (StatusCode::OK, Json(Envelope { results, message }))
}

/// 201 Created with `results` and `message`.
pub fn created<T: Serialize>(results: T, message: &'static str) -> Reply<T> {
    (StatusCode::CREATED, Json(Envelope { results, message }))
}
