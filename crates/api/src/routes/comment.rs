//! Route definitions for `/comments`. Comments cannot be read singly or edited.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::comment;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(comment::list).post(comment::create))
        .route("/{id}", delete(comment::delete))
}
