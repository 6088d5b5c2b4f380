//! Route definitions for `/followers`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::follower;
use crate::state::AppState;

/// Routes mounted at `/followers`.
///
/// ```text
/// GET    /           -> list
/// POST   /{id}       -> follow
/// DELETE /{id}       -> unfollow
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(follower::list))
        .route("/{id}", post(follower::follow).delete(follower::unfollow))
}
