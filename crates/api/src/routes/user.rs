//! Route definitions for `/users`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{favorite, user};
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// `/favorites` is a static segment, so it wins over `/{id}`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// GET    /favorites   -> favorite::summary
/// GET    /{id}        -> get_by_id
/// PUT    /{id}        -> update
/// DELETE /{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list).post(user::create))
        .route("/favorites", get(favorite::summary))
        .route(
            "/{id}",
            get(user::get_by_id).put(user::update).delete(user::delete),
        )
}
