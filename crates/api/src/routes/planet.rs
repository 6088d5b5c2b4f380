//! Route definitions for `/planets`.

use axum::routing::get;
use axum::Router;

use crate::handlers::planet;
use crate::state::AppState;

/// Routes mounted at `/planets`.
///
/// ```text
/// GET    /           -> list
/// POST   /           -> create
/// GET    /{id}       -> get_by_id
/// PUT    /{id}       -> update
/// DELETE /{id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(planet::list).post(planet::create))
        .route(
            "/{id}",
            get(planet::get_by_id).put(planet::update).delete(planet::delete),
        )
}
