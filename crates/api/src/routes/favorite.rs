//! Route definitions for `/favorite`.

use axum::routing::post;
use axum::Router;
use holonet_db::models::favorite::{CharacterFavorite, PlanetFavorite, VehicleFavorite};

use crate::handlers::favorite::{add, remove};
use crate::state::AppState;

/// Routes mounted at `/favorite`. Each acts on the current user's favorites.
///
/// ```text
/// POST   /people/{id}    DELETE /people/{id}
/// POST   /planet/{id}    DELETE /planet/{id}
/// POST   /vehicle/{id}   DELETE /vehicle/{id}
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/people/{id}",
            post(add::<CharacterFavorite>).delete(remove::<CharacterFavorite>),
        )
        .route(
            "/planet/{id}",
            post(add::<PlanetFavorite>).delete(remove::<PlanetFavorite>),
        )
        .route(
            "/vehicle/{id}",
            post(add::<VehicleFavorite>).delete(remove::<VehicleFavorite>),
        )
}
