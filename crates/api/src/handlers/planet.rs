//! Handlers for the `/planets` resource.

use axum::extract::State;
use holonet_core::error::CoreError;
use holonet_core::types::DbId;
use holonet_db::models::catalog::{link_all, Linked};
use holonet_db::models::favorite::PlanetFavorite;
use holonet_db::models::planet::{CreatePlanet, Planet, UpdatePlanet};
use holonet_db::repositories::{FavoriteRepo, PlanetRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::{self, Reply};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Planet",
        id,
    })
}

/// GET /api/planets
pub async fn list(State(state): State<AppState>) -> AppResult<Reply<Vec<Linked<Planet>>>> {
    let planets = PlanetRepo::list(&state.pool).await?;
    Ok(response::ok(link_all(planets), "Listado de Planetas"))
}

/// POST /api/planets
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreatePlanet>,
) -> AppResult<Reply<Linked<Planet>>> {
    let planet = PlanetRepo::create(&state.pool, &input).await?;
    Ok(response::created(planet.into(), "Planeta creado"))
}

/// GET /api/planets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Reply<Linked<Planet>>> {
    let planet = PlanetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(response::ok(planet.into(), "Planeta encontrado"))
}

/// PUT /api/planets/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdatePlanet>,
) -> AppResult<Reply<Linked<Planet>>> {
    let planet = PlanetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(response::ok(planet.into(), "Planeta actualizado"))
}

/// DELETE /api/planets/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Reply<()>> {
    let mut tx = state.pool.begin().await?;
    let favorites = FavoriteRepo::delete_by_target::<PlanetFavorite>(&mut tx, id).await?;
    if !PlanetRepo::delete(&mut tx, id).await? {
        return Err(not_found(id));
    }
    tx.commit().await?;

    tracing::info!(planet_id = id, favorites, "Planet deleted");
    Ok(response::ok((), "Planeta eliminado"))
}
