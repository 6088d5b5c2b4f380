//! Handlers for the `/vehicles` resource.
//!
//! Vehicle creation is the only endpoint that checks its body before
//! insert: name, model, manufacturer and vehicle class must be non-empty.

use axum::extract::State;
use holonet_core::error::CoreError;
use holonet_core::types::DbId;
use holonet_core::vehicle::first_missing;
use holonet_db::models::catalog::{link_all, Linked};
use holonet_db::models::favorite::VehicleFavorite;
use holonet_db::models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle};
use holonet_db::repositories::{FavoriteRepo, VehicleRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::{self, Reply};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Vehicle",
        id,
    })
}

/// GET /api/vehicles
pub async fn list(State(state): State<AppState>) -> AppResult<Reply<Vec<Linked<Vehicle>>>> {
    let vehicles = VehicleRepo::list(&state.pool).await?;
    Ok(response::ok(link_all(vehicles), "Listado de Vehiculos"))
}

/// POST /api/vehicles
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateVehicle>,
) -> AppResult<Reply<Linked<Vehicle>>> {
    if let Some(missing) = first_missing(input.required_values()) {
        tracing::debug!(field = missing.field, "Vehicle create rejected");
        return Err(CoreError::Validation(missing.message.to_string()).into());
    }
    let vehicle = VehicleRepo::create(&state.pool, &input).await?;
    Ok(response::created(vehicle.into(), "Vehiculo creado"))
}

/// GET /api/vehicles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Reply<Linked<Vehicle>>> {
    let vehicle = VehicleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(response::ok(vehicle.into(), "Vehiculo encontrado"))
}

/// PUT /api/vehicles/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateVehicle>,
) -> AppResult<Reply<Linked<Vehicle>>> {
    let vehicle = VehicleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(response::ok(vehicle.into(), "Vehiculo actualizado"))
}

/// DELETE /api/vehicles/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Reply<()>> {
    let mut tx = state.pool.begin().await?;
    let favorites = FavoriteRepo::delete_by_target::<VehicleFavorite>(&mut tx, id).await?;
    if !VehicleRepo::delete(&mut tx, id).await? {
        return Err(not_found(id));
    }
    tx.commit().await?;

    tracing::info!(vehicle_id = id, favorites, "Vehicle deleted");
    Ok(response::ok((), "Vehiculo eliminado"))
}
