//! Handlers for the `/medias` resource.

use axum::extract::State;
use holonet_core::error::CoreError;
use holonet_core::types::DbId;
use holonet_db::models::media::{CreateMedia, Media, UpdateMedia};
use holonet_db::repositories::MediaRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::{self, Reply};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Media", id })
}

/// GET /api/medias
pub async fn list(State(state): State<AppState>) -> AppResult<Reply<Vec<Media>>> {
    let medias = MediaRepo::list(&state.pool).await?;
    Ok(response::ok(medias, "Listado de Medios"))
}

/// POST /api/medias
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateMedia>,
) -> AppResult<Reply<Media>> {
    let media = MediaRepo::create(&state.pool, &input).await?;
    Ok(response::created(media, "Medio creado"))
}

/// GET /api/medias/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Reply<Media>> {
    let media = MediaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(response::ok(media, "Medio encontrado"))
}

/// PUT /api/medias/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateMedia>,
) -> AppResult<Reply<Media>> {
    let media = MediaRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(response::ok(media, "Medio actualizado"))
}

/// DELETE /api/medias/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Reply<()>> {
    if !MediaRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    Ok(response::ok((), "Medio eliminado"))
}
