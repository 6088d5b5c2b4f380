//! Handlers for the `/people` resource (catalogue characters).
//!
//! Rows are returned with `uid` as the id key and a `url` self link.

use axum::extract::State;
use holonet_core::error::CoreError;
use holonet_core::types::DbId;
use holonet_db::models::catalog::{link_all, Linked};
use holonet_db::models::character::{Character, CreateCharacter, UpdateCharacter};
use holonet_db::models::favorite::CharacterFavorite;
use holonet_db::repositories::{CharacterRepo, FavoriteRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::{self, Reply};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Person",
        id,
    })
}

/// GET /api/people
pub async fn list(State(state): State<AppState>) -> AppResult<Reply<Vec<Linked<Character>>>> {
    let people = CharacterRepo::list(&state.pool).await?;
    Ok(response::ok(link_all(people), "Listado de Personajes"))
}

/// POST /api/people
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateCharacter>,
) -> AppResult<Reply<Linked<Character>>> {
    let person = CharacterRepo::create(&state.pool, &input).await?;
    Ok(response::created(person.into(), "Personaje creado"))
}

/// GET /api/people/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Reply<Linked<Character>>> {
    let person = CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(response::ok(person.into(), "Personaje encontrado"))
}

/// PUT /api/people/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateCharacter>,
) -> AppResult<Reply<Linked<Character>>> {
    let person = CharacterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(response::ok(person.into(), "Personaje actualizado"))
}

/// DELETE /api/people/{id}
///
/// Favorites pointing at the character are removed first.
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Reply<()>> {
    let mut tx = state.pool.begin().await?;
    let favorites = FavoriteRepo::delete_by_target::<CharacterFavorite>(&mut tx, id).await?;
    if !CharacterRepo::delete(&mut tx, id).await? {
        return Err(not_found(id));
    }
    tx.commit().await?;

    tracing::info!(character_id = id, favorites, "Character deleted");
    Ok(response::ok((), "Personaje eliminado"))
}
