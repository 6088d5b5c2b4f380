//! Handlers for the `/users` resource.

use axum::extract::State;
use holonet_core::error::CoreError;
use holonet_core::types::DbId;
use holonet_db::models::favorite::{CharacterFavorite, PlanetFavorite, VehicleFavorite};
use holonet_db::models::user::{CreateUser, UpdateUser, User, UserInput};
use holonet_db::repositories::{
    CommentRepo, FavoriteRepo, FollowerRepo, MediaRepo, PostRepo, UserRepo,
};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::password::hash_optional;
use crate::response::{self, Reply};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "User", id })
}

/// GET /api/users
pub async fn list(State(state): State<AppState>) -> AppResult<Reply<Vec<User>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(response::ok(users, "Listado de Usuarios"))
}

/// POST /api/users
///
/// The plaintext password is hashed before it reaches the store.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<UserInput>,
) -> AppResult<Reply<User>> {
    let create = CreateUser {
        password_hash: hash_optional(input.password.as_deref())?,
        email: input.email,
        is_active: input.is_active,
        first_name: input.first_name.flatten(),
        last_name: input.last_name.flatten(),
    };
    let user = UserRepo::create(&state.pool, &create).await?;
    tracing::info!(user_id = user.id, "User created");
    Ok(response::created(user, "Usuario creado"))
}

/// GET /api/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Reply<User>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(response::ok(user, "Perfil del usuario"))
}

/// PUT /api/users/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UserInput>,
) -> AppResult<Reply<User>> {
    let update = UpdateUser {
        password_hash: hash_optional(input.password.as_deref())?,
        email: input.email,
        is_active: input.is_active,
        first_name: input.first_name,
        last_name: input.last_name,
    };
    let user = UserRepo::update(&state.pool, id, &update)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(response::ok(user, "Usuario actualizado"))
}

/// DELETE /api/users/{id}
///
/// Removes everything that references the user in one transaction:
/// favorites, follow edges in both directions, the user's comments, the
/// comments and media on the user's posts, the posts, then the user.
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Reply<()>> {
    let mut tx = state.pool.begin().await?;

    let favorites = FavoriteRepo::delete_by_user::<CharacterFavorite>(&mut tx, id).await?
        + FavoriteRepo::delete_by_user::<PlanetFavorite>(&mut tx, id).await?
        + FavoriteRepo::delete_by_user::<VehicleFavorite>(&mut tx, id).await?;
    let follows = FollowerRepo::delete_by_user(&mut tx, id).await?;
    let comments = CommentRepo::delete_by_user(&mut tx, id).await?
        + CommentRepo::delete_by_post_author(&mut tx, id).await?;
    let medias = MediaRepo::delete_by_post_author(&mut tx, id).await?;
    let posts = PostRepo::delete_by_user(&mut tx, id).await?;

    if !UserRepo::delete(&mut tx, id).await? {
        return Err(not_found(id));
    }
    tx.commit().await?;

    tracing::info!(
        user_id = id,
        favorites,
        follows,
        comments,
        medias,
        posts,
        "User deleted with owned rows",
    );
    Ok(response::ok((), "Usuario eliminado"))
}
