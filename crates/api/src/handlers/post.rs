//! Handlers for the `/posts` resource.

use axum::extract::State;
use holonet_core::error::CoreError;
use holonet_core::types::DbId;
use holonet_db::models::post::{CreatePost, Post, UpdatePost};
use holonet_db::repositories::{CommentRepo, MediaRepo, PostRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::{self, Reply};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Post", id })
}

/// GET /api/posts
pub async fn list(State(state): State<AppState>) -> AppResult<Reply<Vec<Post>>> {
    let posts = PostRepo::list(&state.pool).await?;
    Ok(response::ok(posts, "Listado de Posts"))
}

/// POST /api/posts
///
/// The author must exist. An unknown `user_id` is reported as
/// `User not found` with a 500 status, which existing clients expect.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreatePost>,
) -> AppResult<Reply<Post>> {
    ensure_user_exists(&state, input.user_id).await?;
    let post = PostRepo::create(&state.pool, &input).await?;
    tracing::info!(post_id = post.id, user_id = post.user_id, "Post created");
    Ok(response::created(post, "Post creado"))
}

/// GET /api/posts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Reply<Post>> {
    let post = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(response::ok(post, "Contenido del post"))
}

/// PUT /api/posts/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdatePost>,
) -> AppResult<Reply<Post>> {
    let post = PostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(response::ok(post, "Post actualizado"))
}

/// DELETE /api/posts/{id}
///
/// Comments and media attached to the post go with it.
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Reply<()>> {
    let mut tx = state.pool.begin().await?;
    let comments = CommentRepo::delete_by_post(&mut tx, id).await?;
    let medias = MediaRepo::delete_by_post(&mut tx, id).await?;
    if !PostRepo::delete(&mut tx, id).await? {
        return Err(not_found(id));
    }
    tx.commit().await?;

    tracing::info!(post_id = id, comments, medias, "Post deleted");
    Ok(response::ok((), "Post eliminado"))
}

/// Fail with [`CoreError::MissingReference`] unless `user_id` names a user.
pub(crate) async fn ensure_user_exists(state: &AppState, user_id: Option<DbId>) -> AppResult<()> {
    let found = match user_id {
        Some(id) => UserRepo::find_by_id(&state.pool, id).await?.is_some(),
        None => false,
    };
    if found {
        Ok(())
    } else {
        Err(CoreError::MissingReference {
            entity: "User",
            id: user_id,
        }
        .into())
    }
}
