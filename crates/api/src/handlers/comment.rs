//! Handlers for the `/comments` resource.

use axum::extract::State;
use holonet_core::error::CoreError;
use holonet_core::types::DbId;
use holonet_db::models::comment::{Comment, CreateComment};
use holonet_db::repositories::{CommentRepo, PostRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::handlers::post::ensure_user_exists;
use crate::response::{self, Reply};
use crate::state::AppState;

/// GET /api/comments
pub async fn list(State(state): State<AppState>) -> AppResult<Reply<Vec<Comment>>> {
    let comments = CommentRepo::list(&state.pool).await?;
    Ok(response::ok(comments, "Listado de Comentarios"))
}

/// POST /api/comments
///
/// Both the author and the post must exist; a missing one is reported as
/// `User not found` / `Post not found` with a 500 status.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateComment>,
) -> AppResult<Reply<Comment>> {
    ensure_user_exists(&state, input.user_id).await?;

    let post_found = match input.post_id {
        Some(id) => PostRepo::find_by_id(&state.pool, id).await?.is_some(),
        None => false,
    };
    if !post_found {
        return Err(CoreError::MissingReference {
            entity: "Post",
            id: input.post_id,
        }
        .into());
    }

    let comment = CommentRepo::create(&state.pool, &input).await?;
    tracing::info!(comment_id = comment.id, post_id = comment.post_id, "Comment created");
    Ok(response::created(comment, "Comentario creado"))
}

/// DELETE /api/comments/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Reply<()>> {
    if !CommentRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }));
    }
    Ok(response::ok((), "Comentario eliminado"))
}
