//! Handlers for the `/followers` resource.
//!
//! Follow edges are created and removed on behalf of the [`CurrentUser`].

use axum::extract::State;
use holonet_core::error::CoreError;
use holonet_core::types::DbId;
use holonet_db::models::follower::Follower;
use holonet_db::repositories::FollowerRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ApiPath;
use crate::middleware::current_user::CurrentUser;
use crate::response::{self, Reply};
use crate::state::AppState;

/// GET /api/followers
pub async fn list(State(state): State<AppState>) -> AppResult<Reply<Vec<Follower>>> {
    let edges = FollowerRepo::list(&state.pool).await?;
    Ok(response::ok(edges, "Listado de Seguidores"))
}

/// POST /api/followers/{id}
///
/// The current user follows `{id}`. Repeated follows add repeated edges.
pub async fn follow(
    State(state): State<AppState>,
    current: CurrentUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Reply<Follower>> {
    let edge = FollowerRepo::create(&state.pool, id, current.user_id).await?;
    tracing::info!(follower_id = current.user_id, following_id = id, "Follow added");
    Ok(response::created(edge, "Ahora sigues al usuario"))
}

/// DELETE /api/followers/{id}
///
/// Removes one edge from the current user to `{id}`.
pub async fn unfollow(
    State(state): State<AppState>,
    current: CurrentUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Reply<()>> {
    if !FollowerRepo::delete_edge(&state.pool, id, current.user_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Follow relationship",
            id,
        }));
    }
    Ok(response::ok((), "Has dejado de seguir al usuario"))
}
