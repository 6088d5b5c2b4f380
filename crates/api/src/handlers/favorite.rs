//! Handlers for favorites: add/remove per catalogue, and the per-user
//! summary served at `/users/favorites`.
//!
//! Add and remove are generic over the join table; the router mounts one
//! instantiation per catalogue, e.g. `add::<PlanetFavorite>`.

use axum::extract::State;
use holonet_core::error::CoreError;
use holonet_core::favorites::{collect_items, FavoriteItem, UserFavorites};
use holonet_core::types::DbId;
use holonet_db::models::favorite::{
    CharacterFavorite, FavoriteTable, PlanetFavorite, VehicleFavorite,
};
use holonet_db::repositories::{FavoriteRepo, UserRepo};
use holonet_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::ApiPath;
use crate::middleware::current_user::CurrentUser;
use crate::response::{self, Reply};
use crate::state::AppState;

/// POST /api/favorite/{people|planet|vehicle}/{id}
pub async fn add<F: FavoriteTable>(
    State(state): State<AppState>,
    current: CurrentUser,
    ApiPath(target_id): ApiPath<DbId>,
) -> AppResult<Reply<F>> {
    if FavoriteRepo::find::<F>(&state.pool, current.user_id, target_id)
        .await?
        .is_some()
    {
        let message = format!("This {} is already a favorite", F::NOUN);
        return Err(CoreError::Validation(message).into());
    }

    let favorite = FavoriteRepo::create::<F>(&state.pool, current.user_id, target_id).await?;
    tracing::info!(
        user_id = current.user_id,
        target_id,
        table = F::TABLE,
        "Favorite added",
    );
    Ok(response::created(favorite, "Favorito añadido"))
}

/// DELETE /api/favorite/{people|planet|vehicle}/{id}
pub async fn remove<F: FavoriteTable>(
    State(state): State<AppState>,
    current: CurrentUser,
    ApiPath(target_id): ApiPath<DbId>,
) -> AppResult<Reply<()>> {
    if !FavoriteRepo::delete_pair::<F>(&state.pool, current.user_id, target_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Favorite",
            id: target_id,
        }));
    }
    Ok(response::ok((), "Favorito eliminado"))
}

/// GET /api/users/favorites
///
/// Reads the three join tables concurrently and replaces each row with a
/// `{uid, name, url}` card. Rows whose target no longer exists are skipped.
/// A user that does not exist gets three empty lists.
pub async fn summary(
    State(state): State<AppState>,
    current: CurrentUser,
) -> AppResult<Reply<UserFavorites>> {
    let message = "Favoritos del usuario";
    let user_id = current.user_id;

    if UserRepo::find_by_id(&state.pool, user_id).await?.is_none() {
        tracing::debug!(user_id, "Favorites requested for unknown user");
        return Ok(response::ok(UserFavorites::default(), message));
    }

    let pool = &state.pool;
    let (people, planets, vehicles) = tokio::try_join!(
        resolve::<CharacterFavorite>(pool, user_id),
        resolve::<PlanetFavorite>(pool, user_id),
        resolve::<VehicleFavorite>(pool, user_id),
    )?;

    Ok(response::ok(
        UserFavorites {
            people,
            planets,
            vehicles,
        },
        message,
    ))
}

/// Load one join table for `user_id` and resolve every row to a card.
async fn resolve<F: FavoriteTable>(
    pool: &DbPool,
    user_id: DbId,
) -> Result<Vec<FavoriteItem>, sqlx::Error> {
    let rows = FavoriteRepo::list_by_user::<F>(pool, user_id).await?;
    let target_ids: Vec<DbId> = rows.iter().map(F::target_id).collect();
    let mut names = FavoriteRepo::target_names::<F>(pool, &target_ids).await?;

    let resolved = target_ids.into_iter().map(|id| {
        let name = names.remove(&id);
        if name.is_none() {
            tracing::warn!(
                user_id,
                target_id = id,
                table = F::TABLE,
                "Dangling favorite skipped",
            );
        }
        (id, name)
    });
    Ok(collect_items(F::CATALOG, resolved))
}
