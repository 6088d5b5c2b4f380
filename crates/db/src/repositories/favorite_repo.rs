//! Repository for the three favorites join tables.
//!
//! Every method is generic over [`FavoriteTable`]; pick the table with a
//! turbofish, e.g. `FavoriteRepo::list_by_user::<PlanetFavorite>(&pool, 1)`.

use std::collections::HashMap;

use holonet_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::favorite::FavoriteTable;

/// Provides add/remove/list operations for favorites.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Find the favorite linking `user_id` to `target_id`, if any.
    pub async fn find<F: FavoriteTable>(
        pool: &PgPool,
        user_id: DbId,
        target_id: DbId,
    ) -> Result<Option<F>, sqlx::Error> {
        let query = format!(
            "SELECT id, user_id, {col} FROM {table} WHERE user_id = $1 AND {col} = $2",
            col = F::TARGET_COLUMN,
            table = F::TABLE,
        );
        sqlx::query_as::<_, F>(&query)
            .bind(user_id)
            .bind(target_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a favorite, returning the created row.
    pub async fn create<F: FavoriteTable>(
        pool: &PgPool,
        user_id: DbId,
        target_id: DbId,
    ) -> Result<F, sqlx::Error> {
        let query = format!(
            "INSERT INTO {table} (user_id, {col}) VALUES ($1, $2)
             RETURNING id, user_id, {col}",
            col = F::TARGET_COLUMN,
            table = F::TABLE,
        );
        sqlx::query_as::<_, F>(&query)
            .bind(user_id)
            .bind(target_id)
            .fetch_one(pool)
            .await
    }

    /// Delete the favorite linking `user_id` to `target_id`.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete_pair<F: FavoriteTable>(
        pool: &PgPool,
        user_id: DbId,
        target_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "DELETE FROM {} WHERE user_id = $1 AND {} = $2",
            F::TABLE,
            F::TARGET_COLUMN,
        );
        let result = sqlx::query(&query)
            .bind(user_id)
            .bind(target_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List a user's favorites in insertion (ID) order.
    pub async fn list_by_user<F: FavoriteTable>(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<F>, sqlx::Error> {
        let query = format!(
            "SELECT id, user_id, {col} FROM {table} WHERE user_id = $1 ORDER BY id",
            col = F::TARGET_COLUMN,
            table = F::TABLE,
        );
        sqlx::query_as::<_, F>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Delete every favorite owned by `user_id`.
    pub async fn delete_by_user<F: FavoriteTable>(
        conn: &mut PgConnection,
        user_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE user_id = $1", F::TABLE);
        let result = sqlx::query(&query).bind(user_id).execute(conn).await?;
        Ok(result.rows_affected())
    }

    /// Delete every favorite pointing at `target_id`.
    pub async fn delete_by_target<F: FavoriteTable>(
        conn: &mut PgConnection,
        target_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE {} = $1", F::TABLE, F::TARGET_COLUMN);
        let result = sqlx::query(&query).bind(target_id).execute(conn).await?;
        Ok(result.rows_affected())
    }

    /// Look up display names for a batch of target IDs.
    ///
    /// IDs with no matching row are simply absent from the returned map.
    pub async fn target_names<F: FavoriteTable>(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<HashMap<DbId, String>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let query = format!("SELECT id, name FROM {} WHERE id = ANY($1)", F::TARGET_TABLE);
        let rows = sqlx::query_as::<_, (DbId, String)>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().collect())
    }
}
