//! Repository for the `followers` table.

use holonet_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::follower::Follower;

const COLUMNS: &str = "id, following_id, follower_id";

/// Stores directed follow edges. Duplicate edges are permitted.
pub struct FollowerRepo;

impl FollowerRepo {
    /// List every follow edge ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Follower>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM followers ORDER BY id");
        sqlx::query_as::<_, Follower>(&query).fetch_all(pool).await
    }

    /// Record that `follower_id` follows `following_id`.
    pub async fn create(
        pool: &PgPool,
        following_id: DbId,
        follower_id: DbId,
    ) -> Result<Follower, sqlx::Error> {
        let query = format!(
            "INSERT INTO followers (following_id, follower_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Follower>(&query)
            .bind(following_id)
            .bind(follower_id)
            .fetch_one(pool)
            .await
    }

    /// Remove one matching edge, the oldest first.
    ///
    /// Returns `true` if an edge was removed.
    pub async fn delete_edge(
        pool: &PgPool,
        following_id: DbId,
        follower_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM followers WHERE id = (
                SELECT id FROM followers
                WHERE following_id = $1 AND follower_id = $2
                ORDER BY id
                LIMIT 1
             )",
        )
        .bind(following_id)
        .bind(follower_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every edge touching `user_id`, in either direction.
    pub async fn delete_by_user(
        conn: &mut PgConnection,
        user_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM followers WHERE following_id = $1 OR follower_id = $1")
                .bind(user_id)
                .execute(conn)
                .await?;
        Ok(result.rows_affected())
    }
}
