//! Repository for the `medias` table.

use holonet_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::media::{CreateMedia, Media, UpdateMedia};

const COLUMNS: &str = "id, media_type, url, post_id";

/// Provides CRUD operations for media attachments.
pub struct MediaRepo;

impl MediaRepo {
    pub async fn create(pool: &PgPool, input: &CreateMedia) -> Result<Media, sqlx::Error> {
        let query = format!(
            "INSERT INTO medias (media_type, url, post_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(input.media_type)
            .bind(&input.url)
            .bind(input.post_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Media>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM medias WHERE id = $1");
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Media>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM medias ORDER BY id");
        sqlx::query_as::<_, Media>(&query).fetch_all(pool).await
    }

    /// Update a media row. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMedia,
    ) -> Result<Option<Media>, sqlx::Error> {
        let query = format!(
            "UPDATE medias SET
                media_type = COALESCE($2, media_type),
                url = COALESCE($3, url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .bind(input.media_type)
            .bind(&input.url)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM medias WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every media row attached to `post_id`.
    pub async fn delete_by_post(
        conn: &mut PgConnection,
        post_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM medias WHERE post_id = $1")
            .bind(post_id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete every media row attached to a post written by `user_id`.
    pub async fn delete_by_post_author(
        conn: &mut PgConnection,
        user_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM medias
             WHERE post_id IN (SELECT id FROM posts WHERE user_id = $1)",
        )
        .bind(user_id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }
}
