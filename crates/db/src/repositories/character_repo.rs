//! Repository for the `characters` table.

use holonet_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::character::{Character, CreateCharacter, UpdateCharacter};
use crate::models::patch;

const COLUMNS: &str =
    "id, name, height, mass, hair_color, skin_color, eye_color, birth_year, gender";

/// Provides CRUD operations for catalogue characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCharacter) -> Result<Character, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters
                (name, height, mass, hair_color, skin_color, eye_color, birth_year, gender)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(&input.name)
            .bind(&input.height)
            .bind(&input.mass)
            .bind(&input.hair_color)
            .bind(&input.skin_color)
            .bind(&input.eye_color)
            .bind(&input.birth_year)
            .bind(&input.gender)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all characters ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters ORDER BY id");
        sqlx::query_as::<_, Character>(&query).fetch_all(pool).await
    }

    /// Update a character. Missing fields keep their value; an explicit `null`
    /// clears a nullable column.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCharacter,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!(
            "UPDATE characters SET
                name = COALESCE($2, name),
                height = CASE WHEN $3 THEN $4 ELSE height END,
                mass = CASE WHEN $5 THEN $6 ELSE mass END,
                hair_color = CASE WHEN $7 THEN $8 ELSE hair_color END,
                skin_color = CASE WHEN $9 THEN $10 ELSE skin_color END,
                eye_color = CASE WHEN $11 THEN $12 ELSE eye_color END,
                birth_year = CASE WHEN $13 THEN $14 ELSE birth_year END,
                gender = CASE WHEN $15 THEN $16 ELSE gender END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.height.is_some())
            .bind(patch::value(&input.height))
            .bind(input.mass.is_some())
            .bind(patch::value(&input.mass))
            .bind(input.hair_color.is_some())
            .bind(patch::value(&input.hair_color))
            .bind(input.skin_color.is_some())
            .bind(patch::value(&input.skin_color))
            .bind(input.eye_color.is_some())
            .bind(patch::value(&input.eye_color))
            .bind(input.birth_year.is_some())
            .bind(patch::value(&input.birth_year))
            .bind(input.gender.is_some())
            .bind(patch::value(&input.gender))
            .fetch_optional(pool)
            .await
    }

    /// Delete a character. Favorites pointing at it must already be gone.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
