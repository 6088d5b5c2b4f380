//! Repository for the `planets` table.

use holonet_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::patch;
use crate::models::planet::{CreatePlanet, Planet, UpdatePlanet};

const COLUMNS: &str = "id, name, diameter, rotation_period, orbital_period, gravity, \
                       population, climate, terrain";

/// Provides CRUD operations for catalogue planets.
pub struct PlanetRepo;

impl PlanetRepo {
    pub async fn create(pool: &PgPool, input: &CreatePlanet) -> Result<Planet, sqlx::Error> {
        let query = format!(
            "INSERT INTO planets
                (name, diameter, rotation_period, orbital_period, gravity,
                 population, climate, terrain)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Planet>(&query)
            .bind(&input.name)
            .bind(&input.diameter)
            .bind(&input.rotation_period)
            .bind(&input.orbital_period)
            .bind(&input.gravity)
            .bind(&input.population)
            .bind(&input.climate)
            .bind(&input.terrain)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets WHERE id = $1");
        sqlx::query_as::<_, Planet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets ORDER BY id");
        sqlx::query_as::<_, Planet>(&query).fetch_all(pool).await
    }

    /// Update a planet. Missing fields keep their value; an explicit `null`
    /// clears a nullable column.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePlanet,
    ) -> Result<Option<Planet>, sqlx::Error> {
        let query = format!(
            "UPDATE planets SET
                name = COALESCE($2, name),
                diameter = CASE WHEN $3 THEN $4 ELSE diameter END,
                rotation_period = CASE WHEN $5 THEN $6 ELSE rotation_period END,
                orbital_period = CASE WHEN $7 THEN $8 ELSE orbital_period END,
                gravity = CASE WHEN $9 THEN $10 ELSE gravity END,
                population = CASE WHEN $11 THEN $12 ELSE population END,
                climate = CASE WHEN $13 THEN $14 ELSE climate END,
                terrain = CASE WHEN $15 THEN $16 ELSE terrain END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Planet>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.diameter.is_some())
            .bind(patch::value(&input.diameter))
            .bind(input.rotation_period.is_some())
            .bind(patch::value(&input.rotation_period))
            .bind(input.orbital_period.is_some())
            .bind(patch::value(&input.orbital_period))
            .bind(input.gravity.is_some())
            .bind(patch::value(&input.gravity))
            .bind(input.population.is_some())
            .bind(patch::value(&input.population))
            .bind(input.climate.is_some())
            .bind(patch::value(&input.climate))
            .bind(input.terrain.is_some())
            .bind(patch::value(&input.terrain))
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM planets WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
