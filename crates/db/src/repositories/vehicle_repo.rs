//! Repository for the `vehicles` table.

use holonet_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::patch;
use crate::models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle};

const COLUMNS: &str = "id, name, model, manufacturer, vehicle_class, cost_in_credits, length, \
                       max_atmosphering_speed, crew, passengers, cargo_capacity, consumables";

/// Provides CRUD operations for catalogue vehicles.
pub struct VehicleRepo;

impl VehicleRepo {
    /// Insert a new vehicle. Callers check the required fields first.
    pub async fn create(pool: &PgPool, input: &CreateVehicle) -> Result<Vehicle, sqlx::Error> {
        let query = format!(
            "INSERT INTO vehicles
                (name, model, manufacturer, vehicle_class, cost_in_credits, length,
                 max_atmosphering_speed, crew, passengers, cargo_capacity, consumables)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(&input.name)
            .bind(&input.model)
            .bind(&input.manufacturer)
            .bind(&input.vehicle_class)
            .bind(&input.cost_in_credits)
            .bind(&input.length)
            .bind(&input.max_atmosphering_speed)
            .bind(&input.crew)
            .bind(&input.passengers)
            .bind(&input.cargo_capacity)
            .bind(&input.consumables)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles WHERE id = $1");
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles ORDER BY id");
        sqlx::query_as::<_, Vehicle>(&query).fetch_all(pool).await
    }

    /// Update a vehicle. Missing fields keep their value; an explicit `null`
    /// clears a nullable column.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVehicle,
    ) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!(
            "UPDATE vehicles SET
                name = COALESCE($2, name),
                model = COALESCE($3, model),
                manufacturer = COALESCE($4, manufacturer),
                vehicle_class = COALESCE($5, vehicle_class),
                cost_in_credits = CASE WHEN $6 THEN $7 ELSE cost_in_credits END,
                length = CASE WHEN $8 THEN $9 ELSE length END,
                max_atmosphering_speed = CASE WHEN $10 THEN $11 ELSE max_atmosphering_speed END,
                crew = CASE WHEN $12 THEN $13 ELSE crew END,
                passengers = CASE WHEN $14 THEN $15 ELSE passengers END,
                cargo_capacity = CASE WHEN $16 THEN $17 ELSE cargo_capacity END,
                consumables = CASE WHEN $18 THEN $19 ELSE consumables END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.model)
            .bind(&input.manufacturer)
            .bind(&input.vehicle_class)
            .bind(input.cost_in_credits.is_some())
            .bind(patch::value(&input.cost_in_credits))
            .bind(input.length.is_some())
            .bind(patch::value(&input.length))
            .bind(input.max_atmosphering_speed.is_some())
            .bind(patch::value(&input.max_atmosphering_speed))
            .bind(input.crew.is_some())
            .bind(patch::value(&input.crew))
            .bind(input.passengers.is_some())
            .bind(patch::value(&input.passengers))
            .bind(input.cargo_capacity.is_some())
            .bind(patch::value(&input.cargo_capacity))
            .bind(input.consumables.is_some())
            .bind(patch::value(&input.consumables))
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
