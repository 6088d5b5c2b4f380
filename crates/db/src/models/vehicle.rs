//! Vehicle catalogue model and DTOs.

use holonet_core::links::Catalog;
use holonet_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::catalog::CatalogRecord;
use crate::models::patch;

/// A row from the `vehicles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vehicle {
    pub id: DbId,
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub vehicle_class: String,
    pub cost_in_credits: Option<String>,
    pub length: Option<String>,
    pub max_atmosphering_speed: Option<String>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
    pub cargo_capacity: Option<String>,
    pub consumables: Option<String>,
}

impl CatalogRecord for Vehicle {
    const CATALOG: Catalog = Catalog::Vehicles;

    fn record_id(&self) -> DbId {
        self.id
    }
}

/// DTO for creating a vehicle.
///
/// The four identifying fields are checked by the handler before insert,
/// see [`holonet_core::vehicle::first_missing`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateVehicle {
    pub name: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub vehicle_class: Option<String>,
    pub cost_in_credits: Option<String>,
    pub length: Option<String>,
    pub max_atmosphering_speed: Option<String>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
    pub cargo_capacity: Option<String>,
    pub consumables: Option<String>,
}

impl CreateVehicle {
    /// Required values in check order: name, model, manufacturer, vehicle_class.
    pub fn required_values(&self) -> [Option<&str>; 4] {
        [
            self.name.as_deref(),
            self.model.as_deref(),
            self.manufacturer.as_deref(),
            self.vehicle_class.as_deref(),
        ]
    }
}

/// DTO for updating a vehicle.
///
/// A missing key keeps the current value; `null` clears a nullable column.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateVehicle {
    pub name: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub vehicle_class: Option<String>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub cost_in_credits: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub length: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub max_atmosphering_speed: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub crew: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub passengers: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub cargo_capacity: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub consumables: Option<Option<String>>,
}
