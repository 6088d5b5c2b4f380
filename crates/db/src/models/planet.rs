//! Planet catalogue model and DTOs.

use holonet_core::links::Catalog;
use holonet_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::catalog::CatalogRecord;
use crate::models::patch;

/// A row from the `planets` table. Serialized with `uid` as the id key.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Planet {
    #[serde(rename = "uid")]
    pub id: DbId,
    pub name: String,
    pub diameter: Option<String>,
    pub rotation_period: Option<String>,
    pub orbital_period: Option<String>,
    pub gravity: Option<String>,
    pub population: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
}

impl CatalogRecord for Planet {
    const CATALOG: Catalog = Catalog::Planets;

    fn record_id(&self) -> DbId {
        self.id
    }
}

/// DTO for creating a planet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePlanet {
    pub name: Option<String>,
    pub diameter: Option<String>,
    pub rotation_period: Option<String>,
    pub orbital_period: Option<String>,
    pub gravity: Option<String>,
    pub population: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
}

/// DTO for updating a planet.
///
/// A missing key keeps the current value; `null` clears a nullable column.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePlanet {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub diameter: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub rotation_period: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub orbital_period: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub gravity: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub population: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub climate: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub terrain: Option<Option<String>>,
}
