//! Character ("people") catalogue model and DTOs.

use holonet_core::links::Catalog;
use holonet_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::catalog::CatalogRecord;
use crate::models::patch;

/// A row from the `characters` table. Serialized with `uid` as the id key.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Character {
    #[serde(rename = "uid")]
    pub id: DbId,
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}

impl CatalogRecord for Character {
    const CATALOG: Catalog = Catalog::People;

    fn record_id(&self) -> DbId {
        self.id
    }
}

/// DTO for creating a character. Only `name` is required by the schema.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCharacter {
    pub name: Option<String>,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}

/// DTO for updating a character.
///
/// A missing key keeps the current value; `null` clears a nullable column.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCharacter {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub height: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub mass: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub hair_color: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub skin_color: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub eye_color: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub birth_year: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub gender: Option<Option<String>>,
}
