//! Favorite join rows: one table per catalogue.

use holonet_core::links::Catalog;
use holonet_core::types::DbId;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::FromRow;

/// Static description of a favorites join table.
///
/// Lets [`crate::repositories::FavoriteRepo`] serve all three tables with
/// one implementation.
pub trait FavoriteTable: for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin {
    /// Join table name.
    const TABLE: &'static str;
    /// Column holding the favorited row's id.
    const TARGET_COLUMN: &'static str;
    /// Table the target column references.
    const TARGET_TABLE: &'static str;
    const CATALOG: Catalog;
    /// Singular noun used in client-facing messages.
    const NOUN: &'static str;

    fn target_id(&self) -> DbId;
}

/// A row from `character_favorites`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CharacterFavorite {
    pub id: DbId,
    pub user_id: DbId,
    pub character_id: DbId,
}

impl FavoriteTable for CharacterFavorite {
    const TABLE: &'static str = "character_favorites";
    const TARGET_COLUMN: &'static str = "character_id";
    const TARGET_TABLE: &'static str = "characters";
    const CATALOG: Catalog = Catalog::People;
    const NOUN: &'static str = "character";

    fn target_id(&self) -> DbId {
        self.character_id
    }
}

/// A row from `planet_favorites`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlanetFavorite {
    pub id: DbId,
    pub user_id: DbId,
    pub planet_id: DbId,
}

impl FavoriteTable for PlanetFavorite {
    const TABLE: &'static str = "planet_favorites";
    const TARGET_COLUMN: &'static str = "planet_id";
    const TARGET_TABLE: &'static str = "planets";
    const CATALOG: Catalog = Catalog::Planets;
    const NOUN: &'static str = "planet";

    fn target_id(&self) -> DbId {
        self.planet_id
    }
}

/// A row from `vehicle_favorites`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VehicleFavorite {
    pub id: DbId,
    pub user_id: DbId,
    pub vehicle_id: DbId,
}

impl FavoriteTable for VehicleFavorite {
    const TABLE: &'static str = "vehicle_favorites";
    const TARGET_COLUMN: &'static str = "vehicle_id";
    const TARGET_TABLE: &'static str = "vehicles";
    const CATALOG: Catalog = Catalog::Vehicles;
    const NOUN: &'static str = "vehicle";

    fn target_id(&self) -> DbId {
        self.vehicle_id
    }
}
