//! Follow edge model.

use holonet_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `followers` table: `follower_id` follows `following_id`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Follower {
    pub id: DbId,
    pub following_id: DbId,
    pub follower_id: DbId,
}
