//! Comment entity model and DTOs.

use holonet_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub body: String,
    pub user_id: DbId,
    pub post_id: DbId,
}

/// DTO for creating a new comment. Comments are never edited.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateComment {
    pub body: Option<String>,
    pub user_id: Option<DbId>,
    pub post_id: Option<DbId>,
}
