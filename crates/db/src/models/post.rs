//! Post entity model and DTOs.

use holonet_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub body: String,
    pub date: Timestamp,
    pub image_url: String,
    pub user_id: DbId,
}

/// DTO for creating a new post. `date` is always assigned by the database.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePost {
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
    pub image_url: Option<String>,
    pub user_id: Option<DbId>,
}

/// DTO for updating an existing post. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePost {
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
    pub image_url: Option<String>,
}
