//! Media attachment model and DTOs.

use holonet_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Kind of media attached to a post. Maps to the `media_type` Postgres enum.
///
/// The labels are stored verbatim, including the capitalised `Image`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "media_type")]
pub enum MediaType {
    #[serde(rename = "Image")]
    #[sqlx(rename = "Image")]
    Image,
    #[serde(rename = "video")]
    #[sqlx(rename = "video")]
    Video,
    #[serde(rename = "audio")]
    #[sqlx(rename = "audio")]
    Audio,
}

/// A row from the `medias` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Media {
    pub id: DbId,
    pub media_type: MediaType,
    pub url: String,
    pub post_id: DbId,
}

/// DTO for attaching media to a post.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMedia {
    pub media_type: Option<MediaType>,
    pub url: Option<String>,
    pub post_id: Option<DbId>,
}

/// DTO for updating a media row. The owning post cannot change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMedia {
    pub media_type: Option<MediaType>,
    pub url: Option<String>,
}
