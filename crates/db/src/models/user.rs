//! User entity model and DTOs.

use holonet_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::patch;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: bool,
}

/// DTO for creating a new user. The password arrives already hashed.
#[derive(Debug, Clone, Default)]
pub struct CreateUser {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    /// Defaults to `true` if omitted.
    pub is_active: Option<bool>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// DTO for updating an existing user.
///
/// Names follow the [`patch`] convention: `Some(None)` clears them.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub is_active: Option<bool>,
    pub first_name: Option<Option<String>>,
    pub last_name: Option<Option<String>>,
}

/// Request body accepted by user create and update endpoints.
///
/// Carries the plaintext password; the handler hashes it before building
/// a [`CreateUser`] or [`UpdateUser`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserInput {
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub first_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub last_name: Option<Option<String>>,
}
