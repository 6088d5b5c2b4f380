//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for partial updates;
//!   nullable columns use [`patch::nullable`] so `null` clears them
//!
//! Create DTOs keep every column optional so that a missing value reaches
//! the database and is rejected there, exactly like any other constraint.

pub mod catalog;
pub mod character;
pub mod comment;
pub mod favorite;
pub mod follower;
pub mod media;
pub mod patch;
pub mod planet;
pub mod post;
pub mod user;
pub mod vehicle;
