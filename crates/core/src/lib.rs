//! Holonet domain core.
//!
//! Pure logic shared by the database and HTTP layers: identifier and
//! timestamp aliases, the domain error type, resource links, favorites
//! view types, and request rules. Nothing in here touches the database.

pub mod error;
pub mod favorites;
pub mod links;
pub mod types;
pub mod vehicle;
