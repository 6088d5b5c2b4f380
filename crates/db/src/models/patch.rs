//! Partial-update helpers for nullable columns.
//!
//! A nullable column is patched through `Option<Option<T>>`: a missing key
//! is `None` and leaves the column alone, an explicit `null` is `Some(None)`
//! and clears it.

use serde::{Deserialize, Deserializer};

/// Deserializer for `Option<Option<T>>` patch fields.
///
/// Pair with `#[serde(default)]` so a missing key stays `None`.
pub fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Value to write for a patch field; `None` when absent or cleared.
pub fn value(field: &Option<Option<String>>) -> Option<&str> {
    field.as_ref().and_then(|v| v.as_deref())
}
