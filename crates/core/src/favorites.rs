//! View types for the per-user favorites summary.
//!
//! The summary is a denormalized read model: each join row is replaced by a
//! small `{uid, name, url}` card for the entity it points at.

use serde::Serialize;

use crate::links::Catalog;
use crate::types::DbId;

/// One resolved favorite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteItem {
    pub uid: DbId,
    pub name: String,
    pub url: String,
}

impl FavoriteItem {
    pub fn new(catalog: Catalog, uid: DbId, name: impl Into<String>) -> Self {
        Self {
            uid,
            name: name.into(),
            url: catalog.url(uid),
        }
    }
}

/// All favorites of one user, grouped by catalogue.
///
/// `Default` is the empty summary returned for users that do not exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserFavorites {
    pub people: Vec<FavoriteItem>,
    pub planets: Vec<FavoriteItem>,
    pub vehicles: Vec<FavoriteItem>,
}

/// Resolve favorite targets in join-row order, dropping dangling ones.
///
/// `resolved` pairs each target id with its display name when the target
/// still exists, or `None` when the join row points at a deleted row.
pub fn collect_items<I>(catalog: Catalog, resolved: I) -> Vec<FavoriteItem>
where
    I: IntoIterator<Item = (DbId, Option<String>)>,
{
    resolved
        .into_iter()
        .filter_map(|(id, name)| name.map(|name| FavoriteItem::new(catalog, id, name)))
        .collect()
}
