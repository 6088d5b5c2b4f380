//! Shared serialization for catalogue rows (people, planets, vehicles).

use holonet_core::links::Catalog;
use holonet_core::types::DbId;
use serde::Serialize;

/// A catalogue row that carries a self link when serialized.
pub trait CatalogRecord {
    const CATALOG: Catalog;

    fn record_id(&self) -> DbId;
}

/// A catalogue row serialized together with its self link.
///
/// ```text
/// { "uid": 1, "name": "Luke", ..., "url": "/api/people/1" }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Linked<T: Serialize> {
    #[serde(flatten)]
    pub record: T,
    pub url: String,
}

impl<T: CatalogRecord + Serialize> From<T> for Linked<T> {
    fn from(record: T) -> Self {
        let url = T::CATALOG.url(record.record_id());
        Self { record, url }
    }
}

/// Attach self links to a list of rows.
pub fn link_all<T: CatalogRecord + Serialize>(records: Vec<T>) -> Vec<Linked<T>> {
    records.into_iter().map(Linked::from).collect()
}
