//! Reference links embedded in catalogue payloads.
//!
//! People, planets and vehicles carry a `url` pointing back at their own
//! read endpoint. The path is built from the public API prefix, not from
//! wherever the router happens to be mounted.

use crate::types::DbId;

/// Public prefix under which every resource route is served.
pub const API_PREFIX: &str = "/api";

/// Catalogue collections that expose a self link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    People,
    Planets,
    Vehicles,
}

impl Catalog {
    /// Route segment of the collection, e.g. `"people"`.
    pub fn path_segment(self) -> &'static str {
        match self {
            Catalog::People => "people",
            Catalog::Planets => "planets",
            Catalog::Vehicles => "vehicles",
        }
    }

    /// Self link for the row `id`, e.g. `"/api/people/7"`.
    pub fn url(self, id: DbId) -> String {
        format!("{API_PREFIX}/{}/{id}", self.path_segment())
    }
}
