use crate::types::DbId;

/// Domain-level errors raised by handlers and business rules.
///
/// The `Display` text of `NotFound` and `MissingReference` is exactly the
/// message returned to API clients, e.g. `"Person not found"`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The addressed row does not exist.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A row referenced from a request body does not exist.
    ///
    /// Reported with a server-error status rather than 404; clients of the
    /// post and comment endpoints rely on that.
    #[error("{entity} not found")]
    MissingReference {
        entity: &'static str,
        id: Option<DbId>,
    },

    #[error("{0}")]
    Validation(String),
}
