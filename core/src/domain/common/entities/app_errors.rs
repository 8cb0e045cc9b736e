use thiserror::Error;

/// Failures surfaced by the core. Malformed input never reaches this type
/// (the request boundary degrades it to defaults) and a missing entity is
/// `Ok(None)`, so the only variants are storage-level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Internal server error")]
    InternalServerError,

    #[error("Database connection failed")]
    DatabaseConnection,
}
