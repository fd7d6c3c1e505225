//! Domain error types

use thiserror::Error;

/// Errors produced by [crate::domain::ports::RecordStore] implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint was violated (duplicate favorite pair).
    #[error("duplicate record")]
    Conflict,

    /// Any other persistence failure. Surfaced to clients as an opaque 500.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Other(err.into())
    }
}
