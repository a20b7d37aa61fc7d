//! Error types for the storage layer.
//!
//! All errors are propagated via [`DbError`] which wraps the underlying
//! [`fred`] and I/O errors. At the [`SaveRepository`] boundary they are
//! flattened into a [`RepositoryError`].
//!
//! [`SaveRepository`]: simplescape_core::SaveRepository

use simplescape_core::RepositoryError;

/// Errors that can occur in the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A `Dragonfly`/Redis operation failed.
    #[error("Dragonfly error: {0}")]
    Dragonfly(#[from] fred::error::Error),

    /// A filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A key cannot be used as a file name.
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<DbError> for RepositoryError {
    fn from(err: DbError) -> Self {
        Self::Backend {
            message: err.to_string(),
        }
    }
}
