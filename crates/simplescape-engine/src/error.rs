//! Error types for the engine binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during engine startup and the command loop.

/// Top-level error for the engine binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: simplescape_core::ConfigError,
    },

    /// A storage backend could not be opened.
    #[error("storage error: {source}")]
    Storage {
        /// The underlying storage error.
        #[from]
        source: simplescape_db::DbError,
    },

    /// The session stopped while the driver was still using it.
    #[error("session error: {source}")]
    Session {
        /// The underlying session error.
        #[from]
        source: simplescape_core::SessionError,
    },

    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// State could not be rendered as JSON.
    #[error("JSON error: {source}")]
    Json {
        /// The underlying serialization error.
        #[from]
        source: serde_json::Error,
    },

    /// A background task panicked or was cancelled.
    #[error("task error: {message}")]
    Task {
        /// Description of the task failure.
        message: String,
    },
}
