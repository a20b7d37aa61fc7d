//! Save storage backends for the `SimpleScape` simulation.
//!
//! Both backends implement [`SaveRepository`] so the session can be wired
//! to either one from configuration.
//!
//! # Modules
//!
//! - [`dragonfly`] -- `Dragonfly` (Redis-compatible) key/value store
//! - [`file`] -- One file per key in a local directory
//! - [`error`] -- Shared error types
//!
//! [`SaveRepository`]: simplescape_core::SaveRepository

pub mod dragonfly;
pub mod error;
pub mod file;

// Re-export primary types for convenience.
pub use dragonfly::DragonflyStore;
pub use error::DbError;
pub use file::FileStore;
