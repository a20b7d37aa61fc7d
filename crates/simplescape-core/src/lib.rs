//! Session orchestration for the `SimpleScape` simulation.
//!
//! This crate wraps the pure reducer from `simplescape-player` in a
//! long-running session: it owns the state, paces activity and prayer
//! ticks, and moves saves in and out of a key/value repository.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `simplescape-config.yaml` into
//!   strongly-typed structs.
//! - [`repository`] -- [`SaveRepository`] trait and [`MemoryRepository`].
//! - [`scheduler`] -- Game and prayer tick timers.
//! - [`session`] -- The single-owner session task and its handle.
//! - [`snapshot`] -- Save document encoding, decoding, and rehydration.
//!
//! [`SaveRepository`]: repository::SaveRepository
//! [`MemoryRepository`]: repository::MemoryRepository

pub mod config;
pub mod repository;
pub mod scheduler;
pub mod session;
pub mod snapshot;

pub use config::{ConfigError, SimplescapeConfig};
pub use repository::{MemoryRepository, RepositoryError, SaveKeys, SaveRepository};
pub use session::{Session, SessionError, SessionHandle};
pub use snapshot::SnapshotError;
