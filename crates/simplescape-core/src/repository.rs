//! The save repository seam.
//!
//! A [`SaveRepository`] is a plain key/value blob store exposing get, set,
//! and remove by name. The session stores the player and the shop stock as
//! two JSON documents under the keys from [`SaveKeys`]. Backends live in
//! `simplescape-db`; [`MemoryRepository`] keeps everything in process.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::StorageConfig;

/// Errors a repository backend can report.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The backend could not complete the operation.
    #[error("save backend error: {message}")]
    Backend {
        /// Description from the backend.
        message: String,
    },
}

/// Key/value storage for save documents.
pub trait SaveRepository: Send + Sync {
    /// Read the document at `key`. `Ok(None)` when nothing is stored.
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, RepositoryError>> + Send;

    /// Store `value` at `key`, replacing any previous document.
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send;

    /// Delete the document at `key`. Removing a missing key succeeds.
    fn remove(&self, key: &str) -> impl Future<Output = Result<(), RepositoryError>> + Send;
}

/// The two keys a save is split across.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveKeys {
    /// Key of the player document.
    pub player: String,
    /// Key of the shop stock document.
    pub shop: String,
}

impl SaveKeys {
    /// Keys configured in the `storage` section.
    pub fn from_config(storage: &StorageConfig) -> Self {
        Self {
            player: storage.player_key.clone(),
            shop: storage.shop_key.clone(),
        }
    }
}

impl Default for SaveKeys {
    fn default() -> Self {
        Self::from_config(&StorageConfig::default())
    }
}

/// In-process repository.
///
/// Clones share the same map, so a test can keep a handle while the
/// session owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryRepository {
    /// Empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Whether nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

impl SaveRepository for MemoryRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        self.entries
            .lock()
            .await
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}
