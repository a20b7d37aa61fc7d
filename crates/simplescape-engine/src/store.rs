//! Runtime selection of the save backend.

use simplescape_core::config::{StorageBackend, StorageConfig};
use simplescape_core::{MemoryRepository, RepositoryError, SaveRepository};
use simplescape_db::{DbError, DragonflyStore, FileStore};
use tracing::info;

/// Whichever backend the config selected.
pub enum Store {
    /// In-process map.
    Memory(MemoryRepository),
    /// JSON files in a directory.
    File(FileStore),
    /// `Dragonfly` server.
    Dragonfly(DragonflyStore),
}

impl Store {
    /// Open the backend named in `storage`.
    pub async fn open(storage: &StorageConfig) -> Result<Self, DbError> {
        let store = match storage.backend {
            StorageBackend::Memory => Self::Memory(MemoryRepository::new()),
            StorageBackend::File => Self::File(FileStore::open(&storage.save_dir).await?),
            StorageBackend::Dragonfly => {
                Self::Dragonfly(DragonflyStore::connect(&storage.dragonfly_url).await?)
            }
        };
        info!(backend = ?storage.backend, "Save storage ready");
        Ok(store)
    }
}

impl SaveRepository for Store {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        match self {
            Self::Memory(repo) => repo.get(key).await,
            Self::File(repo) => SaveRepository::get(repo, key).await,
            Self::Dragonfly(repo) => SaveRepository::get(repo, key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        match self {
            Self::Memory(repo) => repo.set(key, value).await,
            Self::File(repo) => SaveRepository::set(repo, key, value).await,
            Self::Dragonfly(repo) => SaveRepository::set(repo, key, value).await,
        }
    }

    async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        match self {
            Self::Memory(repo) => repo.remove(key).await,
            Self::File(repo) => repo.remove(key).await,
            Self::Dragonfly(repo) => repo.remove(key).await,
        }
    }
}
