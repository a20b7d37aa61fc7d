//! Save storage as files in a local directory.
//!
//! The document for key `k` lives at `<dir>/k.json`. Writes go to a
//! temporary sibling first and are renamed into place, so a crash mid-save
//! leaves the previous document intact.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use simplescape_core::{RepositoryError, SaveRepository};
use tokio::fs;

use crate::error::DbError;

/// File extension of save documents.
const EXTENSION: &str = "json";

/// Directory-backed key/value store.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open `dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Io`] if the directory cannot be created.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, DbError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        tracing::info!(dir = %dir.display(), "Opened save directory");
        Ok(Self { dir })
    }

    /// The directory documents are stored in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the document for `key`.
    ///
    /// Keys are limited to ASCII letters, digits, `-`, and `_` so they can
    /// never escape the directory.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::InvalidKey`] for any other key.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, DbError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(DbError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(key).with_extension(EXTENSION))
    }

    /// Read the document at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Io`] if the file exists but cannot be read.
    pub async fn get(&self, key: &str) -> Result<Option<String>, DbError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Store `value` at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Io`] if the write or rename fails.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), DbError> {
        let path = self.path_for(key)?;
        let staging = path.with_extension("tmp");
        fs::write(&staging, value).await?;
        fs::rename(&staging, &path).await?;
        tracing::debug!(key, bytes = value.len(), "Wrote save document");
        Ok(())
    }

    /// Delete the document at `key`. A missing document is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Io`] if the file exists but cannot be removed.
    pub async fn delete(&self, key: &str) -> Result<(), DbError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

impl SaveRepository for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        Ok(Self::get(self, key).await?)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        Ok(Self::set(self, key, value).await?)
    }

    async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        Ok(self.delete(key).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_cannot_escape_the_directory() {
        let store = FileStore {
            dir: PathBuf::from("/saves"),
        };
        assert!(matches!(store.path_for("../etc/passwd"), Err(DbError::InvalidKey(_))));
        assert!(matches!(store.path_for(""), Err(DbError::InvalidKey(_))));
        assert!(matches!(store.path_for("a b"), Err(DbError::InvalidKey(_))));
        assert_eq!(
            store.path_for("simpleScapeSaveData").ok(),
            Some(PathBuf::from("/saves/simpleScapeSaveData.json"))
        );
    }
}
