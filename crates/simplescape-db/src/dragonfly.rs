//! `Dragonfly` (Redis-compatible) save storage.
//!
//! Each save document is a plain string value under its key. Nothing else
//! is stored, so one `Dragonfly` database can hold saves for several
//! installations as long as their keys differ.

use fred::prelude::*;
use simplescape_core::{RepositoryError, SaveRepository};

use crate::error::DbError;

/// Connection handle to a `Dragonfly` (Redis-compatible) instance.
#[derive(Clone)]
pub struct DragonflyStore {
    client: Client,
}

impl DragonflyStore {
    /// Connect to `Dragonfly` at the given URL.
    ///
    /// The URL should follow the Redis URL scheme:
    /// `redis://host:port` or `redis://host:port/db`
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Config`] if the URL cannot be parsed.
    /// Returns [`DbError::Dragonfly`] if the connection fails.
    pub async fn connect(url: &str) -> Result<Self, DbError> {
        let config = Config::from_url(url)
            .map_err(|e| DbError::Config(format!("Invalid Dragonfly URL: {e}")))?;

        let client = Builder::from_config(config).build()?;
        client.init().await?;

        tracing::info!("Connected to Dragonfly");
        Ok(Self { client })
    }

    /// Read the string at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Dragonfly`] if the read fails.
    pub async fn get(&self, key: &str) -> Result<Option<String>, DbError> {
        let value: Option<String> = self.client.get(key).await?;
        Ok(value)
    }

    /// Store `value` at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Dragonfly`] if the write fails.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), DbError> {
        let _: () = self.client.set(key, value, None, None, false).await?;
        Ok(())
    }

    /// Delete `key`.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Dragonfly`] if the delete fails.
    pub async fn delete(&self, key: &str) -> Result<(), DbError> {
        let _: u32 = self.client.del(key).await?;
        Ok(())
    }

    /// Close the connection.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Dragonfly`] if the quit command fails.
    pub async fn quit(&self) -> Result<(), DbError> {
        self.client.quit().await?;
        Ok(())
    }
}

impl SaveRepository for DragonflyStore {
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
