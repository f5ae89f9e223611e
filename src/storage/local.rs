//! Local filesystem storage implementation.
//!
//! ## Storage Layout
//!
//! ```text
//! {root}/
//! ├── config.toml           # Crawler configuration
//! ├── emojiOutput.json      # Result store (canonicalized at end of run)
//! └── downloads/            # Fetched mashup images
//!     └── u1f600_u1f601_20200101.png
//! ```
//!
//! Every write goes to a sibling temp file first and is renamed into
//! place, so an interrupted run never leaves a half-written state file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::PathsConfig;
use crate::storage::{ResultStore, StoreStorage};

/// Local filesystem storage backend.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
    paths: PathsConfig,
}

impl LocalStorage {
    /// Create a new LocalStorage rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self::with_paths(root_dir, PathsConfig::default())
    }

    /// Create a LocalStorage with custom file locations.
    pub fn with_paths(root_dir: impl Into<PathBuf>, paths: PathsConfig) -> Self {
        Self {
            root_dir: root_dir.into(),
            paths,
        }
    }

    /// Get the full path for a relative key.
    fn path(&self, key: &str) -> PathBuf {
        self.root_dir.join(key)
    }

    /// Full path of the persisted result store.
    pub fn store_path(&self) -> PathBuf {
        self.path(&self.paths.output_file)
    }

    fn image_key(&self, file_name: &str) -> String {
        format!("{}/{}", self.paths.downloads_dir, file_name)
    }

    /// Ensure parent directory exists.
    async fn ensure_dir(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path(key);
        self.ensure_dir(&path).await?;

        let mut tmp = path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        file.sync_all().await?;
        drop(file);

        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }

    /// Write JSON data.
    async fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec(value)?;
        self.write_bytes(key, &bytes).await
    }

    /// Read bytes, returning None if file doesn't exist.
    async fn read_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    /// Read JSON data.
    async fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.read_bytes(key).await? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl StoreStorage for LocalStorage {
    async fn load_store(&self) -> Result<ResultStore> {
        match self.read_json::<ResultStore>(&self.paths.output_file).await? {
            Some(store) => {
                log::info!(
                    "Loaded {} combinations across {} emoji from {}",
                    store.pair_count(),
                    store.key_count(),
                    self.store_path().display()
                );
                Ok(store)
            }
            None => {
                log::warn!(
                    "No result store at {}, starting empty",
                    self.store_path().display()
                );
                Ok(ResultStore::new())
            }
        }
    }

    async fn save_store(&self, store: &ResultStore) -> Result<()> {
        self.write_json(&self.paths.output_file, store).await?;
        log::debug!(
            "Saved {} entries to {}",
            store.entry_count(),
            self.store_path().display()
        );
        Ok(())
    }

    async fn save_image(&self, file_name: &str, bytes: &[u8]) -> Result<()> {
        self.write_bytes(&self.image_key(file_name), bytes).await
    }

    async fn has_image(&self, file_name: &str) -> bool {
        tokio::fs::try_exists(self.path(&self.image_key(file_name)))
            .await
            .unwrap_or(false)
    }
}
