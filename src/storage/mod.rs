//! Storage for the result store and downloaded images.
//!
//! - `ResultStore`: the in-memory emoji → combinations map
//! - `LocalStorage`: JSON state file and image downloads on disk

pub mod local;
pub mod store;

use async_trait::async_trait;

use crate::error::Result;

// Re-export for convenience
pub use local::LocalStorage;
pub use store::ResultStore;

/// Trait for result store persistence backends.
#[async_trait]
pub trait StoreStorage: Send + Sync {
    /// Load the persisted store; an absent state file yields an empty store.
    async fn load_store(&self) -> Result<ResultStore>;

    /// Persist the whole store, all-or-nothing.
    async fn save_store(&self, store: &ResultStore) -> Result<()>;

    /// Persist the bytes of one fetched image.
    async fn save_image(&self, file_name: &str, bytes: &[u8]) -> Result<()>;

    /// Whether an image with this file name was already downloaded.
    async fn has_image(&self, file_name: &str) -> bool;
}
