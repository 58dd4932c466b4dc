//! Asset namespace: opaque files attached to map entities.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use dtmap_foundation::{Error, Result};
use parking_lot::RwLock;

/// Backing storage for map assets, addressed by `/`-separated paths.
pub trait AssetStore: Send + Sync + fmt::Debug {
    /// Returns true if an asset exists at `path`.
    fn exists(&self, path: &str) -> bool;

    /// Reads the asset at `path`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the asset is missing or unreadable.
    fn read(&self, path: &str) -> Result<Vec<u8>>;

    /// Writes the asset at `path`, creating intermediate directories.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the asset cannot be written.
    fn write(&self, path: &str, data: &[u8]) -> Result<()>;
}

/// A handle to one asset of a document.
#[derive(Clone, Debug)]
pub struct Asset {
    store: Arc<dyn AssetStore>,
    path: String,
}

impl Asset {
    pub(crate) fn new(store: Arc<dyn AssetStore>, path: String) -> Self {
        Self { store, path }
    }

    /// Returns the asset path within the store.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns true if the asset exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.store.exists(&self.path)
    }

    /// Reads the asset content.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the asset is missing or unreadable.
    pub fn read(&self) -> Result<Vec<u8>> {
        self.store.read(&self.path)
    }

    /// Reads the asset content as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if unreadable, or a serialization error if the
    /// content is not valid UTF-8.
    pub fn read_to_string(&self) -> Result<String> {
        String::from_utf8(self.read()?)
            .map_err(|e| Error::serialization(format!("asset '{}': {e}", self.path)))
    }

    /// Writes the asset content.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the asset cannot be written.
    pub fn write(&self, data: impl AsRef<[u8]>) -> Result<()> {
        self.store.write(&self.path, data.as_ref())
    }
}

/// In-memory asset store.
#[derive(Debug, Default)]
pub struct MemoryAssetStore {
    files: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryAssetStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl AssetStore for MemoryAssetStore {
    fn exists(&self, path: &str) -> bool {
        self.files.read().contains_key(path)
    }

    fn read(&self, path: &str) -> Result<Vec<u8>> {
        self.files
            .read()
            .get(path)
            .cloned()
            .ok_or_else(|| Error::io(format!("asset '{path}' does not exist")))
    }

    fn write(&self, path: &str, data: &[u8]) -> Result<()> {
        self.files.write().insert(path.to_string(), data.to_vec());
        Ok(())
    }
}
