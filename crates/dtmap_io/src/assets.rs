//! Directory-backed asset store.

use std::fs;
use std::path::{Path, PathBuf};

use dtmap_document::AssetStore;
use dtmap_foundation::{Error, Result};

/// Stores assets as files under a root directory.
///
/// Asset paths are `/`-separated and resolved relative to the root. Paths
/// with `..` segments are rejected, so assets never leave the root.
#[derive(Clone, Debug)]
pub struct DirAssetStore {
    root: PathBuf,
}

impl DirAssetStore {
    /// Creates a store rooted at `root`. The directory need not exist yet.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf> {
        let mut file = self.root.clone();
        for segment in path.split('/').filter(|s| !s.is_empty() && *s != ".") {
            if segment == ".." {
                return Err(Error::io(format!(
                    "asset path '{path}' escapes the asset directory"
                )));
            }
            file.push(segment);
        }
        Ok(file)
    }
}

impl AssetStore for DirAssetStore {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_ok_and(|file| file.is_file())
    }

    fn read(&self, path: &str) -> Result<Vec<u8>> {
        let file = self.resolve(path)?;
        fs::read(&file)
            .map_err(|e| Error::io(format!("failed to read asset '{}': {e}", file.display())))
    }

    fn write(&self, path: &str, data: &[u8]) -> Result<()> {
        let file = self.resolve(path)?;
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::io(format!(
                    "failed to create directory '{}': {e}",
                    parent.display()
                ))
            })?;
        }
        fs::write(&file, data)
            .map_err(|e| Error::io(format!("failed to write asset '{}': {e}", file.display())))
    }
}
