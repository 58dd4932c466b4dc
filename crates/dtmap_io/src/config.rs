//! Configuration for map loading and saving.

use dtmap_foundation::Value;

/// Controls how maps are laid out on disk.
#[derive(Clone, Debug, PartialEq)]
pub struct IoConfig {
    /// Extension of layer files, without the dot.
    pub layer_extension: String,

    /// Directory holding assets, relative to the map directory.
    pub assets_dir: String,

    /// Version used for layers that lack one.
    ///
    /// `None` makes a missing version an error on load and on save.
    pub default_version: Option<Value>,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            layer_extension: "yaml".to_string(),
            assets_dir: "assets".to_string(),
            default_version: None,
        }
    }
}

impl IoConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the layer file extension.
    #[must_use]
    pub fn with_layer_extension(mut self, extension: impl Into<String>) -> Self {
        self.layer_extension = extension.into();
        self
    }

    /// Sets the assets directory name.
    #[must_use]
    pub fn with_assets_dir(mut self, dir: impl Into<String>) -> Self {
        self.assets_dir = dir.into();
        self
    }

    /// Sets the version used for layers that lack one.
    #[must_use]
    pub fn with_default_version(mut self, version: impl Into<Value>) -> Self {
        self.default_version = Some(version.into());
        self
    }

    /// Returns the file name of a layer.
    #[must_use]
    pub fn layer_file_name(&self, layer: &str) -> String {
        format!("{layer}.{}", self.layer_extension)
    }
}
