//! Saving documents as directories of YAML layer files.

use std::fs;
use std::path::Path;

use dtmap_document::{Document, Layer};
use dtmap_foundation::{Error, Record, Result, Value};
use tracing::{debug, info};

use crate::config::IoConfig;

const VERSION_KEY: &str = "version";

/// Renders one layer as a YAML layer file.
///
/// # Errors
///
/// Returns `InvalidLayer` if the layer is named `version`, or has no version
/// and the configuration has no default. Returns a serialization error if
/// rendering fails.
pub fn layer_to_string(config: &IoConfig, layer: &Layer<'_>) -> Result<String> {
    if layer.name() == VERSION_KEY {
        return Err(Error::invalid_layer(
            layer.name(),
            "layer name collides with the version key",
        ));
    }
    let version = if layer.version().is_nil() {
        config
            .default_version
            .clone()
            .ok_or_else(|| Error::invalid_layer(layer.name(), "missing 'version'"))?
    } else {
        layer.version().clone()
    };
    let records: Record = layer
        .as_raw_mapping()
        .iter()
        .map(|(key, record)| (key, Value::Record(record.clone())))
        .collect();
    let file = Record::new()
        .with(VERSION_KEY, version)
        .with(layer.name(), Value::Record(records));
    serde_yaml::to_string(&file)
        .map_err(|e| Error::serialization(format!("layer '{}': {e}", layer.name())))
}

/// Writes every layer of `doc` into `dir` with the default configuration.
///
/// Creates `dir` if needed and overwrites existing layer files. Assets are
/// not copied.
///
/// # Errors
///
/// Returns an I/O error if the directory or a file cannot be written, or
/// any error of [`layer_to_string`].
pub fn save_to_dir(doc: &Document, dir: impl AsRef<Path>) -> Result<()> {
    save_to_dir_with(&IoConfig::default(), doc, dir)
}

/// Writes every layer of `doc` into `dir`.
///
/// # Errors
///
/// See [`save_to_dir`].
pub fn save_to_dir_with(config: &IoConfig, doc: &Document, dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| {
        Error::io(format!(
            "failed to create directory '{}': {e}",
            dir.display()
        ))
    })?;

    // Render all layers before writing any.
    let rendered = doc
        .layers()
        .map(|layer| Ok((layer.name(), layer_to_string(config, &layer)?)))
        .collect::<Result<Vec<_>>>()?;

    for (name, text) in &rendered {
        let path = dir.join(config.layer_file_name(name));
        fs::write(&path, text).map_err(|e| {
            Error::io(format!("failed to write file '{}': {e}", path.display()))
        })?;
        debug!(layer = %name, path = %path.display(), "saved layer");
    }
    info!(map = doc.name(), layers = rendered.len(), path = %dir.display(), "saved map");
    Ok(())
}
