//! Loading maps from directories of YAML layer files.
//!
//! A map called `name` lives in `<maps_dir>/<name>/`. Every `<layer>.yaml`
//! in that directory is one layer, shaped like:
//!
//! ```yaml
//! version: "1.0"
//! tiles:
//!   map_0/tile_0_0:
//!     type: curve
//!     orientation: E
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dtmap_document::{Document, DocumentBuilder};
use dtmap_entities::standard_kind;
use dtmap_foundation::{Error, Record, RecordTable, Result, Value};
use tracing::{debug, info, warn};

use crate::assets::DirAssetStore;
use crate::config::IoConfig;

/// Parses one layer file with the default configuration.
///
/// Returns the layer version and its records.
///
/// # Errors
///
/// Returns a serialization error on malformed YAML, or `InvalidLayer` if
/// the version or the `name` root key is missing, or a record is not a
/// mapping.
pub fn load_layer_str(name: &str, text: &str) -> Result<(Value, RecordTable)> {
    load_layer_str_with(&IoConfig::default(), name, text)
}

/// Parses one layer file.
///
/// # Errors
///
/// See [`load_layer_str`].
pub fn load_layer_str_with(
    config: &IoConfig,
    name: &str,
    text: &str,
) -> Result<(Value, RecordTable)> {
    if text.trim().is_empty() {
        return Err(Error::invalid_layer(name, "layer file is empty"));
    }
    let root: Value = serde_yaml::from_str(text)
        .map_err(|e| Error::serialization(format!("layer '{name}': {e}")))?;
    let Value::Record(root) = root else {
        return Err(Error::invalid_layer(name, "root is not a mapping"));
    };

    let version = match root.get("version") {
        Some(v) if !v.is_nil() => v.clone(),
        _ => config
            .default_version
            .clone()
            .ok_or_else(|| Error::invalid_layer(name, "missing 'version'"))?,
    };

    let table = match root.get(name) {
        None => {
            return Err(Error::invalid_layer(
                name,
                format!("missing root key '{name}'"),
            ));
        }
        Some(Value::Nil) => RecordTable::new(),
        Some(Value::Record(records)) => to_table(name, records)?,
        Some(_) => {
            return Err(Error::invalid_layer(
                name,
                format!("'{name}' is not a mapping"),
            ));
        }
    };
    Ok((version, table))
}

fn to_table(layer: &str, records: &Record) -> Result<RecordTable> {
    records
        .iter()
        .map(|(key, value)| match value {
            Value::Record(record) => Ok((key, record.clone())),
            Value::Nil => Ok((key, Record::new())),
            _ => Err(Error::invalid_layer(
                layer,
                format!("record '{key}' is not a mapping"),
            )),
        })
        .collect()
}

/// Loads the map `name` from `maps_dir` with the default configuration.
///
/// Standard layers are bound to their entity kinds; other layers stay
/// unbound. The document's assets live in the map's `assets` directory.
///
/// # Errors
///
/// Returns an I/O error if `<maps_dir>/<name>` is not a readable directory,
/// or any error of [`load_layer_str`].
pub fn load_from_dir(name: &str, maps_dir: impl AsRef<Path>) -> Result<Document> {
    load_from_dir_with(&IoConfig::default(), name, maps_dir)
}

/// Loads the map `name` from `maps_dir`.
///
/// # Errors
///
/// See [`load_from_dir`].
pub fn load_from_dir_with(
    config: &IoConfig,
    name: &str,
    maps_dir: impl AsRef<Path>,
) -> Result<Document> {
    let map_dir = maps_dir.as_ref().join(name);
    if !map_dir.is_dir() {
        return Err(Error::io(format!(
            "the path '{}' is not a directory",
            map_dir.display()
        )));
    }

    let mut builder = Document::builder(name);
    let mut count = 0usize;
    for path in layer_files(config, &map_dir)? {
        let Some(layer) = path.file_stem().and_then(|s| s.to_str()) else {
            warn!(path = %path.display(), "skipping layer file with a non-UTF-8 name");
            continue;
        };
        let text = fs::read_to_string(&path).map_err(|e| {
            Error::io(format!("failed to read file '{}': {e}", path.display()))
        })?;
        let (version, table) = load_layer_str_with(config, layer, &text)?;
        debug!(layer, records = table.len(), "loaded layer");
        builder = add_layer(builder, layer, version, table);
        count += 1;
    }

    let assets = DirAssetStore::new(map_dir.join(&config.assets_dir));
    let doc = builder.assets(Arc::new(assets)).build()?;
    info!(map = name, layers = count, path = %map_dir.display(), "loaded map");
    Ok(doc)
}

fn add_layer(
    builder: DocumentBuilder,
    layer: &str,
    version: Value,
    table: RecordTable,
) -> DocumentBuilder {
    match standard_kind(layer) {
        Some(kind) => builder.typed_layer(layer, version, table, kind),
        None => builder.layer(layer, version, table),
    }
}

/// Lists layer files of a map directory, sorted by path.
fn layer_files(config: &IoConfig, map_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(map_dir).map_err(|e| {
        Error::io(format!(
            "failed to read directory '{}': {e}",
            map_dir.display()
        ))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| Error::io(format!("failed to read directory entry: {e}")))?
            .path();
        if path.is_dir() {
            continue;
        }
        let is_layer = path
            .extension()
            .is_some_and(|ext| ext.to_str() == Some(config.layer_extension.as_str()));
        if is_layer {
            files.push(path);
        } else {
            warn!(path = %path.display(), "skipping file that is not a layer");
        }
    }
    files.sort();
    Ok(files)
}
