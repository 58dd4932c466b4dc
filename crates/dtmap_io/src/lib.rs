//! Disk I/O for dtmap documents.
//!
//! This crate provides:
//! - [`load_from_dir`] and [`load_layer_str`]: read maps stored as one YAML
//!   file per layer
//! - [`save_to_dir`]: write a document back in the same layout
//! - [`DirAssetStore`]: assets as files under the map's `assets/` directory
//! - [`IoConfig`]: file naming and version defaults

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod assets;
pub mod config;
pub mod loader;
pub mod saver;

pub use assets::DirAssetStore;
pub use config::IoConfig;
pub use loader::{load_from_dir, load_from_dir_with, load_layer_str, load_layer_str_with};
pub use saver::{layer_to_string, save_to_dir, save_to_dir_with};
