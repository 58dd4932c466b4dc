//! Shared helpers for workspace integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use dtmap_document::Document;
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Directory holding the fixture maps.
pub fn maps_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/maps")
}

/// Loads a fixture map by name.
pub fn load(name: &str) -> Document {
    init_tracing();
    dtmap_io::load_from_dir(name, maps_dir()).unwrap()
}

/// Tile frame position of grid cell `c` in the loop fixture.
pub fn cell_center(c: i64) -> f64 {
    (c as f64 + 0.5) * 0.585
}
