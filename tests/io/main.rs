//! Integration tests for Layer 3: Disk I/O
//!
//! Tests for loading, saving, and assets of maps on disk.

#[path = "../common/mod.rs"]
mod common;

mod assets;
mod save;
