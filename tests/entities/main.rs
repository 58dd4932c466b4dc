//! Integration tests for Layer 2: Entities
//!
//! Tests for the standard entity kinds over fixture maps.

#[path = "../common/mod.rs"]
mod common;

mod autolab;
mod frames;
mod tiles;
