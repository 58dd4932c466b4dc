//! Integration tests for Layer 1: Document
//!
//! Tests for layers, entity views, the identity cache, and filters.

#[path = "../common/mod.rs"]
mod common;

mod custom_layers;
mod filters;
