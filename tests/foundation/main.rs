//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, Type, Error, key paths, and ordered collections.

mod collections;
mod errors;
mod keys;
mod values;
