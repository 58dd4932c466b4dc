//! dtmap - Typed views over layered map documents
//!
//! This crate re-exports all layers of the dtmap workspace for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: dtmap_graph      — Lane connectivity graphs per tile map
//!          dtmap_io         — YAML layer files, directory assets
//! Layer 2: dtmap_entities   — Frames, tiles, vehicles, signs, ...
//! Layer 1: dtmap_document   — Layers, entity views, identity cache
//! Layer 0: dtmap_foundation — Core types (Value, Record, Error)
//! ```

pub use dtmap_document as document;
pub use dtmap_entities as entities;
pub use dtmap_foundation as foundation;
pub use dtmap_graph as graph;
pub use dtmap_io as io;
