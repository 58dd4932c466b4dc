//! Layered map documents and typed entity views for dtmap.
//!
//! This crate provides:
//! - [`Document`] - An ordered, fixed set of named layers
//! - [`Layer`] - A handle to one layer's record table
//! - [`EntityKind`] / [`FieldSchema`] - Static entity schemas
//! - [`EntityView`] - Typed, validated access to one entity
//! - [`ViewRegistry`] - The per-document view identity cache
//! - [`AssetStore`] - Opaque files attached to entities

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod asset;
pub mod document;
pub mod entry;
pub mod filter;
pub mod identity;
pub mod layer;
pub mod schema;
pub mod view;

pub use asset::{Asset, AssetStore, MemoryAssetStore};
pub use document::{Document, DocumentBuilder};
pub use entry::{Entry, RecordRef};
pub use filter::Filter;
pub use identity::ViewRegistry;
pub use layer::Layer;
pub use schema::{Derivation, EntityKind, FieldEnum, FieldSchema, ReadRule, WriteRule};
pub use view::EntityView;

pub use dtmap_foundation::{
    Error, ErrorContext, ErrorKind, FromValue, Record, RecordTable, Result, Type, Value,
};
