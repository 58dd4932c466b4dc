//! Core values, types, errors, and ordered persistent collections for dtmap.
//!
//! This crate provides:
//! - [`Value`] - The untyped value stored in map records
//! - [`Type`] - Type descriptors for field validation
//! - [`Error`] - Rich error types with context
//! - Ordered persistent collections ([`SeqVec`], [`OrderedMap`], [`Record`], [`RecordTable`])
//! - Key-path helpers for `/`-separated entity keys ([`key`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod key;
pub mod types;
pub mod value;

#[cfg(feature = "serde")]
mod serde_support;

pub use collections::{SeqVec, OrderedMap, Record, RecordTable};
pub use error::{Error, ErrorContext, ErrorKind};
pub use types::Type;
pub use value::{FromValue, Value};

/// Result type alias using the dtmap [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
