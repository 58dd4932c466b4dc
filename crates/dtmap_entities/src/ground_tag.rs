//! Ground tags: `AprilTag` markers laid on the floor.

use std::sync::Arc;

use dtmap_document::{EntityKind, FieldSchema, Result, Type};
use once_cell::sync::Lazy;

use crate::typed::{Placeable, typed_view};

/// Layer name for ground tags.
pub const LAYER: &str = "ground_tags";

/// The `GroundTag` entity kind.
pub static GROUND_TAG_KIND: Lazy<Arc<EntityKind>> = Lazy::new(|| {
    Arc::new(
        EntityKind::new("GroundTag", LAYER)
            .with_field(FieldSchema::stored("size", Type::Float))
            .with_field(FieldSchema::stored("id", Type::Int))
            .with_field(FieldSchema::stored("family", Type::String)),
    )
});

typed_view!(
    /// A ground tag.
    GroundTag,
    GROUND_TAG_KIND
);

impl Placeable for GroundTag {}

impl GroundTag {
    /// Returns the tag side length in meters.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the stored size is not a number.
    pub fn size(&self) -> Result<f64> {
        self.0.read_as("size")
    }

    /// Sets the tag side length in meters.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag was removed.
    pub fn set_size(&self, size: f64) -> Result<()> {
        self.0.write("size", size)
    }

    /// Returns the tag id.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the stored id is not an integer.
    pub fn id(&self) -> Result<i64> {
        self.0.read_as("id")
    }

    /// Sets the tag id.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag was removed.
    pub fn set_id(&self, id: i64) -> Result<()> {
        self.0.write("id", id)
    }

    /// Returns the tag family.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the stored family is not a string.
    pub fn family(&self) -> Result<String> {
        self.0.read_as("family")
    }

    /// Sets the tag family.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag was removed.
    pub fn set_family(&self, family: &str) -> Result<()> {
        self.0.write("family", family)
    }
}
