//! Traffic signs, each carrying an `AprilTag` marker.

use std::sync::Arc;

use dtmap_document::{EntityKind, FieldSchema, Result, Type};
use once_cell::sync::Lazy;

use crate::enums::TrafficSignType;
use crate::typed::{Placeable, typed_view};

/// Layer name for traffic signs.
pub const LAYER: &str = "traffic_signs";

/// The `TrafficSign` entity kind.
pub static TRAFFIC_SIGN_KIND: Lazy<Arc<EntityKind>> = Lazy::new(|| {
    Arc::new(
        EntityKind::new("TrafficSign", LAYER)
            .with_field(FieldSchema::enumeration::<TrafficSignType>("type"))
            .with_field(FieldSchema::stored("id", Type::Int))
            .with_field(FieldSchema::stored("family", Type::String)),
    )
});

typed_view!(
    /// A traffic sign.
    TrafficSign,
    TRAFFIC_SIGN_KIND
);

impl Placeable for TrafficSign {}

impl TrafficSign {
    /// Returns the sign type.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if the stored literal is unknown.
    pub fn sign_type(&self) -> Result<TrafficSignType> {
        self.0.read_as("type")
    }

    /// Sets the sign type.
    ///
    /// # Errors
    ///
    /// Returns an error if the sign was removed.
    pub fn set_sign_type(&self, sign_type: TrafficSignType) -> Result<()> {
        self.0.write("type", sign_type)
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
    /// Returns an error if the sign was removed.
    pub fn set_id(&self, id: i64) -> Result<()> {
        self.0.write("id", id)
    }

    /// Returns the tag family (e.g. `36h11`).
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
    /// Returns an error if the sign was removed.
    pub fn set_family(&self, family: &str) -> Result<()> {
        self.0.write("family", family)
    }
}
