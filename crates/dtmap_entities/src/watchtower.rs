//! Watchtowers: fixed camera stations.

use std::sync::Arc;

use dtmap_document::{EntityKind, FieldSchema, Result, Type};
use once_cell::sync::Lazy;

use crate::enums::WatchtowerType;
use crate::typed::{Placeable, typed_view};

/// Layer name for watchtowers.
pub const LAYER: &str = "watchtowers";

/// The `Watchtower` entity kind.
pub static WATCHTOWER_KIND: Lazy<Arc<EntityKind>> = Lazy::new(|| {
    Arc::new(
        EntityKind::new("Watchtower", LAYER)
            .with_field(FieldSchema::stored("id", Type::option(Type::String)))
            .with_field(FieldSchema::enumeration::<WatchtowerType>("configuration")),
    )
});

typed_view!(
    /// A watchtower.
    Watchtower,
    WATCHTOWER_KIND
);

impl Placeable for Watchtower {}

impl Watchtower {
    /// Returns the watchtower id, if set.
    ///
    /// # Errors
    ///
    /// Returns an error if the watchtower was removed.
    pub fn id(&self) -> Result<Option<String>> {
        self.0.read_as("id")
    }

    /// Sets or clears the watchtower id.
    ///
    /// # Errors
    ///
    /// Returns an error if the watchtower was removed.
    pub fn set_id(&self, id: Option<&str>) -> Result<()> {
        self.0.write("id", id)
    }

    /// Returns the hardware configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if the stored literal is unknown.
    pub fn configuration(&self) -> Result<WatchtowerType> {
        self.0.read_as("configuration")
    }

    /// Sets the hardware configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the watchtower was removed.
    pub fn set_configuration(&self, configuration: WatchtowerType) -> Result<()> {
        self.0.write("configuration", configuration)
    }
}
