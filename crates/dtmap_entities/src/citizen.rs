//! Citizens (duckies).

use std::sync::Arc;

use dtmap_document::{EntityKind, FieldSchema, Result, Type};
use once_cell::sync::Lazy;

use crate::enums::CitizenColor;
use crate::typed::{Placeable, typed_view};

/// Layer name for citizens.
pub const LAYER: &str = "citizens";

/// The `Citizen` entity kind.
pub static CITIZEN_KIND: Lazy<Arc<EntityKind>> = Lazy::new(|| {
    Arc::new(
        EntityKind::new("Citizen", LAYER)
            .with_field(FieldSchema::stored("id", Type::option(Type::String)))
            .with_field(FieldSchema::enumeration::<CitizenColor>("color")),
    )
});

typed_view!(
    /// A citizen.
    Citizen,
    CITIZEN_KIND
);

impl Placeable for Citizen {}

impl Citizen {
    /// Returns the citizen id, if set.
    ///
    /// # Errors
    ///
    /// Returns an error if the citizen was removed.
    pub fn id(&self) -> Result<Option<String>> {
        self.0.read_as("id")
    }

    /// Sets or clears the citizen id.
    ///
    /// # Errors
    ///
    /// Returns an error if the citizen was removed.
    pub fn set_id(&self, id: Option<&str>) -> Result<()> {
        self.0.write("id", id)
    }

    /// Returns the color.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if the stored literal is unknown.
    pub fn color(&self) -> Result<CitizenColor> {
        self.0.read_as("color")
    }

    /// Sets the color.
    ///
    /// # Errors
    ///
    /// Returns an error if the citizen was removed.
    pub fn set_color(&self, color: CitizenColor) -> Result<()> {
        self.0.write("color", color)
    }
}
