//! Vehicles (duckiebots).

use std::sync::Arc;

use dtmap_document::{EntityKind, FieldSchema, Result, Type};
use once_cell::sync::Lazy;

use crate::enums::{VehicleColor, VehicleType};
use crate::typed::{Placeable, typed_view};

/// Layer name for vehicles.
pub const LAYER: &str = "vehicles";

/// The `Vehicle` entity kind.
pub static VEHICLE_KIND: Lazy<Arc<EntityKind>> = Lazy::new(|| {
    Arc::new(
        EntityKind::new("Vehicle", LAYER)
            .with_field(FieldSchema::stored("id", Type::option(Type::String)))
            .with_field(FieldSchema::enumeration::<VehicleType>("configuration"))
            .with_field(FieldSchema::enumeration::<VehicleColor>("color")),
    )
});

typed_view!(
    /// A vehicle.
    Vehicle,
    VEHICLE_KIND
);

impl Placeable for Vehicle {}

impl Vehicle {
    /// Returns the vehicle id, if set.
    ///
    /// # Errors
    ///
    /// Returns an error if the vehicle was removed.
    pub fn id(&self) -> Result<Option<String>> {
        self.0.read_as("id")
    }

    /// Sets or clears the vehicle id.
    ///
    /// # Errors
    ///
    /// Returns an error if the vehicle was removed.
    pub fn set_id(&self, id: Option<&str>) -> Result<()> {
        self.0.write("id", id)
    }

    /// Returns the hardware configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if the stored literal is unknown.
    pub fn configuration(&self) -> Result<VehicleType> {
        self.0.read_as("configuration")
    }

    /// Sets the hardware configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the vehicle was removed.
    pub fn set_configuration(&self, configuration: VehicleType) -> Result<()> {
        self.0.write("configuration", configuration)
    }

    /// Returns the color.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if the stored literal is unknown.
    pub fn color(&self) -> Result<VehicleColor> {
        self.0.read_as("color")
    }

    /// Sets the color.
    ///
    /// # Errors
    ///
    /// Returns an error if the vehicle was removed.
    pub fn set_color(&self, color: VehicleColor) -> Result<()> {
        self.0.write("color", color)
    }
}
