//! Frames: poses of entities, optionally relative to another frame.

use std::sync::Arc;

use dtmap_document::{EntityKind, FieldSchema, Result, Type};
use once_cell::sync::Lazy;

use crate::typed::{TypedView, typed_view};

/// Layer name for frames.
pub const LAYER: &str = "frames";

const POSE_FIELDS: [&str; 6] = ["x", "y", "z", "roll", "pitch", "yaw"];

/// The `Frame` entity kind.
pub static FRAME_KIND: Lazy<Arc<EntityKind>> = Lazy::new(|| {
    let kind = EntityKind::new("Frame", LAYER)
        .with_field(FieldSchema::stored("relative_to", Type::option(Type::String)));
    Arc::new(POSE_FIELDS.iter().fold(kind, |kind, axis| {
        kind.with_field(FieldSchema::stored(format!("pose.{axis}"), Type::Float))
    }))
});

typed_view!(
    /// A frame.
    Frame,
    FRAME_KIND
);

impl Frame {
    /// Returns the key of the frame this one is relative to.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame was removed or holds a non-string value.
    pub fn relative_to(&self) -> Result<Option<String>> {
        self.0.read_as("relative_to")
    }

    /// Sets the key of the frame this one is relative to.
    ///
    /// The target is not required to exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame was removed.
    pub fn set_relative_to(&self, key: Option<&str>) -> Result<()> {
        self.0.write("relative_to", key)
    }

    /// Resolves the frame this one is relative to.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` if `relative_to` names a missing frame.
    pub fn resolve_parent(&self) -> Result<Option<Frame>> {
        let Some(parent) = self.relative_to()? else {
            return Ok(None);
        };
        let doc = self.0.document()?;
        Frame::get(&doc, &parent).map(Some)
    }

    /// Returns the frame's pose.
    #[must_use]
    pub fn pose(&self) -> Pose3D {
        Pose3D(self.clone())
    }
}

/// The pose of a [`Frame`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pose3D(Frame);

macro_rules! pose_axis {
    ($get:ident, $set:ident, $field:literal) => {
        #[doc = concat!("Returns `", $field, "`.")]
        ///
        /// # Errors
        ///
        /// Returns an error if the frame was removed or the value is not a number.
        pub fn $get(&self) -> Result<f64> {
            self.0.view().read_as($field)
        }

        #[doc = concat!("Sets `", $field, "`.")]
        ///
        /// # Errors
        ///
        /// Returns an error if the frame was removed.
        pub fn $set(&self, value: f64) -> Result<()> {
            self.0.view().write($field, value)
        }
    };
}

impl Pose3D {
    pose_axis!(x, set_x, "pose.x");
    pose_axis!(y, set_y, "pose.y");
    pose_axis!(z, set_z, "pose.z");
    pose_axis!(roll, set_roll, "pose.roll");
    pose_axis!(pitch, set_pitch, "pose.pitch");
    pose_axis!(yaw, set_yaw, "pose.yaw");

    /// Returns the frame this pose belongs to.
    #[must_use]
    pub fn frame(&self) -> &Frame {
        &self.0
    }
}
