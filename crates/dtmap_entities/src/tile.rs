//! Tiles and their derived grid coordinates.
//!
//! A tile's grid cell is not stored. It is computed from the position of the
//! frame with the same key and the cell size of the parent tile map:
//! `i = round(pose.x / tile_size.x - 0.5)`, and likewise `j` from `y`.
//! Writing `i` or `j` moves the frame to the center of the requested cell.

use std::sync::Arc;

use dtmap_document::{
    Derivation, EntityKind, EntityView, Error, FieldSchema, FromValue, Result, Type, Value,
};
use once_cell::sync::Lazy;

use crate::enums::{Orientation, TileType};
use crate::frame::Frame;
use crate::tile_map::{self, TileMap};
use crate::typed::{Placeable, TypedView, typed_view};

/// Layer name for tiles.
pub const LAYER: &str = "tiles";

/// The `Tile` entity kind.
pub static TILE_KIND: Lazy<Arc<EntityKind>> = Lazy::new(|| {
    Arc::new(
        EntityKind::new("Tile", LAYER)
            .with_field(FieldSchema::derived(
                "i",
                Type::Int,
                Derivation {
                    read: |view| read_coordinate(view, Axis::X),
                    write: |view, value| write_coordinate(view, Axis::X, &value),
                },
            ))
            .with_field(FieldSchema::derived(
                "j",
                Type::Int,
                Derivation {
                    read: |view| read_coordinate(view, Axis::Y),
                    write: |view, value| write_coordinate(view, Axis::Y, &value),
                },
            ))
            .with_field(FieldSchema::enumeration::<TileType>("type"))
            .with_field(FieldSchema::enumeration::<Orientation>("orientation")),
    )
});

typed_view!(
    /// A tile.
    Tile,
    TILE_KIND
);

impl Placeable for Tile {}

impl Tile {
    /// Returns the grid column.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` if the tile's frame or tile map is missing,
    /// or `InvalidValue` if the tile map has a non-positive cell size.
    pub fn i(&self) -> Result<i64> {
        self.0.read_as("i")
    }

    /// Returns the grid row.
    ///
    /// # Errors
    ///
    /// Same as [`i`](Self::i).
    pub fn j(&self) -> Result<i64> {
        self.0.read_as("j")
    }

    /// Moves the tile's frame to the center of column `i`.
    ///
    /// # Errors
    ///
    /// Same as [`i`](Self::i).
    pub fn set_i(&self, i: i64) -> Result<()> {
        self.0.write("i", i)
    }

    /// Moves the tile's frame to the center of row `j`.
    ///
    /// # Errors
    ///
    /// Same as [`i`](Self::i).
    pub fn set_j(&self, j: i64) -> Result<()> {
        self.0.write("j", j)
    }

    /// Returns the tile type.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if the stored literal is unknown.
    pub fn tile_type(&self) -> Result<TileType> {
        self.0.read_as("type")
    }

    /// Sets the tile type.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile was removed.
    pub fn set_tile_type(&self, tile_type: TileType) -> Result<()> {
        self.0.write("type", tile_type)
    }

    /// Returns the tile orientation.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if the stored literal is unknown.
    pub fn orientation(&self) -> Result<Orientation> {
        self.0.read_as("orientation")
    }

    /// Sets the tile orientation.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile was removed.
    pub fn set_orientation(&self, orientation: Orientation) -> Result<()> {
        self.0.write("orientation", orientation)
    }

    /// Returns the tile map this tile belongs to.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` if there is no tile map at the parent key.
    pub fn tile_map(&self) -> Result<TileMap> {
        let doc = self.0.document()?;
        TileMap::get(&doc, parent_map_key(&self.0)?)
    }
}

/// Converts a position along one axis to a grid coordinate.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn to_coordinate(position: f64, cell_size: f64) -> i64 {
    (position / cell_size - 0.5).round() as i64
}

/// Converts a grid coordinate to the position of its cell center.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn to_position(coordinate: i64, cell_size: f64) -> f64 {
    (coordinate as f64 + 0.5) * cell_size
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

impl Axis {
    const fn pose_field(self) -> &'static str {
        match self {
            Self::X => "pose.x",
            Self::Y => "pose.y",
        }
    }

    const fn size_field(self) -> &'static str {
        match self {
            Self::X => "tile_size.x",
            Self::Y => "tile_size.y",
        }
    }
}

fn parent_map_key(view: &EntityView) -> Result<&str> {
    view.parent_key().ok_or_else(|| {
        Error::entity_not_found(tile_map::LAYER, format!("<parent of '{}'>", view.key()))
    })
}

/// Resolves the tile's frame and the cell size along `axis`.
fn cell(view: &EntityView, axis: Axis) -> Result<(Frame, f64)> {
    let doc = view.document()?;
    let frame = Frame::get(&doc, view.key())?;
    let tile_map = TileMap::get(&doc, parent_map_key(view)?)?;
    let size: f64 = tile_map.view().read_as(axis.size_field())?;
    if !size.is_finite() || size <= 0.0 {
        return Err(Error::invalid_value(
            axis.size_field(),
            size.to_string(),
            "a positive finite number",
        ));
    }
    Ok((frame, size))
}

fn read_coordinate(view: &EntityView, axis: Axis) -> Result<Value> {
    let (frame, size) = cell(view, axis)?;
    let position: f64 = frame.view().read_as(axis.pose_field())?;
    Ok(Value::Int(to_coordinate(position, size)))
}

fn write_coordinate(view: &EntityView, axis: Axis, value: &Value) -> Result<()> {
    let coordinate = i64::from_value(axis.pose_field(), value)?;
    let (frame, size) = cell(view, axis)?;
    frame
        .view()
        .write(axis.pose_field(), to_position(coordinate, size))
}
