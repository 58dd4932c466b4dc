//! Tile maps: grids of square cells holding tiles.

use std::sync::Arc;

use dtmap_document::{Document, EntityKind, FieldSchema, Result, Type};
use dtmap_foundation::key;
use once_cell::sync::Lazy;

use crate::tile::Tile;
use crate::typed::{TypedView, typed_view};

/// Layer name for tile maps.
pub const LAYER: &str = "tile_maps";

/// The `TileMap` entity kind.
pub static TILE_MAP_KIND: Lazy<Arc<EntityKind>> = Lazy::new(|| {
    Arc::new(
        EntityKind::new("TileMap", LAYER)
            .with_field(FieldSchema::stored("tile_size.x", Type::Float))
            .with_field(FieldSchema::stored("tile_size.y", Type::Float)),
    )
});

typed_view!(
    /// A tile map. Its tiles are the tiles whose parent key is its key.
    TileMap,
    TILE_MAP_KIND
);

impl TileMap {
    /// Returns the cell size.
    #[must_use]
    pub fn tile_size(&self) -> TileSize {
        TileSize(self.clone())
    }

    /// Returns the tiles of this map in table order.
    ///
    /// # Errors
    ///
    /// Returns an error if the document was dropped or has no tiles layer.
    pub fn tiles(&self) -> Result<Vec<Tile>> {
        let doc = self.0.document()?;
        Ok(Tile::all(&doc)?
            .into_iter()
            .filter(|tile| key::is_child_of(tile.key(), self.key()))
            .collect())
    }

    /// Returns the tile at grid cell `(i, j)`, if any.
    ///
    /// # Errors
    ///
    /// Returns any error raised while computing tile coordinates.
    pub fn tile_at(&self, i: i64, j: i64) -> Result<Option<Tile>> {
        for tile in self.tiles()? {
            if tile.i()? == i && tile.j()? == j {
                return Ok(Some(tile));
            }
        }
        Ok(None)
    }
}

/// Looks up the tile at grid cell `(i, j)` of a tile map.
///
/// # Errors
///
/// Returns `EntityNotFound` if the tile map does not exist, or any error
/// raised while computing tile coordinates.
pub fn find_tile(doc: &Document, tile_map: &str, i: i64, j: i64) -> Result<Option<Tile>> {
    TileMap::get(doc, tile_map)?.tile_at(i, j)
}

/// The cell size of a [`TileMap`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileSize(TileMap);

impl TileSize {
    /// Returns the cell width.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile map was removed or the value is not a number.
    pub fn x(&self) -> Result<f64> {
        self.0.view().read_as("tile_size.x")
    }

    /// Returns the cell height.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile map was removed or the value is not a number.
    pub fn y(&self) -> Result<f64> {
        self.0.view().read_as("tile_size.y")
    }

    /// Sets the cell width.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile map was removed.
    pub fn set_x(&self, value: f64) -> Result<()> {
        self.0.view().write("tile_size.x", value)
    }

    /// Sets the cell height.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile map was removed.
    pub fn set_y(&self, value: f64) -> Result<()> {
        self.0.view().write("tile_size.y", value)
    }
}
