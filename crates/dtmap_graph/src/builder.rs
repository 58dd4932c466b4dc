//! Assembles lane graphs from tile maps.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use dtmap_document::{Document, Error, FieldEnum, Result};
use dtmap_entities::{Orientation, Placeable, Tile, TileMap, TileType, TypedView};
use tracing::debug;

use crate::generator::{Routes, TopologyGenerator};
use crate::geometry::{LaneGeometry, TileContext, TileTransform};
use crate::lane_graph::LaneGraph;

/// Builds one [`LaneGraph`] per tile map from per-tile generators.
///
/// The result is the disjoint union of every tile's local topology.
/// Neighboring tiles are not connected.
#[derive(Clone)]
pub struct LaneGraphBuilder {
    geometry: LaneGeometry,
    generators: HashMap<TileType, Arc<dyn TopologyGenerator>>,
}

impl Default for LaneGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LaneGraphBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<&str> = self.generators.keys().map(|t| t.as_str()).collect();
        types.sort_unstable();
        f.debug_struct("LaneGraphBuilder")
            .field("geometry", &self.geometry)
            .field("generators", &types)
            .finish()
    }
}

impl LaneGraphBuilder {
    /// Creates a builder with generators for every standard tile type.
    #[must_use]
    pub fn new() -> Self {
        Self::empty()
            .register(TileType::Straight, Routes::straight())
            .register(TileType::Curve, Routes::curve())
            .register(TileType::ThreeWay, Routes::three_way())
            .register(TileType::FourWay, Routes::four_way())
            .register(TileType::Asphalt, Routes::none())
            .register(TileType::Grass, Routes::none())
            .register(TileType::Floor, Routes::none())
    }

    /// Creates a builder with no generators.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            geometry: LaneGeometry::default(),
            generators: HashMap::new(),
        }
    }

    /// Sets the lane geometry.
    #[must_use]
    pub fn with_geometry(mut self, geometry: LaneGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Returns the lane geometry.
    #[must_use]
    pub fn geometry(&self) -> &LaneGeometry {
        &self.geometry
    }

    /// Adds or replaces the generator for a tile type.
    #[must_use]
    pub fn register(
        mut self,
        tile_type: TileType,
        generator: impl TopologyGenerator + 'static,
    ) -> Self {
        self.generators.insert(tile_type, Arc::new(generator));
        self
    }

    /// Builds the lane graph of one tile map.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` if a tile has no frame, `UnsupportedTileType`
    /// if a tile's type has no generator, or any error raised while reading
    /// tile data.
    pub fn build(&self, tile_map: &TileMap) -> Result<LaneGraph> {
        let tile_size = tile_map.tile_size().x()?;
        let mut graph = LaneGraph::new();
        let tiles = tile_map.tiles()?;
        for tile in &tiles {
            let generator = self.generator_for(tile)?;
            let ctx = TileContext {
                tile_size,
                geometry: self.geometry,
                transform: transform_of(tile)?,
            };
            let mut local = LaneGraph::new();
            generator.generate(&ctx, &mut local)?;
            graph.union(local);
        }
        debug!(
            tile_map = tile_map.key(),
            tiles = tiles.len(),
            waypoints = graph.node_count(),
            edges = graph.edge_count(),
            "built lane graph"
        );
        Ok(graph)
    }

    /// Builds one lane graph per tile map, keyed by tile map key.
    ///
    /// # Errors
    ///
    /// Returns `MissingLayer` if the document has no tile maps, or the first
    /// error raised by [`build`](Self::build).
    pub fn build_all(&self, doc: &Document) -> Result<Vec<(String, LaneGraph)>> {
        TileMap::all(doc)?
            .into_iter()
            .map(|map| Ok((map.key().to_owned(), self.build(&map)?)))
            .collect()
    }

    fn generator_for(&self, tile: &Tile) -> Result<&Arc<dyn TopologyGenerator>> {
        let raw = tile.view().read("type")?;
        let Some(literal) = raw.as_str() else {
            return Err(Error::unsupported_tile_type(format!("{raw:?}")));
        };
        TileType::parse(literal)
            .and_then(|tile_type| self.generators.get(&tile_type))
            .ok_or_else(|| Error::unsupported_tile_type(literal))
    }
}

/// Places a tile by its frame and orientation. A missing `pose.z` is zero
/// and a missing orientation is north.
fn transform_of(tile: &Tile) -> Result<TileTransform> {
    let frame = tile.frame()?;
    let pose = frame.pose();
    let z: Option<f64> = frame.view().read_as("pose.z")?;
    let orientation = if tile.view().read("orientation")?.is_nil() {
        Orientation::N
    } else {
        tile.orientation()?
    };
    Ok(TileTransform {
        origin: [pose.x()?, pose.y()?, z.unwrap_or(0.0)],
        orientation,
    })
}
