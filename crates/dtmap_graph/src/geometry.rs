//! Lane geometry and tile-local placement.
//!
//! Tile-local coordinates put the tile center at the origin with +y pointing
//! to the tile's local north. Traffic drives on the right.

use dtmap_entities::Orientation;

use crate::lane_graph::Lane;

/// Road marking dimensions used to place lane centerlines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaneGeometry {
    /// Width of the center (yellow) tape, in meters.
    pub yellow_tape_width: f64,
    /// Distance from the yellow tape edge to the lane center, as a fraction
    /// of the tile size.
    pub lane_center_normalized: f64,
}

impl Default for LaneGeometry {
    fn default() -> Self {
        Self {
            yellow_tape_width: 0.025,
            lane_center_normalized: 0.21,
        }
    }
}

impl LaneGeometry {
    /// Creates the default geometry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the yellow tape width.
    #[must_use]
    pub const fn with_yellow_tape_width(mut self, width: f64) -> Self {
        self.yellow_tape_width = width;
        self
    }

    /// Sets the normalized lane center distance.
    #[must_use]
    pub const fn with_lane_center_normalized(mut self, fraction: f64) -> Self {
        self.lane_center_normalized = fraction;
        self
    }

    /// Lateral distance from the tile axis to a lane centerline.
    #[must_use]
    pub fn lane_offset(&self, tile_size: f64) -> f64 {
        self.yellow_tape_width / 2.0 + self.lane_center_normalized * tile_size
    }
}

/// A side of a tile, in tile-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// +y.
    North,
    /// +x.
    East,
    /// -y.
    South,
    /// -x.
    West,
}

impl Side {
    /// All four sides.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Outward unit normal.
    #[must_use]
    pub const fn normal(self) -> [f64; 2] {
        match self {
            Self::North => [0.0, 1.0],
            Self::East => [1.0, 0.0],
            Self::South => [0.0, -1.0],
            Self::West => [-1.0, 0.0],
        }
    }
}

/// Lane tag for travel along `direction`: right for north or east.
fn lane_for(direction: [f64; 2]) -> Lane {
    if direction[0] > 0.0 || direction[1] > 0.0 {
        Lane::Right
    } else {
        Lane::Left
    }
}

/// Places a tile's local frame in the tile map frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileTransform {
    /// Position of the tile center.
    pub origin: [f64; 3],
    /// Tile orientation.
    pub orientation: Orientation,
}

impl TileTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        origin: [0.0; 3],
        orientation: Orientation::N,
    };

    /// Maps a tile-local point into the tile map frame.
    #[must_use]
    pub fn apply(&self, local: [f64; 3]) -> [f64; 3] {
        let theta = self.orientation.degrees().to_radians();
        let (sin, cos) = theta.sin_cos();
        [
            self.origin[0] + cos * local[0] - sin * local[1],
            self.origin[1] + sin * local[0] + cos * local[1],
            self.origin[2] + local[2],
        ]
    }
}

/// Everything a topology generator needs to know about one tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileContext {
    /// Tile side length.
    pub tile_size: f64,
    /// Road marking dimensions.
    pub geometry: LaneGeometry,
    /// Placement of the tile in the tile map frame.
    pub transform: TileTransform,
}

impl TileContext {
    /// Lateral distance from the tile axis to a lane centerline.
    #[must_use]
    pub fn lane_offset(&self) -> f64 {
        self.geometry.lane_offset(self.tile_size)
    }

    /// Where traffic enters the tile through `side`, in the tile map frame.
    #[must_use]
    pub fn entry(&self, side: Side) -> ([f64; 3], Lane) {
        let [nx, ny] = side.normal();
        let local = self.edge_point(side, [-ny, nx]);
        (self.transform.apply(local), lane_for([-nx, -ny]))
    }

    /// Where traffic leaves the tile through `side`, in the tile map frame.
    #[must_use]
    pub fn exit(&self, side: Side) -> ([f64; 3], Lane) {
        let [nx, ny] = side.normal();
        let local = self.edge_point(side, [ny, -nx]);
        (self.transform.apply(local), lane_for([nx, ny]))
    }

    fn edge_point(&self, side: Side, lateral: [f64; 2]) -> [f64; 3] {
        let [nx, ny] = side.normal();
        let h = self.tile_size / 2.0;
        let d = self.lane_offset();
        [nx * h + d * lateral[0], ny * h + d * lateral[1], 0.0]
    }
}
