//! Per-tile lane topology generators.

use std::collections::HashMap;

use dtmap_foundation::Result;
use uuid::Uuid;

use crate::geometry::{Side, TileContext};
use crate::lane_graph::LaneGraph;

/// Produces the local lane topology of one tile.
pub trait TopologyGenerator: Send + Sync {
    /// Adds the tile's waypoints and edges to `graph`.
    ///
    /// # Errors
    ///
    /// Implementations may fail on tiles they cannot handle.
    fn generate(&self, ctx: &TileContext, graph: &mut LaneGraph) -> Result<()>;
}

impl<F> TopologyGenerator for F
where
    F: Fn(&TileContext, &mut LaneGraph) -> Result<()> + Send + Sync,
{
    fn generate(&self, ctx: &TileContext, graph: &mut LaneGraph) -> Result<()> {
        self(ctx, graph)
    }
}

/// Topology described as routes between tile sides.
///
/// Each route connects the entry waypoint of one side to the exit waypoint
/// of another. Waypoints are shared between routes through the same side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Routes {
    routes: Vec<(Side, Side)>,
}

impl Routes {
    /// A tile with no lanes.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Adds a route from `from` to `to`.
    #[must_use]
    pub fn with_route(mut self, from: Side, to: Side) -> Self {
        self.routes.push((from, to));
        self
    }

    /// South to north and back.
    #[must_use]
    pub fn straight() -> Self {
        Self::none()
            .with_route(Side::South, Side::North)
            .with_route(Side::North, Side::South)
    }

    /// South to east and back.
    #[must_use]
    pub fn curve() -> Self {
        Self::none()
            .with_route(Side::South, Side::East)
            .with_route(Side::East, Side::South)
    }

    /// Every side to every other side.
    #[must_use]
    pub fn intersection(sides: &[Side]) -> Self {
        let mut routes = Self::none();
        for &from in sides {
            for &to in sides {
                if from != to {
                    routes = routes.with_route(from, to);
                }
            }
        }
        routes
    }

    /// Three-way intersection with sides south, east and west.
    #[must_use]
    pub fn three_way() -> Self {
        Self::intersection(&[Side::South, Side::East, Side::West])
    }

    /// Four-way intersection.
    #[must_use]
    pub fn four_way() -> Self {
        Self::intersection(&Side::ALL)
    }

    /// Returns the routes.
    #[must_use]
    pub fn routes(&self) -> &[(Side, Side)] {
        &self.routes
    }
}

impl TopologyGenerator for Routes {
    fn generate(&self, ctx: &TileContext, graph: &mut LaneGraph) -> Result<()> {
        let mut entries: HashMap<Side, Uuid> = HashMap::new();
        let mut exits: HashMap<Side, Uuid> = HashMap::new();
        for &(from, to) in &self.routes {
            let entry = *entries.entry(from).or_insert_with(|| {
                let (position, lane) = ctx.entry(from);
                graph.add_waypoint(position, lane)
            });
            let exit = *exits.entry(to).or_insert_with(|| {
                let (position, lane) = ctx.exit(to);
                graph.add_waypoint(position, lane)
            });
            graph.add_edge(entry, exit)?;
        }
        Ok(())
    }
}
