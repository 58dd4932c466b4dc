//! Directed graphs of lane waypoints.

use std::collections::HashMap;

use dtmap_foundation::{Error, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use uuid::Uuid;

/// Which side of the road a waypoint lies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lane {
    /// Traffic heading south or west in tile-local coordinates.
    Left,
    /// Traffic heading north or east in tile-local coordinates.
    Right,
}

/// An anonymous point on a lane centerline.
#[derive(Clone, Debug, PartialEq)]
pub struct Waypoint {
    /// Graph-scoped identifier, never tied to an entity key.
    pub id: Uuid,
    /// Position in the tile map frame.
    pub position: [f64; 3],
    /// Lane side.
    pub lane: Lane,
}

/// A directed graph of waypoints. Edges encode legal travel direction.
#[derive(Clone, Debug, Default)]
pub struct LaneGraph {
    graph: DiGraph<Waypoint, ()>,
    index: HashMap<Uuid, NodeIndex>,
}

impl LaneGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a waypoint with a fresh id and returns the id.
    pub fn add_waypoint(&mut self, position: [f64; 3], lane: Lane) -> Uuid {
        let id = Uuid::new_v4();
        let idx = self.graph.add_node(Waypoint { id, position, lane });
        self.index.insert(id, idx);
        id
    }

    /// Adds a directed edge between two waypoints.
    ///
    /// # Errors
    ///
    /// Returns an internal error if either waypoint is not in the graph.
    pub fn add_edge(&mut self, from: Uuid, to: Uuid) -> Result<()> {
        let from = self.node(from)?;
        let to = self.node(to)?;
        self.graph.update_edge(from, to, ());
        Ok(())
    }

    fn node(&self, id: Uuid) -> Result<NodeIndex> {
        self.index
            .get(&id)
            .copied()
            .ok_or_else(|| Error::internal(format!("waypoint {id} is not in the graph")))
    }

    /// Returns the number of waypoints.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns true if the graph has no waypoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Looks up a waypoint by id.
    #[must_use]
    pub fn waypoint(&self, id: Uuid) -> Option<&Waypoint> {
        self.index.get(&id).map(|&idx| &self.graph[idx])
    }

    /// Iterates over all waypoints.
    pub fn waypoints(&self) -> impl Iterator<Item = &Waypoint> {
        self.graph.node_indices().map(|idx| &self.graph[idx])
    }

    /// Iterates over all edges as `(from, to)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&Waypoint, &Waypoint)> {
        self.graph
            .edge_references()
            .map(|e| (&self.graph[e.source()], &self.graph[e.target()]))
    }

    /// Returns the waypoints reachable from `id` in one step.
    #[must_use]
    pub fn successors(&self, id: Uuid) -> Vec<&Waypoint> {
        self.index.get(&id).map_or_else(Vec::new, |&idx| {
            self.graph
                .neighbors(idx)
                .map(|n| &self.graph[n])
                .collect()
        })
    }

    /// Moves every waypoint and edge of `other` into this graph.
    ///
    /// Waypoint ids are kept; they are fresh per generator call, so the
    /// result is a disjoint union.
    pub fn union(&mut self, other: LaneGraph) {
        let (nodes, edges) = other.graph.into_nodes_edges();
        let mut remap = Vec::with_capacity(nodes.len());
        for node in nodes {
            let id = node.weight.id;
            let idx = self.graph.add_node(node.weight);
            self.index.insert(id, idx);
            remap.push(idx);
        }
        for edge in edges {
            self.graph
                .add_edge(remap[edge.source().index()], remap[edge.target().index()], ());
        }
    }

    /// Returns the underlying petgraph graph.
    #[must_use]
    pub fn as_digraph(&self) -> &DiGraph<Waypoint, ()> {
        &self.graph
    }
}
