//! Lane connectivity graphs for dtmap tile maps.
//!
//! This crate provides:
//! - [`LaneGraph`]: a directed graph of anonymous [`Waypoint`]s
//! - [`LaneGeometry`]: road marking dimensions used to place lanes
//! - [`TopologyGenerator`]: the per-tile topology contract, with built-in
//!   [`Routes`] for every standard tile type
//! - [`LaneGraphBuilder`]: one graph per tile map, as the disjoint union of
//!   its tiles' local topologies

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builder;
pub mod generator;
pub mod geometry;
pub mod lane_graph;

pub use builder::LaneGraphBuilder;
pub use generator::{Routes, TopologyGenerator};
pub use geometry::{LaneGeometry, Side, TileContext, TileTransform};
pub use lane_graph::{Lane, LaneGraph, Waypoint};
