//! Standard map entity kinds for dtmap.
//!
//! This crate provides:
//! - One entity kind per standard layer ([`Frame`], [`TileMap`], [`Tile`],
//!   [`Citizen`], [`Vehicle`], [`TrafficSign`], [`GroundTag`], [`Watchtower`])
//! - Their closed enumerations ([`TileType`], [`Orientation`], ...)
//! - [`standard_kind`] to bind a layer name to its kind
//! - Tile lookup by grid cell ([`find_tile`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod citizen;
pub mod enums;
pub mod frame;
pub mod ground_tag;
pub mod kinds;
pub mod tile;
pub mod tile_map;
pub mod traffic_sign;
pub mod typed;
pub mod vehicle;
pub mod watchtower;

pub use citizen::{CITIZEN_KIND, Citizen};
pub use enums::{
    CitizenColor, Orientation, TileType, TrafficSignType, VehicleColor, VehicleType,
    WatchtowerType,
};
pub use frame::{FRAME_KIND, Frame, Pose3D};
pub use ground_tag::{GROUND_TAG_KIND, GroundTag};
pub use kinds::{STANDARD_LAYERS, standard_kind};
pub use tile::{TILE_KIND, Tile};
pub use tile_map::{TILE_MAP_KIND, TileMap, TileSize, find_tile};
pub use traffic_sign::{TRAFFIC_SIGN_KIND, TrafficSign};
pub use typed::{Placeable, TypedView};
pub use vehicle::{VEHICLE_KIND, Vehicle};
pub use watchtower::{WATCHTOWER_KIND, Watchtower};
