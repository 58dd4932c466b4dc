//! Standard layer names and their entity kinds.

use std::sync::Arc;

use dtmap_document::EntityKind;
use once_cell::sync::Lazy;

use crate::{citizen, frame, ground_tag, tile, tile_map, traffic_sign, vehicle, watchtower};

/// Names of the layers with a standard entity kind, in canonical order.
pub const STANDARD_LAYERS: [&str; 8] = [
    frame::LAYER,
    tile_map::LAYER,
    tile::LAYER,
    citizen::LAYER,
    vehicle::LAYER,
    traffic_sign::LAYER,
    watchtower::LAYER,
    ground_tag::LAYER,
];

/// Returns the standard entity kind for a layer name, if there is one.
#[must_use]
pub fn standard_kind(layer: &str) -> Option<Arc<EntityKind>> {
    let kind = match layer {
        frame::LAYER => &frame::FRAME_KIND,
        tile_map::LAYER => &tile_map::TILE_MAP_KIND,
        tile::LAYER => &tile::TILE_KIND,
        citizen::LAYER => &citizen::CITIZEN_KIND,
        vehicle::LAYER => &vehicle::VEHICLE_KIND,
        traffic_sign::LAYER => &traffic_sign::TRAFFIC_SIGN_KIND,
        watchtower::LAYER => &watchtower::WATCHTOWER_KIND,
        ground_tag::LAYER => &ground_tag::GROUND_TAG_KIND,
        _ => return None,
    };
    Some(Arc::clone(Lazy::force(kind)))
}
