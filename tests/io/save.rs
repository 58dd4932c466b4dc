//! Saving documents and loading them back

use dtmap_entities::{Orientation, Tile, TileType, TypedView, Vehicle, VehicleType};
use dtmap_io::{load_from_dir, save_to_dir};

use crate::common;

#[test]
fn round_trip_preserves_typed_writes() {
    let doc = common::load("loop");
    let tile = Tile::get(&doc, "map_0/tile_1_1").unwrap();
    tile.set_tile_type(TileType::FourWay).unwrap();
    tile.set_orientation(Orientation::S).unwrap();
    tile.set_i(7).unwrap();

    let dir = tempfile::tempdir().unwrap();
    save_to_dir(&doc, dir.path().join("loop")).unwrap();
    let reloaded = load_from_dir("loop", dir.path()).unwrap();

    let tile = Tile::get(&reloaded, "map_0/tile_1_1").unwrap();
    assert_eq!(tile.tile_type().unwrap(), TileType::FourWay);
    assert_eq!(tile.orientation().unwrap(), Orientation::S);
    assert_eq!(tile.i().unwrap(), 7);
    assert_eq!(tile.j().unwrap(), 1);
}

#[test]
fn round_trip_preserves_layers_and_records() {
    let doc = common::load("minimal_autolab");
    let dir = tempfile::tempdir().unwrap();
    save_to_dir(&doc, dir.path().join("copy")).unwrap();
    let copy = load_from_dir("copy", dir.path()).unwrap();

    assert_eq!(
        copy.layer_names().collect::<Vec<_>>(),
        doc.layer_names().collect::<Vec<_>>()
    );
    for layer in doc.layers() {
        let other = copy.layer(layer.name()).unwrap();
        assert_eq!(other.as_raw_mapping(), layer.as_raw_mapping());
        assert_eq!(other.version(), layer.version());
        assert_eq!(other.keys(), layer.keys());
    }
}

#[test]
fn saving_twice_overwrites() {
    let doc = common::load("minimal_autolab");
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("m");
    save_to_dir(&doc, &target).unwrap();

    Vehicle::get(&doc, "map_0/vehicle_1")
        .unwrap()
        .set_configuration(VehicleType::DB18)
        .unwrap();
    save_to_dir(&doc, &target).unwrap();

    let copy = load_from_dir("m", dir.path()).unwrap();
    let vehicle = Vehicle::get(&copy, "map_0/vehicle_1").unwrap();
    assert_eq!(vehicle.configuration().unwrap(), VehicleType::DB18);
    assert_eq!(vehicle.key(), "map_0/vehicle_1");
}

#[test]
fn empty_layers_survive() {
    let doc = common::load("minimal");
    let dir = tempfile::tempdir().unwrap();
    save_to_dir(&doc, dir.path().join("minimal")).unwrap();
    let copy = load_from_dir("minimal", dir.path()).unwrap();
    assert_eq!(copy.layer_count(), 3);
    assert!(copy.layers().all(|layer| layer.is_empty()));
}
