//! Tiles, tile maps, and derived grid coordinates

use dtmap_document::{ErrorKind, Filter, Value};
use dtmap_entities::{
    Frame, Orientation, Placeable, Tile, TileMap, TileType, TypedView, find_tile,
};
use proptest::prelude::*;

use crate::common;

#[test]
fn loop_tiles_have_grid_coordinates() {
    let doc = common::load("loop");
    let map = TileMap::get(&doc, "map_0").unwrap();
    let tiles = map.tiles().unwrap();
    assert_eq!(tiles.len(), 9);
    for tile in &tiles {
        let (i, j) = (tile.i().unwrap(), tile.j().unwrap());
        assert_eq!(tile.key(), format!("map_0/tile_{i}_{j}"));
    }
}

#[test]
fn tile_size() {
    let doc = common::load("loop");
    let size = TileMap::get(&doc, "map_0").unwrap().tile_size();
    assert!((size.x().unwrap() - 0.585).abs() < 1e-12);
    assert!((size.y().unwrap() - 0.585).abs() < 1e-12);
}

#[test]
fn filter_by_derived_coordinates() {
    let doc = common::load("loop");
    let tiles = doc.layer("tiles").unwrap();
    assert_eq!(tiles.filter(&Filter::new().eq("i", 0)).unwrap().len(), 3);
    assert_eq!(tiles.filter(&Filter::new().eq("i", 0).eq("j", 1)).unwrap().len(), 1);
    assert_eq!(
        tiles
            .filter(&Filter::new().prefix("map_0/").eq("type", "curve"))
            .unwrap()
            .len(),
        4
    );
}

#[test]
fn find_tile_by_cell() {
    let doc = common::load("loop");
    let tile = find_tile(&doc, "map_0", 1, 1).unwrap().unwrap();
    assert_eq!(tile.key(), "map_0/tile_1_1");
    assert_eq!(tile.tile_type().unwrap(), TileType::Asphalt);
    assert!(find_tile(&doc, "map_0", 5, 5).unwrap().is_none());
    assert!(find_tile(&doc, "map_9", 0, 0).unwrap_err().is_not_found());
}

#[test]
fn setting_coordinates_moves_the_frame() {
    let doc = common::load("loop");
    let tile = Tile::get(&doc, "map_0/tile_1_1").unwrap();
    tile.set_i(4).unwrap();
    tile.set_j(-2).unwrap();
    assert_eq!(tile.i().unwrap(), 4);
    assert_eq!(tile.j().unwrap(), -2);

    let pose = tile.frame().unwrap().pose();
    assert!((pose.x().unwrap() - common::cell_center(4)).abs() < 1e-9);
    assert!((pose.y().unwrap() - common::cell_center(-2)).abs() < 1e-9);
}

#[test]
fn enum_value_and_literal_are_equivalent() {
    let doc = common::load("loop");
    let tile = Tile::get(&doc, "map_0/tile_1_1").unwrap();

    tile.view().write("type", "4way").unwrap();
    assert_eq!(tile.tile_type().unwrap(), TileType::FourWay);

    tile.set_tile_type(TileType::ThreeWay).unwrap();
    assert_eq!(tile.view().read("type").unwrap(), Value::from("3way"));

    tile.set_orientation(Orientation::W).unwrap();
    assert_eq!(
        doc.layer("tiles").unwrap().record("map_0/tile_1_1").unwrap().get("orientation"),
        Some(&Value::from("W"))
    );
}

#[test]
fn unknown_literal_is_rejected() {
    let doc = common::load("loop");
    let tile = Tile::get(&doc, "map_0/tile_0_0").unwrap();
    let err = tile.view().write("type", "roundabout").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidValue { .. }));
    assert_eq!(tile.tile_type().unwrap(), TileType::Curve);

    let err = tile.view().write("orientation", 3).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
}

#[test]
fn rejected_coordinate_writes_keep_the_frame() {
    let doc = common::load("loop");
    let tile = Tile::get(&doc, "map_0/tile_2_1").unwrap();
    let pose = tile.frame().unwrap().pose();
    let x = pose.x().unwrap();
    let i = tile.i().unwrap();

    let err = tile.view().write("i", "x").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
    assert_eq!(pose.x().unwrap().to_bits(), x.to_bits());
    assert_eq!(tile.i().unwrap(), i);

    let size = TileMap::get(&doc, "map_0").unwrap().tile_size();
    size.set_x(0.0).unwrap();
    let err = tile.set_i(7).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidValue { .. }));
    assert_eq!(pose.x().unwrap().to_bits(), x.to_bits());

    size.set_x(0.585).unwrap();
    assert_eq!(tile.i().unwrap(), i);
}

#[test]
fn tile_without_frame_has_no_coordinates() {
    let doc = common::load("loop");
    doc.layer("frames").unwrap().remove("map_0/tile_2_2");
    let tile = Tile::get(&doc, "map_0/tile_2_2").unwrap();
    let err = tile.i().unwrap_err();
    assert!(err.is_not_found());
    assert!(err.context.is_some());
}

#[test]
fn tile_map_link() {
    let doc = common::load("loop");
    let tile = Tile::get(&doc, "map_0/tile_0_2").unwrap();
    assert_eq!(tile.tile_map().unwrap().key(), "map_0");
    assert_eq!(
        tile.frame().unwrap().relative_to().unwrap().as_deref(),
        Some("map_0")
    );
    assert_eq!(Frame::get(&doc, "map_0").unwrap().relative_to().unwrap(), None);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn coordinate_round_trip(c in -50i64..50) {
        let doc = common::load("loop");
        let tile = Tile::get(&doc, "map_0/tile_0_0").unwrap();
        tile.set_i(c).unwrap();
        prop_assert_eq!(tile.i().unwrap(), c);
        let x = tile.frame().unwrap().pose().x().unwrap();
        prop_assert!((x - common::cell_center(c)).abs() < 1e-9);
    }
}
