//! Vehicles, citizens, signs, tags, and watchtowers

use dtmap_document::{ErrorKind, Filter, Value};
use dtmap_entities::{
    Citizen, CitizenColor, GroundTag, Placeable, STANDARD_LAYERS, TrafficSign, TrafficSignType,
    TypedView, Vehicle, VehicleColor, VehicleType, Watchtower, WatchtowerType,
};

use crate::common;

#[test]
fn every_standard_layer_is_bound() {
    let doc = common::load("minimal_autolab");
    for name in STANDARD_LAYERS {
        let layer = doc.layer(name).unwrap();
        assert_eq!(layer.kind().unwrap().layer, name);
    }
}

#[test]
fn vehicles() {
    let doc = common::load("minimal_autolab");
    let vehicle = Vehicle::get(&doc, "map_0/vehicle_0").unwrap();
    assert_eq!(vehicle.id().unwrap().as_deref(), Some("autobot01"));
    assert_eq!(vehicle.configuration().unwrap(), VehicleType::DB21M);
    assert_eq!(vehicle.color().unwrap(), VehicleColor::Red);

    vehicle.set_configuration(VehicleType::DBR4).unwrap();
    vehicle.set_color(VehicleColor::White).unwrap();
    vehicle.set_id(None).unwrap();
    assert_eq!(vehicle.configuration().unwrap(), VehicleType::DBR4);
    assert_eq!(vehicle.color().unwrap(), VehicleColor::White);
    assert_eq!(vehicle.id().unwrap(), None);

    let other = Vehicle::get(&doc, "map_0/vehicle_1").unwrap();
    assert_eq!(other.id().unwrap(), None);
    assert!((other.frame().unwrap().pose().x().unwrap() - 0.9).abs() < 1e-12);
}

#[test]
fn citizens() {
    let doc = common::load("minimal_autolab");
    let duckie = Citizen::get(&doc, "map_0/citizen_0").unwrap();
    assert_eq!(duckie.id().unwrap().as_deref(), Some("duckie_0"));
    assert_eq!(duckie.color().unwrap(), CitizenColor::Yellow);
    duckie.set_color(CitizenColor::Green).unwrap();
    duckie.set_id(Some("duckie_9")).unwrap();
    assert_eq!(duckie.color().unwrap(), CitizenColor::Green);
    assert_eq!(duckie.id().unwrap().as_deref(), Some("duckie_9"));
}

#[test]
fn traffic_signs() {
    let doc = common::load("minimal_autolab");
    let sign = TrafficSign::get(&doc, "map_0/sign_1").unwrap();
    assert_eq!(sign.sign_type().unwrap(), TrafficSignType::TIntersection);
    assert_eq!(sign.id().unwrap(), 58);
    assert_eq!(sign.family().unwrap(), "36h11");

    sign.set_sign_type(TrafficSignType::DuckCrossing).unwrap();
    sign.set_id(59).unwrap();
    sign.set_family("tag16h5").unwrap();
    assert_eq!(
        sign.view().read("type").unwrap(),
        Value::from("duck_crossing")
    );
    assert_eq!(sign.id().unwrap(), 59);
    assert_eq!(sign.family().unwrap(), "tag16h5");
}

#[test]
fn ground_tags() {
    let doc = common::load("minimal_autolab");
    let tag = GroundTag::get(&doc, "map_0/tag_0").unwrap();
    assert!((tag.size().unwrap() - 0.065).abs() < 1e-12);
    assert_eq!(tag.id().unwrap(), 300);
    assert_eq!(tag.family().unwrap(), "36h11");

    tag.set_size(0.08).unwrap();
    tag.set_id(301).unwrap();
    tag.set_family("tag36h11").unwrap();
    assert!((tag.size().unwrap() - 0.08).abs() < 1e-12);
    assert_eq!(tag.id().unwrap(), 301);
    assert_eq!(tag.family().unwrap(), "tag36h11");
}

#[test]
fn ground_tag_size_accepts_int() {
    let doc = common::load("minimal_autolab");
    let tag = GroundTag::get(&doc, "map_0/tag_0").unwrap();
    tag.view().write("size", 1).unwrap();
    assert_eq!(tag.view().read("size").unwrap(), Value::Float(1.0));
}

#[test]
fn watchtowers() {
    let doc = common::load("minimal_autolab");
    let towers = doc.layer("watchtowers").unwrap();
    let wt18 = towers
        .filter(&Filter::new().eq("configuration", WatchtowerType::WT18))
        .unwrap();
    assert_eq!(wt18.len(), 2);

    let tower = Watchtower::get(&doc, "map_0/watchtower_2").unwrap();
    assert_eq!(tower.configuration().unwrap(), WatchtowerType::WT19);
    tower.set_configuration(WatchtowerType::WT21).unwrap();
    tower.set_id(Some("watchtower03")).unwrap();
    assert_eq!(tower.configuration().unwrap(), WatchtowerType::WT21);
    assert_eq!(tower.id().unwrap().as_deref(), Some("watchtower03"));
}

#[test]
fn filter_on_undeclared_field() {
    let doc = common::load("minimal_autolab");
    let err = doc
        .layer("vehicles")
        .unwrap()
        .filter(&Filter::new().eq("speed", 1))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::FieldNotFound { .. }));
}

#[test]
fn placeables_resolve_frames() {
    let doc = common::load("minimal_autolab");
    let sign = TrafficSign::get(&doc, "map_0/sign_0").unwrap();
    assert_eq!(sign.frame().unwrap().key(), "map_0/sign_0");
    let tower = Watchtower::get(&doc, "map_0/watchtower_1").unwrap();
    assert!((tower.frame().unwrap().pose().x().unwrap() - 1.17).abs() < 1e-12);
}
