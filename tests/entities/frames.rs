//! Frames and poses

use dtmap_entities::{Frame, TypedView};

use crate::common;

#[test]
fn pose_of_map_frame() {
    let doc = common::load("loop");
    let pose = Frame::get(&doc, "map_0").unwrap().pose();
    assert!((pose.x().unwrap() - 1.0).abs() < 1e-12);
    assert!((pose.y().unwrap() - 2.0).abs() < 1e-12);
    assert!(pose.yaw().unwrap().abs() < 1e-12);
}

#[test]
fn pose_round_trip_every_axis() {
    let doc = common::load("loop");
    let frame = Frame::get(&doc, "map_0/tile_1_1").unwrap();
    let pose = frame.pose();
    pose.set_x(1.0).unwrap();
    pose.set_y(2.0).unwrap();
    pose.set_z(3.0).unwrap();
    pose.set_roll(0.1).unwrap();
    pose.set_pitch(0.2).unwrap();
    pose.set_yaw(0.3).unwrap();

    let again = Frame::get(&doc, "map_0/tile_1_1").unwrap().pose();
    let read = [
        again.x().unwrap(),
        again.y().unwrap(),
        again.z().unwrap(),
        again.roll().unwrap(),
        again.pitch().unwrap(),
        again.yaw().unwrap(),
    ];
    assert_eq!(read, [1.0, 2.0, 3.0, 0.1, 0.2, 0.3]);
    assert_eq!(again.frame(), &frame);
}

#[test]
fn relative_to_missing_frame_is_accepted() {
    let doc = common::load("loop");
    let frame = Frame::get(&doc, "map_0/tile_1_1").unwrap();
    frame.set_relative_to(Some("map_99")).unwrap();
    assert_eq!(frame.relative_to().unwrap().as_deref(), Some("map_99"));
    assert!(frame.resolve_parent().unwrap_err().is_not_found());

    frame.set_relative_to(None).unwrap();
    assert!(frame.resolve_parent().unwrap().is_none());
}

#[test]
fn every_frame_listed() {
    let doc = common::load("loop");
    assert_eq!(Frame::all(&doc).unwrap().len(), 10);
}
