//! Directory-backed map assets

use dtmap_document::AssetStore;
use dtmap_io::{DirAssetStore, load_from_dir};

use crate::common;

#[test]
fn fixture_asset_is_readable() {
    let doc = common::load("minimal_autolab");
    let asset = doc.asset("map_0/tag_0", "notes.txt").unwrap();
    assert!(asset.exists());
    assert_eq!(asset.read_to_string().unwrap(), "apriltag 300\n");
    assert!(!doc.asset("map_0/tag_0", "missing.png").unwrap().exists());
}

#[test]
fn writes_land_in_assets_directory() {
    common::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("m")).unwrap();
    let doc = load_from_dir("m", dir.path()).unwrap();

    doc.asset("map_0/watchtower_0", "calibration.yaml")
        .unwrap()
        .write("k: 1\n")
        .unwrap();

    let file = dir.path().join("m/assets/map_0/watchtower_0/calibration.yaml");
    assert_eq!(std::fs::read_to_string(file).unwrap(), "k: 1\n");

    let store = DirAssetStore::new(dir.path().join("m/assets"));
    assert!(store.exists("map_0/watchtower_0/calibration.yaml"));
}
