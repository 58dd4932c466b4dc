//! Integration tests for `/`-separated entity keys

use dtmap_foundation::key;

#[test]
fn parent_of_nested_key() {
    assert_eq!(key::parent("map_0/tile_0_1"), Some("map_0"));
    assert_eq!(key::parent("a/b/c"), Some("a/b"));
    assert_eq!(key::parent("map_0"), None);
}

#[test]
fn local_name_and_join() {
    assert_eq!(key::local_name("map_0/tile_0_1"), "tile_0_1");
    assert_eq!(key::join("map_0", "tile_0_1"), "map_0/tile_0_1");
    assert_eq!(key::join("", "map_0"), "map_0");
}

#[test]
fn direct_children_only() {
    assert!(key::is_child_of("map_0/tile_0_1", "map_0"));
    assert!(!key::is_child_of("map_0/tile_0_1/x", "map_0"));
    assert!(!key::is_child_of("map_01/tile", "map_0"));
}

#[test]
fn segments() {
    assert_eq!(key::segments("a/b/c").collect::<Vec<_>>(), vec!["a", "b", "c"]);
}
