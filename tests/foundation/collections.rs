//! Integration tests for ordered persistent collections
//!
//! Tests OrderedMap, Record, and RecordTable ordering, sharing, and paths.

use dtmap_foundation::{SeqVec, OrderedMap, Record, RecordTable, Value};

// =============================================================================
// OrderedMap
// =============================================================================

#[test]
fn iteration_follows_insertion_order() {
    let table: RecordTable = ["map_0/tile_2_0", "map_0/tile_0_0", "map_0/tile_1_0"]
        .into_iter()
        .map(|k| (k, Record::new()))
        .collect();
    assert_eq!(
        table.keys().collect::<Vec<_>>(),
        vec!["map_0/tile_2_0", "map_0/tile_0_0", "map_0/tile_1_0"]
    );
}

#[test]
fn clone_is_independent() {
    let mut a: OrderedMap<i64> = [("a", 1)].into_iter().collect();
    let b = a.clone();
    a.insert("b", 2);
    assert_eq!(a.len(), 2);
    assert_eq!(b.len(), 1);
}

#[test]
fn equality_ignores_order() {
    let a: OrderedMap<i64> = [("a", 1), ("b", 2)].into_iter().collect();
    let b: OrderedMap<i64> = [("b", 2), ("a", 1)].into_iter().collect();
    assert_eq!(a, b);
}

#[test]
fn remove_then_reinsert_moves_to_end() {
    let mut map: OrderedMap<i64> = [("a", 1), ("b", 2)].into_iter().collect();
    map.remove("a");
    map.insert("a", 3);
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "a"]);
}

// =============================================================================
// Record Paths
// =============================================================================

#[test]
fn set_path_creates_intermediate_records() {
    let mut record = Record::new();
    record.set_path(&["pose", "x"], Value::Float(0.5)).unwrap();
    record.set_path(&["pose", "y"], Value::Float(1.5)).unwrap();
    assert_eq!(record.get_path(&["pose", "x"]), Some(&Value::Float(0.5)));
    assert_eq!(record.get_path(&["pose", "y"]), Some(&Value::Float(1.5)));
    assert_eq!(record.get("pose").and_then(Value::as_record).map(Record::len), Some(2));
}

#[test]
fn set_path_through_scalar_fails_without_change() {
    let mut record = Record::new().with("pose", Value::Int(3));
    assert!(record.set_path(&["pose", "x"], Value::Float(0.5)).is_err());
    assert_eq!(record.get("pose"), Some(&Value::Int(3)));
}

#[test]
fn get_path_missing() {
    let record = Record::new().with("a", Value::Int(1));
    assert_eq!(record.get_path(&["a", "b"]), None);
    assert_eq!(record.get_path(&["z"]), None);
    assert_eq!(record.get_path(&[]), None);
}

// =============================================================================
// SeqVec
// =============================================================================

#[test]
fn vector_push_back_is_persistent() {
    let v1 = SeqVec::new().push_back(Value::Int(1));
    let v2 = v1.push_back(Value::Int(2));
    assert_eq!(v1.len(), 1);
    assert_eq!(v2.len(), 2);
    assert_eq!(v2.get(1), Some(&Value::Int(2)));
}
