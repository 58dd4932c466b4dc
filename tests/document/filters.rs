//! Layer filters by key prefix and field equality

use std::sync::Arc;

use dtmap_document::{
    Document, EntityKind, Entry, FieldSchema, Filter, Record, RecordTable, Type, Value,
};
use proptest::prelude::*;

fn flagged(flags: &[bool]) -> Document {
    let table: RecordTable = flags
        .iter()
        .enumerate()
        .map(|(i, &flag)| {
            let parent = if i % 2 == 0 { "even" } else { "odd" };
            let record = Record::new()
                .with("flag", Value::Bool(flag))
                .with("index", Value::Int(i64::try_from(i).unwrap()));
            (format!("{parent}/item_{i}"), record)
        })
        .collect();
    let kind = Arc::new(
        EntityKind::new("Item", "items")
            .with_field(FieldSchema::stored("flag", Type::Bool))
            .with_field(FieldSchema::stored("index", Type::Int)),
    );
    Document::builder("filters")
        .typed_layer("items", 1, table.clone(), kind)
        .layer("raw_items", 1, table)
        .build()
        .unwrap()
}

fn read_flag(entry: &Entry) -> bool {
    entry.read("flag").unwrap().as_bool().unwrap()
}

proptest! {
    #[test]
    fn filter_returns_exactly_the_matching_records(flags in prop::collection::vec(any::<bool>(), 0..40)) {
        let doc = flagged(&flags);
        let expected = flags.iter().filter(|f| **f).count();
        let expected_even = flags.iter().step_by(2).filter(|f| **f).count();

        for layer in ["items", "raw_items"] {
            let layer = doc.layer(layer).unwrap();
            let hits = layer.filter(&Filter::new().eq("flag", true)).unwrap();
            prop_assert_eq!(hits.len(), expected);
            prop_assert!(hits.iter().all(read_flag));

            let hits = layer.filter(&Filter::new().prefix("even/").eq("flag", true)).unwrap();
            prop_assert_eq!(hits.len(), expected_even);
            prop_assert!(hits.iter().all(|e| e.key().starts_with("even/") && read_flag(e)));

            prop_assert!(layer.filter(&Filter::new().prefix("none/")).unwrap().is_empty());
        }
    }
}

#[test]
fn filter_preserves_table_order() {
    let doc = flagged(&[true, true, false, true]);
    let keys: Vec<String> = doc
        .layer("items")
        .unwrap()
        .filter(&Filter::new().eq("flag", true))
        .unwrap()
        .iter()
        .map(|e| e.key().to_string())
        .collect();
    assert_eq!(keys, vec!["even/item_0", "odd/item_1", "odd/item_3"]);
}

#[test]
fn numbers_compare_across_int_and_float() {
    let doc = flagged(&[true, false, true]);
    let layer = doc.layer("items").unwrap();
    assert_eq!(layer.filter(&Filter::new().eq("index", 2.0)).unwrap().len(), 1);
    assert_eq!(layer.filter(&Filter::new().eq("index", 2)).unwrap().len(), 1);
}

#[test]
fn bound_filter_yields_views() {
    let doc = flagged(&[true]);
    let hits = doc.layer("items").unwrap().filter(&Filter::new()).unwrap();
    assert!(hits[0].as_view().is_some());
    let hits = doc.layer("raw_items").unwrap().filter(&Filter::new()).unwrap();
    assert!(hits[0].as_record_ref().is_some());
}
