//! Runtime entity kinds bound to layers with no standard kind

use std::sync::Arc;

use dtmap_document::{Entry, EntityKind, EntityView, ErrorKind, FieldSchema, Type, Value};

use crate::common;

fn person_kind() -> Arc<EntityKind> {
    Arc::new(
        EntityKind::new("Person", "people")
            .with_field(FieldSchema::stored("name", Type::String))
            .with_field(FieldSchema::stored("age", Type::Int)),
    )
}

#[test]
fn unbound_layer_yields_raw_records() {
    let doc = common::load("custom_layers");
    let people = doc.layer("people").unwrap();
    assert!(people.kind().is_none());
    assert_eq!(people.len(), 2);

    let entry = people.get("person_0").unwrap();
    let record = entry.as_record_ref().unwrap();
    assert_eq!(record.get("name").unwrap(), Some(Value::from("John")));
    assert_eq!(record.get("height").unwrap(), None);
}

#[test]
fn registered_kind_yields_views() {
    let doc = common::load("custom_layers");
    let people = doc.layer("people").unwrap();
    people.register_entity_view(person_kind()).unwrap();

    let Entry::View(john) = people.get("person_0").unwrap() else {
        panic!("expected a typed view");
    };
    assert_eq!(john.read_as::<String>("name").unwrap(), "John");
    assert_eq!(john.read_as::<i64>("age").unwrap(), 27);

    john.write("age", 28).unwrap();
    assert_eq!(
        people.record("person_0").unwrap().get("age"),
        Some(&Value::Int(28))
    );

    let again = people.view("person_0").unwrap();
    assert!(EntityView::ptr_eq(&john, &again));
}

#[test]
fn raw_and_typed_access_share_one_record() {
    let doc = common::load("custom_layers");
    let people = doc.layer("people").unwrap();
    let raw = people.get("person_1").unwrap();
    people.register_entity_view(person_kind()).unwrap();
    let view = people.view("person_1").unwrap();

    raw.as_record_ref().unwrap().set("name", "Janet").unwrap();
    assert_eq!(view.read("name").unwrap(), Value::from("Janet"));

    view.write("name", "Jo").unwrap();
    assert_eq!(raw.read("name").unwrap(), Value::from("Jo"));
}

#[test]
fn typed_writes_are_validated() {
    let doc = common::load("custom_layers");
    let people = doc.layer("people").unwrap();
    people.register_entity_view(person_kind()).unwrap();
    let view = people.view("person_0").unwrap();

    let err = view.write("age", "twenty").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
    assert_eq!(view.read_as::<i64>("age").unwrap(), 27);

    let err = view.read("height").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::FieldNotFound { .. }));
}

#[test]
fn kind_for_another_layer_is_rejected() {
    let doc = common::load("custom_layers");
    let people = doc.layer("people").unwrap();
    let kind = Arc::new(EntityKind::new("Robot", "robots"));
    let err = people.register_entity_view(kind).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidLayer { .. }));
}

#[test]
fn domain_restricted_field() {
    let doc = common::load("custom_layers");
    let people = doc.layer("people").unwrap();
    let kind = Arc::new(
        EntityKind::new("Person", "people")
            .with_field(FieldSchema::stored("name", Type::String).with_domain(["John", "Jane"])),
    );
    people.register_entity_view(kind).unwrap();
    let view = people.view("person_0").unwrap();

    view.write("name", "Jane").unwrap();
    let err = view.write("name", "Bob").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidValue { .. }));
    assert_eq!(view.read("name").unwrap(), Value::from("Jane"));
}
