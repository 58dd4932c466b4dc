//! Integration tests for Value and Type

use dtmap_foundation::{ErrorKind, FromValue, Record, Type, Value};

// =============================================================================
// Value Construction
// =============================================================================

#[test]
fn value_from_primitives() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(42i64), Value::Int(42));
    assert_eq!(Value::from(1.5), Value::Float(1.5));
    assert_eq!(Value::from("straight").as_str(), Some("straight"));
}

#[test]
fn value_from_option() {
    assert!(Value::from(None::<&str>).is_nil());
    assert_eq!(Value::from(Some("map_0")), Value::from("map_0"));
}

#[test]
fn value_types() {
    assert_eq!(Value::Nil.value_type(), Type::Nil);
    assert_eq!(Value::Int(1).value_type(), Type::Int);
    assert_eq!(Value::Float(1.0).value_type(), Type::Float);
    assert_eq!(Value::Record(Record::new()).value_type(), Type::Record);
}

// =============================================================================
// Equality
// =============================================================================

#[test]
fn float_equality_is_bitwise() {
    assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    assert_ne!(Value::Float(0.0), Value::Float(-0.0));
}

#[test]
fn int_and_float_are_distinct_values() {
    assert_ne!(Value::Int(1), Value::Float(1.0));
    assert_eq!(Value::Int(1).as_number(), Value::Float(1.0).as_number());
}

// =============================================================================
// Type Acceptance
// =============================================================================

#[test]
fn float_accepts_int() {
    assert!(Type::Float.accepts(&Type::Int));
    assert!(!Type::Int.accepts(&Type::Float));
}

#[test]
fn option_accepts_nil() {
    let ty = Type::option(Type::String);
    assert!(ty.accepts(&Type::Nil));
    assert!(ty.accepts(&Type::String));
    assert!(!ty.accepts(&Type::Int));
}

#[test]
fn any_accepts_everything() {
    for ty in [Type::Nil, Type::Bool, Type::Record, Type::seq(Type::Int)] {
        assert!(Type::Any.accepts(&ty));
    }
}

// =============================================================================
// Decoding
// =============================================================================

#[test]
fn decode_promotes_int_to_float() {
    assert_eq!(f64::from_value("x", &Value::Int(2)).unwrap(), 2.0);
}

#[test]
fn decode_type_mismatch_names_field() {
    let err = i64::from_value("pose.x", &Value::from("oops")).unwrap_err();
    match err.kind {
        ErrorKind::TypeMismatch { field, expected, actual } => {
            assert_eq!(field, "pose.x");
            assert_eq!(expected, Type::Int);
            assert_eq!(actual, Type::String);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn decode_option() {
    assert_eq!(Option::<String>::from_value("id", &Value::Nil).unwrap(), None);
    assert_eq!(
        Option::<String>::from_value("id", &Value::from("autobot01")).unwrap(),
        Some("autobot01".to_string())
    );
}
