//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use dtmap_foundation::{Error, ErrorContext, ErrorKind, Type};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn entity_not_found_display() {
    let err = Error::entity_not_found("tiles", "map_0/tile_9_9");
    assert!(err.is_not_found());
    let msg = err.to_string();
    assert!(msg.contains("tiles"));
    assert!(msg.contains("map_0/tile_9_9"));
}

#[test]
fn type_mismatch_display() {
    let err = Error::type_mismatch("age", Type::Int, Type::String);
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
    let msg = err.to_string();
    assert!(msg.contains("age"));
    assert!(msg.contains("int"));
    assert!(msg.contains("string"));
}

#[test]
fn invalid_value_lists_allowed() {
    let err = Error::invalid_value("type", "roundabout", "straight, curve");
    let msg = err.to_string();
    assert!(msg.contains("roundabout"));
    assert!(msg.contains("straight, curve"));
}

#[test]
fn other_kinds() {
    assert!(matches!(
        Error::missing_layer("people").kind,
        ErrorKind::MissingLayer(ref l) if l == "people"
    ));
    assert!(matches!(
        Error::unsupported_tile_type("roundabout").kind,
        ErrorKind::UnsupportedTileType(_)
    ));
    assert!(matches!(
        Error::invalid_layer("tiles", "missing 'version'").kind,
        ErrorKind::InvalidLayer { .. }
    ));
    assert!(matches!(Error::io("boom").kind, ErrorKind::Io(_)));
    assert!(!Error::io("boom").is_not_found());
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_display() {
    let ctx = ErrorContext::new()
        .with_entity("tiles", "map_0/tile_0_0")
        .with_frame("Tile.i");
    let rendered = ctx.to_string();
    assert!(rendered.contains("tiles[map_0/tile_0_0]"));
    assert!(rendered.contains("in Tile.i"));
}

#[test]
fn with_context_keeps_kind() {
    let err = Error::entity_not_found("frames", "map_0/tile_0_0")
        .with_context(ErrorContext::new().with_frame("Tile.i"));
    assert!(err.is_not_found());
    assert_eq!(err.context.unwrap().stack, vec!["Tile.i".to_string()]);
}
