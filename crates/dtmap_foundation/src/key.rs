//! Helpers for `/`-separated entity keys.
//!
//! A child entity's key is its parent's key followed by `/` and a local
//! segment (`map_0` → `map_0/tile_0_1`). Nothing enforces this at the table
//! level; entity kinds rely on it for relative placement.

/// Separator between key segments.
pub const SEPARATOR: char = '/';

/// Returns the parent key, or `None` for a top-level key.
#[must_use]
pub fn parent(key: &str) -> Option<&str> {
    key.rfind(SEPARATOR).map(|idx| &key[..idx])
}

/// Returns the last segment of a key.
#[must_use]
pub fn local_name(key: &str) -> &str {
    key.rfind(SEPARATOR).map_or(key, |idx| &key[idx + 1..])
}

/// Joins a parent key and a local segment.
#[must_use]
pub fn join(parent: &str, local: &str) -> String {
    if parent.is_empty() {
        local.to_string()
    } else {
        format!("{parent}{SEPARATOR}{local}")
    }
}

/// Returns true if `key` is a direct child of `parent`.
#[must_use]
pub fn is_child_of(key: &str, parent_key: &str) -> bool {
    parent(key) == Some(parent_key)
}

/// Iterates over the segments of a key.
pub fn segments(key: &str) -> impl Iterator<Item = &str> {
    key.split(SEPARATOR)
}
