//! Layer filters: key prefix plus field equality constraints.

use dtmap_foundation::{Record, Result, Value};

use crate::view::EntityView;

/// Selects entries of a layer.
///
/// ```
/// use dtmap_document::Filter;
///
/// let filter = Filter::new().prefix("map_0/").eq("i", 0).eq("j", 1);
/// assert!(filter.matches_key("map_0/tile_0_1"));
/// assert!(!filter.matches_key("map_1/tile_0_1"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filter {
    prefix: Option<String>,
    constraints: Vec<(String, Value)>,
}

impl Filter {
    /// Creates a filter that matches every entry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts matches to keys starting with `prefix` (literal match).
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Adds a `field == value` constraint.
    #[must_use]
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.constraints.push((field.into(), value.into()));
        self
    }

    /// Returns the key prefix, if any.
    #[must_use]
    pub fn key_prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Returns the field constraints.
    #[must_use]
    pub fn constraints(&self) -> &[(String, Value)] {
        &self.constraints
    }

    /// Returns true if `key` satisfies the prefix.
    #[must_use]
    pub fn matches_key(&self, key: &str) -> bool {
        self.prefix.as_deref().is_none_or(|p| key.starts_with(p))
    }

    pub(crate) fn matches_view(&self, view: &EntityView) -> Result<bool> {
        for (field, expected) in &self.constraints {
            if !values_match(&view.read(field)?, expected) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub(crate) fn matches_record(&self, record: &Record) -> bool {
        self.constraints.iter().all(|(field, expected)| {
            let path: Vec<&str> = field.split('.').collect();
            record
                .get_path(&path)
                .is_some_and(|actual| values_match(actual, expected))
        })
    }
}

/// Equality with numeric promotion, so `1` matches a stored `1.0`.
fn values_match(actual: &Value, expected: &Value) -> bool {
    match (actual.as_number(), expected.as_number()) {
        #[allow(clippy::float_cmp)]
        (Some(a), Some(b)) => a == b,
        _ => actual == expected,
    }
}
