//! Ordered persistent collections with structural sharing.
//!
//! These are thin wrappers around the `im` crate's persistent data structures.
//! Map documents are order-sensitive (layers list entries in file order and
//! filters return matches in that order), so the map type here remembers
//! insertion order on top of a hashed index.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::sync::Arc;

use crate::error::Error;
use crate::value::Value;

/// Persistent vector with structural sharing.
///
/// Cloning is O(1). Modifications return a new vector sharing structure
/// with the original.
#[derive(Clone, Default)]
pub struct SeqVec<T>(im::Vector<T>)
where
    T: Clone;

impl<T: Clone> SeqVec<T> {
    /// Creates an empty vector.
    #[must_use]
    pub fn new() -> Self {
        Self(im::Vector::new())
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the vector is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets an element by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a new vector with the element appended.
    #[must_use]
    pub fn push_back(&self, value: T) -> Self {
        let mut new = self.0.clone();
        new.push_back(value);
        Self(new)
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for SeqVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone + PartialEq> PartialEq for SeqVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Clone + Eq> Eq for SeqVec<T> {}

impl<T: Clone + Hash> Hash for SeqVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Clone> FromIterator<T> for SeqVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(im::Vector::from_iter(iter))
    }
}

impl<'a, T: Clone> IntoIterator for &'a SeqVec<T> {
    type Item = &'a T;
    type IntoIter = im::vector::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Persistent string-keyed map that iterates in insertion order.
///
/// Cloning is O(1). Replacing the value of an existing key keeps its
/// position; removing a key closes the gap.
#[derive(Clone)]
pub struct OrderedMap<V>
where
    V: Clone,
{
    order: im::Vector<Arc<str>>,
    entries: im::HashMap<Arc<str>, V>,
}

impl<V: Clone> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> OrderedMap<V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            order: im::Vector::new(),
            entries: im::HashMap::new(),
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Gets a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Gets a mutable reference to a value by key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    /// Returns true if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts a value, returning the previous value for the key if any.
    pub fn insert(&mut self, key: impl Into<Arc<str>>, value: V) -> Option<V> {
        let key = key.into();
        let previous = self.entries.insert(Arc::clone(&key), value);
        if previous.is_none() {
            self.order.push_back(key);
        }
        previous
    }

    /// Returns a new map with the key-value pair inserted.
    #[must_use]
    pub fn with(mut self, key: impl Into<Arc<str>>, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// Removes a key, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let value = self.entries.remove(key)?;
        if let Some(index) = self.order.iter().position(|k| &**k == key) {
            self.order.remove(index);
        }
        Some(value)
    }

    /// Returns an iterator over key-value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.order
            .iter()
            .filter_map(|k| self.entries.get(k).map(|v| (&**k, v)))
    }

    /// Returns an iterator over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|k| &**k)
    }

    /// Returns an iterator over shared key handles in insertion order.
    pub fn key_handles(&self) -> impl Iterator<Item = &Arc<str>> {
        self.order.iter()
    }

    /// Returns an iterator over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }
}

impl<V: Clone + fmt::Debug> fmt::Debug for OrderedMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// Equality ignores insertion order, like comparing two mappings.
impl<V: Clone + PartialEq> PartialEq for OrderedMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|ov| ov == v))
    }
}

impl<V: Clone + Eq> Eq for OrderedMap<V> {}

impl<V: Clone + Hash> Hash for OrderedMap<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Order-independent: combine per-entry hashes with xor.
        let mut acc = 0u64;
        for (k, v) in self.iter() {
            let mut h = std::collections::hash_map::DefaultHasher::new();
            k.hash(&mut h);
            v.hash(&mut h);
            acc ^= h.finish();
        }
        self.len().hash(state);
        acc.hash(state);
    }
}

impl<K: Into<Arc<str>>, V: Clone> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// A raw entity record: field name to value.
pub type Record = OrderedMap<Value>;

/// One layer's raw contents: entity key to record.
pub type RecordTable = OrderedMap<Record>;

impl OrderedMap<Value> {
    /// Resolves a nested field path (`["pose", "x"]`).
    ///
    /// Returns `None` if any segment is missing or an intermediate value is
    /// not a record.
    #[must_use]
    pub fn get_path(&self, path: &[&str]) -> Option<&Value> {
        let (last, parents) = path.split_last()?;
        let mut current = self;
        for segment in parents {
            current = current.get(segment)?.as_record()?;
        }
        current.get(last)
    }

    /// Writes a value at a nested field path, creating missing intermediate
    /// records.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty or an intermediate segment holds
    /// a non-record value. The record is left unchanged in that case.
    pub fn set_path(&mut self, path: &[&str], value: Value) -> crate::Result<()> {
        let Some((first, rest)) = path.split_first() else {
            return Err(Error::internal("empty field path"));
        };
        if rest.is_empty() {
            self.insert(*first, value);
            return Ok(());
        }
        let mut child = match self.get(first) {
            None | Some(Value::Nil) => Record::new(),
            Some(Value::Record(record)) => record.clone(),
            Some(other) => {
                return Err(Error::type_mismatch(
                    (*first).to_string(),
                    crate::Type::Record,
                    other.value_type(),
                ));
            }
        };
        child.set_path(rest, value)?;
        self.insert(*first, Value::Record(child));
        Ok(())
    }
}
