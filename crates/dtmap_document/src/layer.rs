//! Layers: named record tables with an optional bound entity kind.

use std::sync::Arc;

use dtmap_foundation::{Error, ErrorKind, Record, RecordTable, Result, Value};
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use tracing::debug;

use crate::document::Document;
use crate::entry::{Entry, RecordRef};
use crate::filter::Filter;
use crate::schema::EntityKind;
use crate::view::EntityView;

/// Storage behind a [`Layer`] handle.
#[derive(Debug)]
pub(crate) struct TypedLayer {
    name: Arc<str>,
    version: Value,
    table: RwLock<RecordTable>,
    kind: OnceCell<Arc<EntityKind>>,
}

impl TypedLayer {
    pub(crate) fn new(name: &str, version: Value, table: RecordTable) -> Self {
        Self {
            name: name.into(),
            version,
            table: RwLock::new(table),
            kind: OnceCell::new(),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn name_handle(&self) -> &Arc<str> {
        &self.name
    }

    pub(crate) fn bind(&self, kind: Arc<EntityKind>) -> Result<()> {
        if kind.layer != *self.name {
            return Err(Error::invalid_layer(
                &*self.name,
                format!(
                    "entity kind '{}' belongs to layer '{}'",
                    kind.name, kind.layer
                ),
            ));
        }
        let kind_name = kind.name.clone();
        self.kind.set(kind).map_err(|_| {
            Error::new(ErrorKind::KindAlreadyRegistered {
                layer: self.name.to_string(),
            })
        })?;
        debug!(layer = %self.name, kind = %kind_name, "bound entity kind");
        Ok(())
    }

    pub(crate) fn kind(&self) -> Option<&Arc<EntityKind>> {
        self.kind.get()
    }

    pub(crate) fn not_found(&self, key: &str) -> Error {
        Error::entity_not_found(&*self.name, key)
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.table.read().contains_key(key)
    }

    pub(crate) fn snapshot(&self) -> RecordTable {
        self.table.read().clone()
    }

    pub(crate) fn record(&self, key: &str) -> Result<Record> {
        self.table
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| self.not_found(key))
    }

    /// Reads a nested path of a record; absent fields read as nil.
    pub(crate) fn read_path(&self, key: &str, path: &[&str]) -> Result<Value> {
        let table = self.table.read();
        let record = table.get(key).ok_or_else(|| self.not_found(key))?;
        Ok(record.get_path(path).cloned().unwrap_or(Value::Nil))
    }

    pub(crate) fn write_path(&self, key: &str, path: &[&str], value: Value) -> Result<()> {
        let mut table = self.table.write();
        let record = table.get_mut(key).ok_or_else(|| self.not_found(key))?;
        record.set_path(path, value)
    }

    pub(crate) fn insert(&self, key: &str, record: Record) -> Option<Record> {
        self.table.write().insert(key, record)
    }

    pub(crate) fn remove(&self, key: &str) -> Option<Record> {
        self.table.write().remove(key)
    }

    pub(crate) fn len(&self) -> usize {
        self.table.read().len()
    }
}

/// A handle to one layer of a [`Document`].
///
/// Obtained from [`Document::layer`]. Cheap to create; holds no data.
#[derive(Clone, Copy)]
pub struct Layer<'a> {
    doc: &'a Document,
    layer: &'a TypedLayer,
}

impl<'a> Layer<'a> {
    pub(crate) fn new(doc: &'a Document, layer: &'a TypedLayer) -> Self {
        Self { doc, layer }
    }

    /// Returns the layer name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.layer.name()
    }

    /// Returns the layer's version tag.
    #[must_use]
    pub fn version(&self) -> &'a Value {
        &self.layer.version
    }

    /// Returns the entity kind bound to this layer, if any.
    #[must_use]
    pub fn kind(&self) -> Option<&'a Arc<EntityKind>> {
        self.layer.kind()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layer.len()
    }

    /// Returns true if the layer has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the layer has a record for `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.layer.contains(key)
    }

    /// Returns the record keys in table order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.layer.snapshot().keys().map(str::to_string).collect()
    }

    /// Looks up an entity.
    ///
    /// Bound layers return the cached typed view; unbound layers return a
    /// live handle to the raw record.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` if the layer has no record for `key`.
    pub fn get(&self, key: &str) -> Result<Entry> {
        match self.kind() {
            Some(kind) => self.view_as(kind, key).map(Entry::View),
            None if self.contains_key(key) => Ok(Entry::Record(RecordRef::new(
                self.doc,
                self.layer.name_handle(),
                key,
            ))),
            None => Err(self.layer.not_found(key)),
        }
    }

    /// Like [`get`](Self::get), but returns `default` on any error.
    #[must_use]
    pub fn get_or(&self, key: &str, default: Entry) -> Entry {
        self.get(key).unwrap_or(default)
    }

    /// Looks up an entity of the bound kind.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLayer` if no kind is bound, or `EntityNotFound` if the
    /// layer has no record for `key`.
    pub fn view(&self, key: &str) -> Result<EntityView> {
        let kind = self.kind().ok_or_else(|| {
            Error::invalid_layer(self.name(), "no entity kind registered")
        })?;
        self.view_as(kind, key)
    }

    /// Looks up an entity as an explicit kind, through the identity cache.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLayer` if `kind` belongs to another layer, or
    /// `EntityNotFound` if the layer has no record for `key`.
    pub fn view_as(&self, kind: &Arc<EntityKind>, key: &str) -> Result<EntityView> {
        if kind.layer != self.name() {
            return Err(Error::invalid_layer(
                self.name(),
                format!(
                    "entity kind '{}' belongs to layer '{}'",
                    kind.name, kind.layer
                ),
            ));
        }
        if !self.contains_key(key) {
            return Err(self.layer.not_found(key));
        }
        Ok(self.doc.registry().obtain(self.name(), key, kind, || {
            EntityView::new(self.doc, self.layer.name_handle(), key, Arc::clone(kind))
        }))
    }

    /// Returns the entries whose key starts with the filter's prefix and
    /// whose fields equal every constraint, in table order.
    ///
    /// Bound layers compare decoded field values, so derived and enumerated
    /// fields can be filtered on. Unbound layers compare raw record fields;
    /// a missing field never matches.
    ///
    /// # Errors
    ///
    /// Returns `FieldNotFound` if a constraint names a field the bound kind
    /// does not declare, or any error raised while reading a derived field.
    pub fn filter(&self, filter: &Filter) -> Result<Vec<Entry>> {
        if let Some(kind) = self.kind() {
            for (field, _) in filter.constraints() {
                kind.require_field(field)?;
            }
        }

        let snapshot = self.layer.snapshot();
        let mut out = Vec::new();
        for (key, record) in snapshot.iter() {
            if !filter.matches_key(key) {
                continue;
            }
            match self.kind() {
                Some(kind) => {
                    let view = self.view_as(kind, key)?;
                    if filter.matches_view(&view)? {
                        out.push(Entry::View(view));
                    }
                }
                None => {
                    if filter.matches_record(record) {
                        out.push(Entry::Record(RecordRef::new(
                            self.doc,
                            self.layer.name_handle(),
                            key,
                        )));
                    }
                }
            }
        }
        Ok(out)
    }

    /// Binds an entity kind to this layer.
    ///
    /// Views already cached for other kinds are untouched.
    ///
    /// # Errors
    ///
    /// Returns `KindAlreadyRegistered` if a kind is already bound, or
    /// `InvalidLayer` if `kind` belongs to another layer.
    pub fn register_entity_view(&self, kind: Arc<EntityKind>) -> Result<()> {
        self.layer.bind(kind)
    }

    /// Returns a snapshot of the raw table, including all typed writes.
    #[must_use]
    pub fn as_raw_mapping(&self) -> RecordTable {
        self.layer.snapshot()
    }

    /// Returns a copy of the record for `key`.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` if the layer has no record for `key`.
    pub fn record(&self, key: &str) -> Result<Record> {
        self.layer.record(key)
    }

    /// Inserts or replaces a record.
    ///
    /// Views of an existing key stay valid and read the new record.
    /// Returns the previous record, if any.
    pub fn set(&self, key: &str, record: Record) -> Option<Record> {
        self.layer.insert(key, record)
    }

    /// Removes a record and evicts its cached views.
    ///
    /// Handles still held by callers fail with `EntityNotFound` afterwards,
    /// even if the key is set again; a later lookup returns a new view.
    pub fn remove(&self, key: &str) -> Option<Record> {
        let removed = self.layer.remove(key);
        let evicted = self.doc.registry().evict(self.name(), key);
        debug!(layer = self.name(), key, evicted, "removed record");
        removed
    }
}

impl std::fmt::Debug for Layer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Layer")
            .field("name", &self.name())
            .field("len", &self.len())
            .field("kind", &self.kind().map(|k| k.name.as_str()))
            .finish()
    }
}
