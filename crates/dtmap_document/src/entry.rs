//! Layer lookup results.

use std::sync::{Arc, Weak};

use dtmap_foundation::{Error, ErrorKind, Record, Result, Value};

use crate::document::{Document, DocumentInner};
use crate::view::EntityView;

/// The result of looking up a key in a layer.
#[derive(Clone, Debug)]
pub enum Entry {
    /// A typed view (the layer has a bound kind).
    View(EntityView),
    /// A raw record handle (the layer has no bound kind).
    Record(RecordRef),
}

impl Entry {
    /// Returns the entity key.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::View(view) => view.key(),
            Self::Record(record) => record.key(),
        }
    }

    /// Returns the typed view, if this is one.
    #[must_use]
    pub const fn as_view(&self) -> Option<&EntityView> {
        match self {
            Self::View(view) => Some(view),
            Self::Record(_) => None,
        }
    }

    /// Converts into the typed view, if this is one.
    #[must_use]
    pub fn into_view(self) -> Option<EntityView> {
        match self {
            Self::View(view) => Some(view),
            Self::Record(_) => None,
        }
    }

    /// Returns the raw record handle, if this is one.
    #[must_use]
    pub const fn as_record_ref(&self) -> Option<&RecordRef> {
        match self {
            Self::View(_) => None,
            Self::Record(record) => Some(record),
        }
    }

    /// Reads a field. Views validate the field name; raw records read
    /// missing fields as nil.
    ///
    /// # Errors
    ///
    /// Returns any error of [`EntityView::read`] or [`RecordRef::get`].
    pub fn read(&self, field: &str) -> Result<Value> {
        match self {
            Self::View(view) => view.read(field),
            Self::Record(record) => Ok(record.get(field)?.unwrap_or(Value::Nil)),
        }
    }

    /// Returns a snapshot of the backing record.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` if the record was removed.
    pub fn record(&self) -> Result<Record> {
        match self {
            Self::View(view) => view.record(),
            Self::Record(record) => record.record(),
        }
    }
}

/// A live handle to a raw record in an unbound layer.
///
/// Reads and writes go straight to the backing table without validation.
#[derive(Clone)]
pub struct RecordRef {
    doc: Weak<DocumentInner>,
    layer: Arc<str>,
    key: Arc<str>,
}

impl RecordRef {
    pub(crate) fn new(doc: &Document, layer: &Arc<str>, key: &str) -> Self {
        Self {
            doc: doc.downgrade(),
            layer: Arc::clone(layer),
            key: key.into(),
        }
    }

    /// Returns the entity key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the layer name.
    #[must_use]
    pub fn layer_name(&self) -> &str {
        &self.layer
    }

    fn document(&self) -> Result<Document> {
        Document::upgrade(&self.doc).ok_or_else(|| Error::new(ErrorKind::DocumentDropped))
    }

    /// Reads a field (dotted paths reach into nested records).
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` if the record was removed.
    pub fn get(&self, field: &str) -> Result<Option<Value>> {
        let doc = self.document()?;
        let layer = doc.typed_layer(&self.layer)?;
        let path: Vec<&str> = field.split('.').collect();
        let value = layer.read_path(&self.key, &path)?;
        Ok((!value.is_nil()).then_some(value))
    }

    /// Writes a field, creating intermediate records for dotted paths.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` if the record was removed, or a type mismatch
    /// if a path segment crosses a non-record value.
    pub fn set(&self, field: &str, value: impl Into<Value>) -> Result<()> {
        let doc = self.document()?;
        let layer = doc.typed_layer(&self.layer)?;
        let path: Vec<&str> = field.split('.').collect();
        layer.write_path(&self.key, &path, value.into())
    }

    /// Returns a snapshot of the record.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` if the record was removed.
    pub fn record(&self) -> Result<Record> {
        let doc = self.document()?;
        doc.typed_layer(&self.layer)?.record(&self.key)
    }
}

impl std::fmt::Debug for RecordRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordRef")
            .field("layer", &self.layer)
            .field("key", &self.key)
            .finish()
    }
}
