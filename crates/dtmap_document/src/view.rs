//! Typed entity views.
//!
//! An [`EntityView`] is bound to one `(document, layer, key, kind)` and holds
//! no copy of entity data: every read and write goes through the document's
//! layer table, so changes made through views and through raw accessors are
//! visible to each other immediately.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use dtmap_foundation::{key, Error, ErrorContext, ErrorKind, FromValue, Record, Result, Value};

use crate::document::{Document, DocumentInner};
use crate::schema::{EntityKind, FieldSchema};

struct ViewInner {
    doc: Weak<DocumentInner>,
    layer: Arc<str>,
    key: Arc<str>,
    kind: Arc<EntityKind>,
    retired: AtomicBool,
}

/// A typed, validated handle to one entity.
///
/// Cloning is cheap and preserves identity: clones compare equal under
/// [`EntityView::ptr_eq`].
#[derive(Clone)]
pub struct EntityView(Arc<ViewInner>);

impl EntityView {
    pub(crate) fn new(doc: &Document, layer: &Arc<str>, key: &str, kind: Arc<EntityKind>) -> Self {
        Self(Arc::new(ViewInner {
            doc: doc.downgrade(),
            layer: Arc::clone(layer),
            key: key.into(),
            kind,
            retired: AtomicBool::new(false),
        }))
    }

    /// Detaches the view from its key. A removed record re-added later gets
    /// a new view; this one keeps failing with `EntityNotFound`.
    pub(crate) fn retire(&self) {
        self.0.retired.store(true, Ordering::Release);
    }

    fn ensure_live(&self) -> Result<()> {
        if self.0.retired.load(Ordering::Acquire) {
            return Err(Error::entity_not_found(&*self.0.layer, &*self.0.key));
        }
        Ok(())
    }

    /// Returns true if both handles are the same view object.
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Returns the entity key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.0.key
    }

    /// Returns the name of the layer the entity lives in.
    #[must_use]
    pub fn layer_name(&self) -> &str {
        &self.0.layer
    }

    /// Returns the entity kind.
    #[must_use]
    pub fn kind(&self) -> &Arc<EntityKind> {
        &self.0.kind
    }

    /// Returns the parent entity key, if the key has one.
    #[must_use]
    pub fn parent_key(&self) -> Option<&str> {
        key::parent(&self.0.key)
    }

    /// Returns the owning document.
    ///
    /// # Errors
    ///
    /// Returns `DocumentDropped` if the document no longer exists.
    pub fn document(&self) -> Result<Document> {
        Document::upgrade(&self.0.doc).ok_or_else(|| Error::new(ErrorKind::DocumentDropped))
    }

    /// Returns true if the kind declares `field`.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.kind.field(field).is_some()
    }

    /// Returns true if the backing record still exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.ensure_live()
            .and_then(|()| self.document())
            .and_then(|doc| Ok(doc.typed_layer(&self.0.layer)?.contains(&self.0.key)))
            .unwrap_or(false)
    }

    /// Returns a snapshot of the backing record.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` if the record was removed (even if the key
    /// was re-added since), or `DocumentDropped` if the document no longer
    /// exists.
    pub fn record(&self) -> Result<Record> {
        self.ensure_live()?;
        let doc = self.document()?;
        doc.typed_layer(&self.0.layer)?.record(&self.0.key)
    }

    /// Reads a declared field.
    ///
    /// Absent stored fields read as nil. Derived fields are computed.
    ///
    /// # Errors
    ///
    /// Returns `FieldNotFound` if the field is not declared, or any error
    /// raised while resolving the record or a derivation.
    pub fn read(&self, field: &str) -> Result<Value> {
        let schema = self.0.kind.require_field(field)?;
        let result = self.ensure_live().and_then(|()| match &schema.derivation {
            Some(derivation) => (derivation.read)(self),
            None => self.read_stored(schema),
        });
        result.map_err(|e| self.annotate(e, field))
    }

    /// Reads a declared field and decodes it.
    ///
    /// # Errors
    ///
    /// Returns any error of [`read`](Self::read), or a decoding error if the
    /// stored value cannot be represented as `T`.
    pub fn read_as<T: FromValue>(&self, field: &str) -> Result<T> {
        let value = self.read(field)?;
        T::from_value(field, &value).map_err(|e| self.annotate(e, field))
    }

    /// Writes a declared field.
    ///
    /// The value is type checked and domain checked before anything is
    /// mutated; a rejected write leaves the record unchanged.
    ///
    /// # Errors
    ///
    /// Returns `FieldNotFound`, `TypeMismatch`, or `InvalidValue` on
    /// validation failure, or any error raised while storing.
    pub fn write(&self, field: &str, value: impl Into<Value>) -> Result<()> {
        let schema = self.0.kind.require_field(field)?;
        let result = self
            .ensure_live()
            .and_then(|()| schema.validate(value.into()))
            .and_then(|value| match &schema.derivation {
                Some(derivation) => (derivation.write)(self, value),
                None => self.write_stored(schema, value),
            });
        result.map_err(|e| self.annotate(e, field))
    }

    fn read_stored(&self, schema: &FieldSchema) -> Result<Value> {
        let doc = self.document()?;
        doc.typed_layer(&self.0.layer)?
            .read_path(&self.0.key, &schema.path())
    }

    fn write_stored(&self, schema: &FieldSchema, value: Value) -> Result<()> {
        let doc = self.document()?;
        doc.typed_layer(&self.0.layer)?
            .write_path(&self.0.key, &schema.path(), value)
    }

    fn annotate(&self, err: Error, field: &str) -> Error {
        let frame = format!("{}.{field}", self.0.kind.name);
        let context = match err.context {
            Some(ref ctx) => ctx.clone().with_frame(frame),
            None => ErrorContext::new()
                .with_entity(&*self.0.layer, &*self.0.key)
                .with_frame(frame),
        };
        err.with_context(context)
    }
}

impl PartialEq for EntityView {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl Eq for EntityView {}

impl fmt::Debug for EntityView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityView")
            .field("kind", &self.0.kind.name)
            .field("layer", &self.0.layer)
            .field("key", &self.0.key)
            .finish()
    }
}
