//! Map documents: an ordered, fixed set of named layers.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};

use dtmap_foundation::{key, Error, RecordTable, Result, Value};
use tracing::debug;
use uuid::Uuid;

use crate::asset::{Asset, AssetStore};
use crate::identity::ViewRegistry;
use crate::layer::{Layer, TypedLayer};
use crate::schema::EntityKind;

pub(crate) struct DocumentInner {
    name: String,
    id: Uuid,
    layers: Vec<TypedLayer>,
    index: HashMap<String, usize>,
    registry: ViewRegistry,
    assets: Option<Arc<dyn AssetStore>>,
}

/// A map document.
///
/// Cloning is O(1) and yields another handle to the same document. Layers
/// are fixed at construction; records within them may change at any time.
#[derive(Clone)]
pub struct Document {
    inner: Arc<DocumentInner>,
}

impl Document {
    /// Starts building a document.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> DocumentBuilder {
        DocumentBuilder::new(name)
    }

    /// Creates a document with no layers.
    #[must_use]
    pub fn empty(name: impl Into<String>) -> Self {
        Self::from_parts(name.into(), Vec::new(), HashMap::new(), None)
    }

    fn from_parts(
        name: String,
        layers: Vec<TypedLayer>,
        index: HashMap<String, usize>,
        assets: Option<Arc<dyn AssetStore>>,
    ) -> Self {
        Self {
            inner: Arc::new(DocumentInner {
                name,
                id: Uuid::new_v4(),
                layers,
                index,
                registry: ViewRegistry::new(),
                assets,
            }),
        }
    }

    pub(crate) fn downgrade(&self) -> Weak<DocumentInner> {
        Arc::downgrade(&self.inner)
    }

    pub(crate) fn upgrade(weak: &Weak<DocumentInner>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    pub(crate) fn typed_layer(&self, name: &str) -> Result<&TypedLayer> {
        self.inner
            .index
            .get(name)
            .map(|&i| &self.inner.layers[i])
            .ok_or_else(|| Error::missing_layer(name))
    }

    /// Returns true if both handles refer to the same document.
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    /// Returns the document name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Returns the id generated for this document.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.inner.id
    }

    /// Returns a handle to the named layer.
    ///
    /// # Errors
    ///
    /// Returns `MissingLayer` if the document has no such layer.
    pub fn layer(&self, name: &str) -> Result<Layer<'_>> {
        self.typed_layer(name).map(|layer| Layer::new(self, layer))
    }

    /// Returns true if the document has the named layer.
    #[must_use]
    pub fn has_layer(&self, name: &str) -> bool {
        self.inner.index.contains_key(name)
    }

    /// Returns handles to all layers in document order.
    pub fn layers(&self) -> impl Iterator<Item = Layer<'_>> {
        self.inner.layers.iter().map(|layer| Layer::new(self, layer))
    }

    /// Returns the layer names in document order.
    pub fn layer_names(&self) -> impl Iterator<Item = &str> {
        self.inner.layers.iter().map(TypedLayer::name)
    }

    /// Returns the number of layers.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.inner.layers.len()
    }

    /// Returns the document's view identity cache.
    #[must_use]
    pub fn registry(&self) -> &ViewRegistry {
        &self.inner.registry
    }

    /// Returns the asset store, if the document has one.
    #[must_use]
    pub fn asset_store(&self) -> Option<&Arc<dyn AssetStore>> {
        self.inner.assets.as_ref()
    }

    /// Returns a handle to the asset `name` of entity `key`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the document has no asset store.
    pub fn asset(&self, key: &str, name: &str) -> Result<Asset> {
        let store = self
            .inner
            .assets
            .as_ref()
            .ok_or_else(|| Error::io(format!("document '{}' has no asset store", self.name())))?;
        Ok(Asset::new(Arc::clone(store), key::join(key, name)))
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("name", &self.inner.name)
            .field("id", &self.inner.id)
            .field("layers", &self.layer_names().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

struct PendingLayer {
    name: String,
    version: Value,
    table: RecordTable,
    kind: Option<Arc<EntityKind>>,
}

/// Assembles a [`Document`] from layers.
#[must_use]
pub struct DocumentBuilder {
    name: String,
    layers: Vec<PendingLayer>,
    assets: Option<Arc<dyn AssetStore>>,
}

impl DocumentBuilder {
    /// Creates a builder for a document called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layers: Vec::new(),
            assets: None,
        }
    }

    /// Adds a layer with no bound kind.
    pub fn layer(
        mut self,
        name: impl Into<String>,
        version: impl Into<Value>,
        table: RecordTable,
    ) -> Self {
        self.layers.push(PendingLayer {
            name: name.into(),
            version: version.into(),
            table,
            kind: None,
        });
        self
    }

    /// Adds a layer bound to `kind`.
    pub fn typed_layer(
        mut self,
        name: impl Into<String>,
        version: impl Into<Value>,
        table: RecordTable,
        kind: Arc<EntityKind>,
    ) -> Self {
        self.layers.push(PendingLayer {
            name: name.into(),
            version: version.into(),
            table,
            kind: Some(kind),
        });
        self
    }

    /// Attaches an asset store.
    pub fn assets(mut self, store: Arc<dyn AssetStore>) -> Self {
        self.assets = Some(store);
        self
    }

    /// Builds the document.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLayer` if two layers share a name or a kind belongs to
    /// a different layer.
    pub fn build(self) -> Result<Document> {
        let mut index = HashMap::with_capacity(self.layers.len());
        let mut layers = Vec::with_capacity(self.layers.len());
        for pending in self.layers {
            if index.contains_key(&pending.name) {
                return Err(Error::invalid_layer(&pending.name, "duplicate layer name"));
            }
            let layer = TypedLayer::new(&pending.name, pending.version, pending.table);
            if let Some(kind) = pending.kind {
                layer.bind(kind)?;
            }
            index.insert(pending.name, layers.len());
            layers.push(layer);
        }
        debug!(document = %self.name, layers = layers.len(), "assembled document");
        Ok(Document::from_parts(self.name, layers, index, self.assets))
    }
}
