//! View identity cache.
//!
//! Guarantees at most one live [`EntityView`] per `(layer, key, kind)` within
//! a document. The registry is owned by its document and dropped with it.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

use crate::schema::EntityKind;
use crate::view::EntityView;

type ViewKey = (Arc<str>, Arc<str>, Arc<str>);

/// Per-document cache of entity views.
#[derive(Debug, Default)]
pub struct ViewRegistry {
    views: Mutex<HashMap<ViewKey, EntityView>>,
}

impl ViewRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached view for `(layer, key, kind)`, constructing and
    /// caching it on a miss.
    ///
    /// Check and insert happen under one lock, so concurrent callers always
    /// observe the same view.
    pub(crate) fn obtain(
        &self,
        layer: &str,
        key: &str,
        kind: &EntityKind,
        construct: impl FnOnce() -> EntityView,
    ) -> EntityView {
        let cache_key: ViewKey = (layer.into(), key.into(), kind.name.as_str().into());
        let mut views = self.views.lock();
        if let Some(view) = views.get(&cache_key) {
            trace!(layer, key, kind = %kind.name, "view cache hit");
            return view.clone();
        }
        trace!(layer, key, kind = %kind.name, "creating view");
        let view = construct();
        views.insert(cache_key, view.clone());
        view
    }

    /// Drops every cached view of `(layer, key)`, whatever its kind, and
    /// retires it so that handles still held elsewhere stop resolving.
    ///
    /// Returns the number of views evicted.
    pub(crate) fn evict(&self, layer: &str, key: &str) -> usize {
        let mut views = self.views.lock();
        let mut evicted = 0;
        views.retain(|(l, k, _), view| {
            if &**l == layer && &**k == key {
                view.retire();
                evicted += 1;
                false
            } else {
                true
            }
        });
        evicted
    }

    /// Returns the number of cached views.
    #[must_use]
    pub fn len(&self) -> usize {
        self.views.lock().len()
    }

    /// Returns true if no views are cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.lock().is_empty()
    }
}
