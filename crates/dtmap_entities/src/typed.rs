//! Typed wrappers over [`EntityView`].

use std::sync::Arc;

use dtmap_document::{Document, EntityKind, EntityView, Result};

use crate::frame::Frame;

/// A typed wrapper around an entity view of one fixed kind.
pub trait TypedView: Sized {
    /// The kind every wrapped view has.
    fn kind() -> &'static Arc<EntityKind>;

    /// Wraps a view. The view's kind is not checked.
    fn from_view(view: EntityView) -> Self;

    /// Returns the wrapped view.
    fn view(&self) -> &EntityView;

    /// Returns the entity key.
    fn key(&self) -> &str {
        self.view().key()
    }

    /// Looks up an entity of this kind.
    ///
    /// Goes through the document's identity cache, so repeated lookups
    /// return the same underlying view.
    ///
    /// # Errors
    ///
    /// Returns `MissingLayer` if the document lacks the kind's layer, or
    /// `EntityNotFound` if the layer has no record for `key`.
    fn get(doc: &Document, key: &str) -> Result<Self> {
        let kind = Self::kind();
        doc.layer(&kind.layer)?
            .view_as(kind, key)
            .map(Self::from_view)
    }

    /// Returns every entity of this kind in table order.
    ///
    /// # Errors
    ///
    /// Returns `MissingLayer` if the document lacks the kind's layer.
    fn all(doc: &Document) -> Result<Vec<Self>> {
        let kind = Self::kind();
        let layer = doc.layer(&kind.layer)?;
        layer
            .keys()
            .iter()
            .map(|key| layer.view_as(kind, key).map(Self::from_view))
            .collect()
    }
}

/// An entity placed in the world by the frame with the same key.
pub trait Placeable: TypedView {
    /// Returns the entity's frame.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` if there is no frame with this key.
    fn frame(&self) -> Result<Frame> {
        let doc = self.view().document()?;
        Frame::get(&doc, self.key())
    }
}

macro_rules! typed_view {
    ($(#[$meta:meta])* $name:ident, $kind:path) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name(dtmap_document::EntityView);

        impl $crate::typed::TypedView for $name {
            fn kind() -> &'static std::sync::Arc<dtmap_document::EntityKind> {
                &$kind
            }

            fn from_view(view: dtmap_document::EntityView) -> Self {
                Self(view)
            }

            fn view(&self) -> &dtmap_document::EntityView {
                &self.0
            }
        }
    };
}

pub(crate) use typed_view;
