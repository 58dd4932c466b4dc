//! Error types for dtmap.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::types::Type;

/// The main error type for dtmap operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an entity not found error.
    #[must_use]
    pub fn entity_not_found(layer: impl Into<String>, key: impl Into<String>) -> Self {
        Self::new(ErrorKind::EntityNotFound {
            layer: layer.into(),
            key: key.into(),
        })
    }

    /// Creates a field not found error.
    #[must_use]
    pub fn field_not_found(kind: impl Into<String>, field: impl Into<String>) -> Self {
        Self::new(ErrorKind::FieldNotFound {
            kind: kind.into(),
            field: field.into(),
        })
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(field: impl Into<String>, expected: Type, actual: Type) -> Self {
        Self::new(ErrorKind::TypeMismatch {
            field: field.into(),
            expected,
            actual,
        })
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        allowed: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::InvalidValue {
            field: field.into(),
            value: value.into(),
            allowed: allowed.into(),
        })
    }

    /// Creates an invalid layer error.
    #[must_use]
    pub fn invalid_layer(layer: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidLayer {
            layer: layer.into(),
            reason: reason.into(),
        })
    }

    /// Creates a missing layer error.
    #[must_use]
    pub fn missing_layer(layer: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingLayer(layer.into()))
    }

    /// Creates an unsupported tile type error.
    #[must_use]
    pub fn unsupported_tile_type(tile_type: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedTileType(tile_type.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns true if this is an entity not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::EntityNotFound { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Key absent from a layer's table.
    #[error("entity '{key}' not found in '{layer}' layer")]
    EntityNotFound {
        /// The layer that was searched.
        layer: String,
        /// The key that was not found.
        key: String,
    },

    /// Field name not declared by an entity kind.
    #[error("entity kind '{kind}' has no field '{field}'")]
    FieldNotFound {
        /// The entity kind that was queried.
        kind: String,
        /// The undeclared field name.
        field: String,
    },

    /// Value type not accepted by a field.
    #[error("type mismatch for field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        /// The field being written or decoded.
        field: String,
        /// The accepted type.
        expected: Type,
        /// The actual type encountered.
        actual: Type,
    },

    /// Value of an accepted type, but outside the field's domain.
    #[error("invalid value '{value}' for field '{field}' (allowed: {allowed})")]
    InvalidValue {
        /// The field being written or decoded.
        field: String,
        /// The rejected value, rendered.
        value: String,
        /// Description of the accepted values.
        allowed: String,
    },

    /// Structural problem in a layer at document-assembly time.
    #[error("invalid layer '{layer}': {reason}")]
    InvalidLayer {
        /// The offending layer.
        layer: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Layer not present in a document.
    #[error("document has no layer '{0}'")]
    MissingLayer(String),

    /// No lane topology generator registered for a tile type.
    #[error("no lane topology generator for tile type '{0}'")]
    UnsupportedTileType(String),

    /// A layer was bound to an entity kind twice.
    #[error("layer '{layer}' already has an entity kind registered")]
    KindAlreadyRegistered {
        /// The layer that was already bound.
        layer: String,
    },

    /// A view outlived its document.
    #[error("the owning document has been dropped")]
    DocumentDropped,

    /// I/O failure in a loader, saver, or asset store.
    #[error("I/O error: {0}")]
    Io(String),

    /// Encoding or decoding failure of an external document format.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Layer being accessed.
    pub layer: Option<String>,
    /// Entity key being accessed.
    pub key: Option<String>,
    /// Chain of derivations that led here, outermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the entity location.
    #[must_use]
    pub fn with_entity(mut self, layer: impl Into<String>, key: impl Into<String>) -> Self {
        self.layer = Some(layer.into());
        self.key = Some(key.into());
        self
    }

    /// Adds a derivation frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(layer), Some(key)) = (&self.layer, &self.key) {
            write!(f, "at {layer}[{key}]")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
