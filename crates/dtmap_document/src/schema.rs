//! Schema definitions for entity kinds.
//!
//! An entity kind names the layer it lives in and declares a closed set of
//! fields. Each field has an accepted [`Type`], an optional closed domain of
//! literal values, and optionally a [`Derivation`] that computes the field
//! from other entities instead of storing it.

use std::fmt;

use dtmap_foundation::{Error, Result, Type, Value};

use crate::view::EntityView;

/// Reads a derived field.
pub type ReadRule = fn(&EntityView) -> Result<Value>;

/// Writes a derived field. The value has already been validated.
pub type WriteRule = fn(&EntityView, Value) -> Result<()>;

/// A read/write rule pair for a field computed from other entities.
#[derive(Clone, Copy)]
pub struct Derivation {
    /// Computes the field value.
    pub read: ReadRule,
    /// Stores a field value by updating the entities it is computed from.
    pub write: WriteRule,
}

impl fmt::Debug for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Derivation")
    }
}

/// Schema definition for an entity kind.
#[derive(Clone, Debug)]
pub struct EntityKind {
    /// Kind name (e.g., `Tile`).
    pub name: String,
    /// Name of the layer entities of this kind live in.
    pub layer: String,
    /// Field definitions.
    pub fields: Vec<FieldSchema>,
}

impl EntityKind {
    /// Creates a new entity kind with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>, layer: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layer: layer.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field to the schema.
    #[must_use]
    pub fn with_field(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns the field schema by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns the field schema by name, or a field-not-found error.
    ///
    /// # Errors
    ///
    /// Returns `FieldNotFound` if the kind does not declare `name`.
    pub fn require_field(&self, name: &str) -> Result<&FieldSchema> {
        self.field(name)
            .ok_or_else(|| Error::field_not_found(&self.name, name))
    }

    /// Returns the declared field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

/// Schema definition for an entity field.
#[derive(Clone, Debug)]
pub struct FieldSchema {
    /// Field name. Nested fields use a dotted path (`pose.x`).
    pub name: String,
    /// Accepted value type.
    pub ty: Type,
    /// Closed set of accepted values, if any.
    pub domain: Option<Vec<Value>>,
    /// Rule pair for derived fields; `None` for stored fields.
    pub derivation: Option<Derivation>,
}

impl FieldSchema {
    /// Creates a field stored in the entity's record.
    #[must_use]
    pub fn stored(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            domain: None,
            derivation: None,
        }
    }

    /// Creates a field computed by `derivation`.
    #[must_use]
    pub fn derived(name: impl Into<String>, ty: Type, derivation: Derivation) -> Self {
        Self {
            name: name.into(),
            ty,
            domain: None,
            derivation: Some(derivation),
        }
    }

    /// Creates a stored string field restricted to the literals of `E`.
    #[must_use]
    pub fn enumeration<E: FieldEnum>(name: impl Into<String>) -> Self {
        Self::stored(name, Type::String).with_domain(E::VARIANTS.iter().map(|v| v.as_str()))
    }

    /// Restricts the field to a closed set of values.
    #[must_use]
    pub fn with_domain<V: Into<Value>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.domain = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Returns true if the field is computed rather than stored.
    #[must_use]
    pub const fn is_derived(&self) -> bool {
        self.derivation.is_some()
    }

    /// Returns the record path of a stored field.
    #[must_use]
    pub fn path(&self) -> Vec<&str> {
        self.name.split('.').collect()
    }

    /// Checks a value against the field's type and domain.
    ///
    /// Integers written to float fields are stored as floats.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the type is not accepted, or `InvalidValue`
    /// if the value is outside the domain.
    pub fn validate(&self, value: Value) -> Result<Value> {
        let actual = value.value_type();
        if !self.ty.accepts(&actual) {
            return Err(Error::type_mismatch(&self.name, self.ty.clone(), actual));
        }
        let value = promote(&self.ty, value);
        if let Some(domain) = &self.domain {
            if !value.is_nil() && !domain.contains(&value) {
                return Err(Error::invalid_value(
                    &self.name,
                    value.to_string(),
                    join_values(domain),
                ));
            }
        }
        Ok(value)
    }
}

#[allow(clippy::cast_precision_loss)]
fn promote(ty: &Type, value: Value) -> Value {
    match (ty, value) {
        (Type::Float, Value::Int(n)) => Value::Float(n as f64),
        (Type::Option(inner), value) => promote(inner, value),
        (_, value) => value,
    }
}

fn join_values(values: &[Value]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A closed enumeration stored as its string literal.
///
/// Implemented by [`field_enum!`](crate::field_enum).
pub trait FieldEnum: Copy + Sized + 'static {
    /// All variants in declaration order.
    const VARIANTS: &'static [Self];

    /// Returns the stored literal of this variant.
    fn as_str(self) -> &'static str;

    /// Parses a stored literal.
    #[must_use]
    fn parse(literal: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.as_str() == literal)
    }

    /// Returns the accepted literals, comma separated.
    #[must_use]
    fn allowed() -> String {
        Self::VARIANTS
            .iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Declares a [`FieldEnum`] together with its string conversions.
///
/// ```
/// dtmap_document::field_enum! {
///     /// Light colors.
///     pub enum Light {
///         /// Stop.
///         Red => "red",
///         /// Go.
///         Green => "green",
///     }
/// }
///
/// use dtmap_document::FieldEnum;
/// assert_eq!(Light::Red.as_str(), "red");
/// assert_eq!("green".parse::<Light>().unwrap(), Light::Green);
/// ```
#[macro_export]
macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $literal:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::FieldEnum for $name {
            const VARIANTS: &'static [Self] = &[ $( Self::$variant ),+ ];

            fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $literal ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::FieldEnum::as_str(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::FieldEnum>::parse(s).ok_or_else(|| {
                    $crate::Error::invalid_value(
                        stringify!($name),
                        s,
                        <Self as $crate::FieldEnum>::allowed(),
                    )
                })
            }
        }

        impl ::std::convert::From<$name> for $crate::Value {
            fn from(v: $name) -> Self {
                $crate::Value::from($crate::FieldEnum::as_str(v))
            }
        }

        impl $crate::FromValue for $name {
            fn from_value(field: &str, value: &$crate::Value) -> $crate::Result<Self> {
                let literal = value.as_str().ok_or_else(|| {
                    $crate::Error::type_mismatch(field, $crate::Type::String, value.value_type())
                })?;
                <Self as $crate::FieldEnum>::parse(literal).ok_or_else(|| {
                    $crate::Error::invalid_value(
                        field,
                        literal,
                        <Self as $crate::FieldEnum>::allowed(),
                    )
                })
            }
        }
    };
}
