//! Values stored inside a [`Struct`].
//!
//! A mapping is only ever represented by [`Value::Struct`]: plain mappings are
//! converted on the way in (see [`convert`]), so every nested mapping reachable
//! from a container is itself a container.

mod convert;
mod serde_impl;

pub(crate) use convert::{normalise_object, to_json};

use crate::{Struct, StructError, StructResult};

/// A configuration value: a scalar, a sequence, or a nested container.
///
/// Equality compares floats with `f64` semantics, so a value holding NaN is
/// never equal to anything, including a copy of itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Explicit null (`~` or `null` in YAML).
    #[default]
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Signed integer scalar.
    Integer(i64),
    /// Floating-point scalar.
    Float(f64),
    /// String scalar.
    String(String),
    /// Ordered sequence of values.
    Sequence(Vec<Value>),
    /// Nested container.
    Struct(Struct),
}

impl Value {
    /// Short name of the variant, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Struct(_) => "mapping",
        }
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow the boolean, if this is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Borrow the integer, if this is one.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(number) => Some(*number),
            _ => None,
        }
    }

    /// Borrow the float, if this is one.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(number) => Some(*number),
            _ => None,
        }
    }

    /// Borrow the string slice, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Borrow the sequence items, if this is a sequence.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Mutably borrow the sequence, if this is a sequence.
    pub const fn as_sequence_mut(&mut self) -> Option<&mut Vec<Self>> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the nested container, if this is one.
    #[must_use]
    pub const fn as_struct(&self) -> Option<&Struct> {
        match self {
            Self::Struct(inner) => Some(inner),
            _ => None,
        }
    }

    /// Mutably borrow the nested container, if this is one.
    pub const fn as_struct_mut(&mut self) -> Option<&mut Struct> {
        match self {
            Self::Struct(inner) => Some(inner),
            _ => None,
        }
    }

    /// Look up `key` on a nested container, attribute style.
    ///
    /// Allows chains such as `config.get_attr("caelus")?.get_attr("caelus_cml")?`.
    ///
    /// # Errors
    ///
    /// Returns [`StructError::NotAStruct`] when this value is not a container
    /// and [`StructError::MissingKey`] when the key is absent.
    pub fn get_attr(&self, key: &str) -> StructResult<&Self> {
        match self {
            Self::Struct(inner) => inner.get_attr(key),
            other => Err(StructError::NotAStruct {
                key: key.to_owned(),
                found: other.type_name(),
            }),
        }
    }

    /// Item-style alias of [`Value::get_attr`].
    ///
    /// # Errors
    ///
    /// Same as [`Value::get_attr`].
    pub fn get_item(&self, key: &str) -> StructResult<&Self> {
        self.get_attr(key)
    }

    /// Fetch the element at `index` of a sequence.
    ///
    /// # Errors
    ///
    /// Returns [`StructError::NotASequence`] when this value is not a sequence
    /// and [`StructError::IndexOutOfRange`] past its end.
    pub fn get_index(&self, index: usize) -> StructResult<&Self> {
        let items = self.as_sequence().ok_or_else(|| StructError::NotASequence {
            found: self.type_name(),
        })?;
        items.get(index).ok_or_else(|| StructError::IndexOutOfRange {
            index,
            len: items.len(),
        })
    }
}

macro_rules! impl_scalar_eq {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl PartialEq<$ty> for Value {
                fn eq(&self, other: &$ty) -> bool {
                    matches!(self, Self::$variant(inner) if inner == other)
                }
            }
        )*
    };
}

impl_scalar_eq!(bool => Bool, i64 => Integer, f64 => Float, String => String);

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        self.as_i64() == Some(i64::from(*other))
    }
}

#[cfg(test)]
mod tests;
