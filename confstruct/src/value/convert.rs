//! Conversions into [`Value`].
//!
//! Every ingestion point of the crate takes `impl Into<Value>`, so this module
//! is where plain mappings become [`Struct`] containers. JSON input is handled
//! by [`normalise`]; Rust maps go through [`Struct`]'s `FromIterator`, which
//! converts each nested value in turn.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::{Map as JsonMap, Number, Value as JsonValue};

use super::Value;
use crate::Struct;

/// Recursively convert a plain JSON value, wrapping every object (including
/// objects nested in arrays) into a [`Struct`].
pub(crate) fn normalise(value: JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(flag) => Value::Bool(flag),
        JsonValue::Number(number) => from_number(&number),
        JsonValue::String(text) => Value::String(text),
        JsonValue::Array(items) => Value::Sequence(items.into_iter().map(normalise).collect()),
        JsonValue::Object(map) => Value::Struct(normalise_object(map)),
    }
}

pub(crate) fn normalise_object(map: JsonMap<String, JsonValue>) -> Struct {
    map.into_iter()
        .map(|(key, value)| (key, normalise(value)))
        .collect()
}

/// Integers outside the `i64` range have no [`Value::Integer`] form and are
/// kept as the nearest float.
fn from_number(number: &Number) -> Value {
    number.as_i64().map_or_else(
        || number.as_f64().map_or(Value::Null, Value::Float),
        Value::Integer,
    )
}

/// Convert back into an order-preserving JSON value.
///
/// Non-finite floats have no JSON form and become `null`.
pub(crate) fn to_json(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(flag) => JsonValue::Bool(*flag),
        Value::Integer(number) => JsonValue::Number(Number::from(*number)),
        Value::Float(number) => {
            Number::from_f64(*number).map_or(JsonValue::Null, JsonValue::Number)
        }
        Value::String(text) => JsonValue::String(text.clone()),
        Value::Sequence(items) => JsonValue::Array(items.iter().map(to_json).collect()),
        Value::Struct(inner) => JsonValue::Object(
            inner
                .iter()
                .map(|(key, item)| (key.clone(), to_json(item)))
                .collect(),
        ),
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(number: $ty) -> Self {
                    Self::Integer(i64::from(number))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Float(number)
    }
}

impl From<f32> for Value {
    fn from(number: f32) -> Self {
        Self::Float(f64::from(number))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<Struct> for Value {
    fn from(inner: Struct) -> Self {
        Self::Struct(inner)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(item: Option<T>) -> Self {
        item.map_or(Self::Null, Into::into)
    }
}

/// Objects become containers at every depth. Unsigned integers above
/// `i64::MAX` become [`Value::Float`], losing precision.
impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        normalise(value)
    }
}

impl From<JsonMap<String, JsonValue>> for Value {
    fn from(map: JsonMap<String, JsonValue>) -> Self {
        Self::Struct(normalise_object(map))
    }
}

impl<V: Into<Self>> From<BTreeMap<String, V>> for Value {
    fn from(map: BTreeMap<String, V>) -> Self {
        Self::Struct(map.into_iter().collect())
    }
}

impl<V: Into<Self>, S: BuildHasher> From<HashMap<String, V, S>> for Value {
    fn from(map: HashMap<String, V, S>) -> Self {
        Self::Struct(map.into_iter().collect())
    }
}

impl From<&Value> for JsonValue {
    fn from(value: &Value) -> Self {
        to_json(value)
    }
}
