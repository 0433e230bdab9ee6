//! The ordered, attribute-style configuration container.

mod path;

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::value::{normalise_object, to_json};
use crate::{StructError, StructResult, Value, YamlOptions};

/// Ordered mapping from string keys to [`Value`]s.
///
/// Attribute-style access ([`Struct::get_attr`], [`Struct::set_attr`]) and
/// item-style access ([`Struct::get_item`], [`Struct::set_item`]) are two names
/// for the same storage. Keys iterate in insertion order; overwriting a key
/// keeps its original position.
///
/// ```
/// use confstruct::{Struct, Value};
///
/// let mut config: Struct = [("a", 1), ("b", 2)].into_iter().collect();
/// config.set_attr("abc", 10);
/// config.set_item("xyz", 20);
/// assert_eq!(config.get_attr("xyz")?, &Value::from(20));
/// assert_eq!(config.get_item("abc")?, &Value::from(10));
/// assert!(config.get_attr("ijk").is_err());
/// # Ok::<_, confstruct::StructError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Struct {
    entries: IndexMap<String, Value>,
}

impl Struct {
    /// Create an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of top-level keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no keys are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` when `key` is currently stored at the top level.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Values in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.entries.values()
    }

    /// Key/value pairs in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Fetch the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StructError::MissingKey`] when `key` is absent. A miss never
    /// yields a default.
    pub fn get_item(&self, key: &str) -> StructResult<&Value> {
        self.entries
            .get(key)
            .ok_or_else(|| StructError::missing_key(key))
    }

    /// Mutable counterpart of [`Struct::get_item`].
    ///
    /// # Errors
    ///
    /// Returns [`StructError::MissingKey`] when `key` is absent.
    pub fn get_item_mut(&mut self, key: &str) -> StructResult<&mut Value> {
        self.entries
            .get_mut(key)
            .ok_or_else(|| StructError::missing_key(key))
    }

    /// Store `value` under `key`, returning the value it replaced.
    ///
    /// Plain mappings are converted into containers on the way in.
    pub fn set_item(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Attribute-style lookup; identical to [`Struct::get_item`].
    ///
    /// # Errors
    ///
    /// Returns [`StructError::MissingKey`] when `name` is absent.
    pub fn get_attr(&self, name: &str) -> StructResult<&Value> {
        self.get_item(name)
    }

    /// Attribute-style store; identical to [`Struct::set_item`].
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.set_item(name, value)
    }

    /// Remove `key`, keeping the order of the remaining entries.
    ///
    /// # Errors
    ///
    /// Returns [`StructError::MissingKey`] when `key` is absent.
    pub fn remove(&mut self, key: &str) -> StructResult<Value> {
        self.entries
            .shift_remove(key)
            .ok_or_else(|| StructError::missing_key(key))
    }

    /// Convert into an order-preserving [`serde_json::Value`] object.
    #[must_use]
    pub fn to_json_value(&self) -> JsonValue {
        JsonValue::Object(
            self.iter()
                .map(|(key, value)| (key.clone(), to_json(value)))
                .collect(),
        )
    }

    /// Deserialise the container into a typed configuration value.
    ///
    /// ```
    /// use confstruct::Struct;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Cml {
    ///     default: String,
    /// }
    ///
    /// let config = Struct::from_yaml("default: latest\n")?;
    /// let cml: Cml = config.extract()?;
    /// assert_eq!(cml.default, "latest");
    /// # Ok::<_, confstruct::StructError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`StructError::Deserialize`] when the contents do not match `T`.
    pub fn extract<T: DeserializeOwned>(&self) -> StructResult<T> {
        Ok(serde_json::from_value(self.to_json_value())?)
    }

    pub(crate) fn entry_or_empty(&mut self, key: &str) -> &mut Value {
        self.entries
            .entry(key.to_owned())
            .or_insert_with(|| Value::Struct(Self::new()))
    }

    pub(crate) fn entries_mut(&mut self) -> &mut IndexMap<String, Value> {
        &mut self.entries
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Struct {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut collected = Self::new();
        collected.extend(iter);
        collected
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Struct {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set_item(key, value);
        }
    }
}

impl IntoIterator for Struct {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Struct {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<JsonMap<String, JsonValue>> for Struct {
    fn from(map: JsonMap<String, JsonValue>) -> Self {
        normalise_object(map)
    }
}

impl TryFrom<JsonValue> for Struct {
    type Error = StructError;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        match value {
            JsonValue::Object(map) => Ok(normalise_object(map)),
            JsonValue::Null => Ok(Self::new()),
            other => Err(StructError::NotAMapping {
                found: Value::from(other).type_name(),
            }),
        }
    }
}

impl<V: Into<Value>> From<BTreeMap<String, V>> for Struct {
    fn from(map: BTreeMap<String, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<V: Into<Value>, S: BuildHasher> From<HashMap<String, V, S>> for Struct {
    fn from(map: HashMap<String, V, S>) -> Self {
        map.into_iter().collect()
    }
}

/// Renders the container as block-style YAML.
impl fmt::Display for Struct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.to_yaml(&YamlOptions::default()).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
