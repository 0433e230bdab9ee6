//! Recursive, right-biased merging of containers.

use crate::{Struct, Value};

impl Struct {
    /// Merge `other` into this container in place and return `self`.
    ///
    /// Behaviour:
    /// - Keys missing here are appended in `other`'s order.
    /// - When both sides hold a container under the same key, they merge
    ///   recursively.
    /// - Otherwise the value from `other` replaces the existing one, keeping
    ///   its position. Sequences are replaced wholesale, never merged
    ///   element by element.
    ///
    /// `other` is consumed; clone it first to keep using it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use confstruct::Struct;
    /// use serde_json::json;
    ///
    /// let mut base = Struct::try_from(json!({
    ///     "delta": "bananas",
    ///     "cubeRootVolCoeffs": {"deltaCoeff": 1.0},
    /// }))?;
    /// base.merge(Struct::try_from(json!({
    ///     "delta": "cubeRootVol",
    ///     "smoothCoeffs": {"delta": "cubeRootVol", "maxDeltaRatio": 1.1},
    /// }))?);
    /// assert_eq!(base.get_attr("delta")?.as_str(), Some("cubeRootVol"));
    /// assert!(base.contains_key("smoothCoeffs"));
    /// assert!(base.contains_key("cubeRootVolCoeffs"));
    /// # Ok::<_, confstruct::StructError>(())
    /// ```
    pub fn merge(&mut self, other: impl Into<Self>) -> &mut Self {
        merge_struct(self, other.into());
        self
    }
}

/// Merge `src` into `dst`; the free-function form of [`Struct::merge`].
pub fn merge(dst: &mut Struct, src: impl Into<Struct>) -> &mut Struct {
    dst.merge(src)
}

fn merge_struct(target: &mut Struct, layer: Struct) {
    let entries = target.entries_mut();
    for (key, value) in layer {
        match entries.get_mut(&key) {
            Some(existing) => merge_value(existing, value),
            None => {
                entries.insert(key, value);
            }
        }
    }
}

fn merge_value(target: &mut Value, layer: Value) {
    match (target, layer) {
        (Value::Struct(existing), Value::Struct(incoming)) => merge_struct(existing, incoming),
        (slot, replacement) => *slot = replacement,
    }
}
