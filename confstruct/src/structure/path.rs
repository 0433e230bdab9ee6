//! Dotted-path addressing across nested containers.

use tracing::trace;

use super::Struct;
use crate::{StructError, StructResult, Value};

/// A parsed `a.b.c` path: every segment but the last names a container.
#[derive(Debug)]
struct DottedPath<'a> {
    parents: Vec<&'a str>,
    leaf: &'a str,
}

impl<'a> DottedPath<'a> {
    fn parse(path: &'a str) -> StructResult<Self> {
        let mut parents: Vec<&str> = path.split('.').collect();
        let leaf = parents.pop().unwrap_or_default();
        if leaf.is_empty() || parents.iter().any(|segment| segment.is_empty()) {
            return Err(StructError::InvalidPath {
                path: path.to_owned(),
            });
        }
        Ok(Self { parents, leaf })
    }

    /// Dotted prefix ending at parent `depth`.
    fn prefix(&self, depth: usize) -> String {
        self.parents
            .iter()
            .take(depth + 1)
            .copied()
            .collect::<Vec<_>>()
            .join(".")
    }

    fn full(&self) -> String {
        self.parents
            .iter()
            .copied()
            .chain(std::iter::once(self.leaf))
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// Re-key a lookup miss or type mismatch with the dotted prefix that failed.
fn rekey(err: StructError, key: String) -> StructError {
    match err {
        StructError::MissingKey { .. } => StructError::MissingKey { key },
        StructError::NotAStruct { found, .. } => StructError::NotAStruct { key, found },
        other => other,
    }
}

fn descend<'s>(node: &'s Struct, path: &DottedPath<'_>, depth: usize) -> StructResult<&'s Struct> {
    let segment = path.parents.get(depth).copied().unwrap_or_default();
    let value = node
        .get_item(segment)
        .map_err(|err| rekey(err, path.prefix(depth)))?;
    value.as_struct().ok_or_else(|| StructError::NotAStruct {
        key: path.prefix(depth),
        found: value.type_name(),
    })
}

impl Struct {
    /// Resolve a dotted path such as `"caelus.caelus_cml.default"`.
    ///
    /// ```
    /// use confstruct::Struct;
    ///
    /// let config = Struct::from_yaml("caelus:\n  caelus_cml:\n    default: latest\n")?;
    /// assert_eq!(config.path_get("caelus.caelus_cml.default")?.as_str(), Some("latest"));
    /// # Ok::<_, confstruct::StructError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`StructError::InvalidPath`] for an empty path or segment,
    /// [`StructError::MissingKey`] naming the prefix that failed to resolve,
    /// and [`StructError::NotAStruct`] when an intermediate value is not a
    /// container.
    pub fn path_get(&self, path: &str) -> StructResult<&Value> {
        let dotted = DottedPath::parse(path)?;
        let mut node = self;
        for depth in 0..dotted.parents.len() {
            node = descend(node, &dotted, depth)?;
        }
        node.get_item(dotted.leaf)
            .map_err(|err| rekey(err, dotted.full()))
    }

    /// Mutable counterpart of [`Struct::path_get`].
    ///
    /// # Errors
    ///
    /// Same as [`Struct::path_get`].
    pub fn path_get_mut(&mut self, path: &str) -> StructResult<&mut Value> {
        let dotted = DottedPath::parse(path)?;
        let mut node = self;
        for (depth, segment) in dotted.parents.iter().enumerate() {
            let value = node
                .get_item_mut(segment)
                .map_err(|err| rekey(err, dotted.prefix(depth)))?;
            node = match value {
                Value::Struct(inner) => inner,
                other => {
                    return Err(StructError::NotAStruct {
                        key: dotted.prefix(depth),
                        found: other.type_name(),
                    });
                }
            };
        }
        node.get_item_mut(dotted.leaf)
            .map_err(|err| rekey(err, dotted.full()))
    }

    /// Returns `true` when `path` resolves to a value.
    #[must_use]
    pub fn path_contains(&self, path: &str) -> bool {
        self.path_get(path).is_ok()
    }

    /// Store `value` at a dotted path, creating missing intermediate
    /// containers, and return the leaf value it replaced.
    ///
    /// Existing intermediate containers are reused, never replaced.
    ///
    /// ```
    /// use confstruct::{Struct, Value};
    ///
    /// let mut config = Struct::new();
    /// config.path_set("caelus.p1.p2.p3", 10)?;
    /// assert_eq!(config.path_get("caelus.p1.p2.p3")?, &Value::from(10));
    /// # Ok::<_, confstruct::StructError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`StructError::InvalidPath`] for an empty path or segment and
    /// [`StructError::NotAStruct`] when an existing intermediate value is not
    /// a container; the container is left unchanged in both cases.
    pub fn path_set(&mut self, path: &str, value: impl Into<Value>) -> StructResult<Option<Value>> {
        let dotted = DottedPath::parse(path)?;
        self.check_settable(&dotted)?;
        let mut node = self;
        for (depth, segment) in dotted.parents.iter().enumerate() {
            if !node.contains_key(segment) {
                trace!(key = %dotted.prefix(depth), "creating intermediate mapping");
            }
            node = match node.entry_or_empty(segment) {
                Value::Struct(inner) => inner,
                other => {
                    return Err(StructError::NotAStruct {
                        key: dotted.prefix(depth),
                        found: other.type_name(),
                    });
                }
            };
        }
        Ok(node.set_item(dotted.leaf, value))
    }

    /// Walk the existing part of `path`, failing before any mutation when a
    /// non-container blocks it.
    fn check_settable(&self, path: &DottedPath<'_>) -> StructResult<()> {
        let mut node = self;
        for depth in 0..path.parents.len() {
            match descend(node, path, depth) {
                Ok(inner) => node = inner,
                Err(StructError::MissingKey { .. }) => return Ok(()),
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::DottedPath;
    use crate::StructError;

    #[rstest]
    #[case("a", &[], "a")]
    #[case("a.b.c", &["a", "b"], "c")]
    fn parses_segments(#[case] path: &str, #[case] parents: &[&str], #[case] leaf: &str) {
        let dotted = DottedPath::parse(path).expect("valid path");
        assert_eq!(dotted.parents, parents);
        assert_eq!(dotted.leaf, leaf);
        assert_eq!(dotted.full(), path);
    }

    #[rstest]
    #[case("")]
    #[case(".")]
    #[case("a..b")]
    #[case(".a")]
    #[case("a.")]
    fn rejects_empty_segments(#[case] path: &str) {
        let err = DottedPath::parse(path).expect_err("empty segment must be rejected");
        assert!(matches!(err, StructError::InvalidPath { path: ref p } if p == path));
    }

    #[rstest]
    fn prefixes_stop_at_depth() {
        let dotted = DottedPath::parse("a.b.c.d").expect("valid path");
        assert_eq!(dotted.prefix(0), "a");
        assert_eq!(dotted.prefix(1), "a.b");
    }
}
