//! Primary error enum for the configuration container.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for results returned by this crate.
pub type StructResult<T> = Result<T, StructError>;

/// Errors raised while reading, addressing or (de)serialising a [`crate::Struct`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StructError {
    /// Lookup of a key that was never inserted.
    ///
    /// For dotted paths `key` holds the prefix up to and including the
    /// missing segment.
    #[error("no such attribute: '{key}'")]
    MissingKey {
        /// Key or dotted prefix that failed to resolve.
        key: String,
    },

    /// Dotted path that is empty or contains an empty segment.
    #[error("invalid attribute path '{path}': segments must be non-empty")]
    InvalidPath {
        /// Path exactly as supplied by the caller.
        path: String,
    },

    /// A value was addressed as a container but holds something else.
    #[error("'{key}' is a {found}, not a mapping")]
    NotAStruct {
        /// Key or dotted prefix naming the offending value.
        key: String,
        /// Type name of the value found there.
        found: &'static str,
    },

    /// A value was indexed as a sequence but holds something else.
    #[error("expected a sequence, found a {found}")]
    NotASequence {
        /// Type name of the value found.
        found: &'static str,
    },

    /// Sequence index past the end.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Length of the sequence.
        len: usize,
    },

    /// A YAML document whose root is not a mapping.
    #[error("YAML document root must be a mapping, found a {found}")]
    NotAMapping {
        /// Type name of the document root.
        found: &'static str,
    },

    /// Malformed YAML reported by the parser.
    #[error("failed to parse YAML: {0}")]
    Yaml(#[source] Box<serde_saphyr::Error>),

    /// The YAML engine rejected the container while serialising it.
    #[error("failed to emit YAML: {0}")]
    Emit(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Failure reading or writing a YAML file.
    #[error("failed to access '{path}': {source}")]
    Io {
        /// File that could not be read or written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The container could not be deserialised into the requested type.
    #[error("failed to extract configuration: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl From<serde_saphyr::Error> for StructError {
    fn from(err: serde_saphyr::Error) -> Self {
        Self::Yaml(Box::new(err))
    }
}

impl StructError {
    /// Construct a [`StructError::MissingKey`].
    #[must_use]
    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }

    /// Construct a [`StructError::Io`] for `path`.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Construct a [`StructError::Emit`] from a serialiser failure.
    #[must_use]
    pub fn emit(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Emit(Box::new(source))
    }

    /// Report whether this error signals an absent key or path segment.
    ///
    /// ```
    /// use confstruct::{Struct, StructError};
    ///
    /// let config = Struct::new();
    /// let err = config.get_attr("missing").unwrap_err();
    /// assert!(err.is_missing_key());
    /// assert!(!StructError::InvalidPath { path: String::new() }.is_missing_key());
    /// ```
    #[must_use]
    pub const fn is_missing_key(&self) -> bool {
        matches!(self, Self::MissingKey { .. })
    }
}
