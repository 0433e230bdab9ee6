//! Error types produced by container lookups, path walks and YAML I/O.

mod types;

pub use types::{StructError, StructResult};
