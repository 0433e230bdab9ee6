//! Ordered, attribute-style configuration containers.
//!
//! A [`Struct`] maps string keys to [`Value`]s and keeps them in insertion
//! order. Nested mappings are always containers themselves, whether they
//! arrive through construction, assignment, merging or YAML, so lookups can
//! chain at any depth. On top of plain key access the container offers:
//!
//! - recursive, right-biased merging ([`Struct::merge`], [`merge`]);
//! - dotted-path addressing with auto-created intermediates
//!   ([`Struct::path_get`], [`Struct::path_set`]);
//! - YAML load and dump ([`Struct::from_yaml`], [`Struct::load_yaml`],
//!   [`Struct::to_yaml`]) with block or flow layout ([`YamlOptions`]).
//!
//! ```
//! use confstruct::{Struct, YamlOptions};
//!
//! let mut config = Struct::from_yaml("caelus:\n  caelus_cml:\n    default: latest\n")?;
//! config.path_set("caelus.caelus_cml.default", "v6.10")?;
//! assert_eq!(
//!     config.to_yaml(&YamlOptions::default().with_default_flow_style(true))?,
//!     "{caelus: {caelus_cml: {default: v6.10}}}\n",
//! );
//! # Ok::<_, confstruct::StructError>(())
//! ```

mod error;
mod merge;
mod structure;
mod value;
mod yaml;

pub use error::{StructError, StructResult};
pub use merge::merge;
pub use structure::Struct;
pub use value::Value;
pub use yaml::YamlOptions;
