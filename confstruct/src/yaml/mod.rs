//! YAML load and dump for [`Struct`].
//!
//! Parsing is delegated to `serde-saphyr`, which builds containers directly
//! through the crate's `Deserialize` impls. Emission hands the container's
//! `Serialize` impl to an engine: `serde-saphyr` with its flow-mapping hint
//! for flow style, `serde_yaml` for block style.

mod options;

use std::fs;
use std::path::Path;

use serde_saphyr::{FlowMap, Options};
use tracing::debug;

use crate::{Struct, StructError, StructResult, Value};

pub use options::YamlOptions;

/// Parser options: YAML 1.2 booleans, so `yes`/`no`/`on`/`off` stay strings.
fn parse_options() -> Options {
    Options {
        strict_booleans: true,
        ..Options::default()
    }
}

impl Struct {
    /// Parse a YAML document whose root is a mapping.
    ///
    /// A blank document yields an empty container.
    ///
    /// ```
    /// use confstruct::Struct;
    ///
    /// let config = Struct::from_yaml("caelus:\n  versions:\n    - version: v7.04\n")?;
    /// let first = config.path_get("caelus.versions")?.get_index(0)?;
    /// assert_eq!(first.get_attr("version")?.as_str(), Some("v7.04"));
    /// # Ok::<_, confstruct::StructError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`StructError::Yaml`] when the text is not valid YAML and
    /// [`StructError::NotAMapping`] when the root is a scalar or sequence.
    pub fn from_yaml(text: &str) -> StructResult<Self> {
        if text.trim().is_empty() {
            return Ok(Self::new());
        }
        let value: Value = serde_saphyr::from_str_with_options(text, parse_options())?;
        match value {
            Value::Struct(root) => Ok(root),
            Value::Null => Ok(Self::new()),
            other => Err(StructError::NotAMapping {
                found: other.type_name(),
            }),
        }
    }

    /// Read the file at `path` and parse it with [`Struct::from_yaml`].
    ///
    /// # Errors
    ///
    /// Returns [`StructError::Io`] when the file cannot be read, otherwise the
    /// errors of [`Struct::from_yaml`].
    pub fn load_yaml(path: impl AsRef<Path>) -> StructResult<Self> {
        let file = path.as_ref();
        let contents = fs::read_to_string(file).map_err(|err| StructError::io(file, err))?;
        debug!(path = %file.display(), bytes = contents.len(), "loaded YAML configuration");
        Self::from_yaml(&contents)
    }

    /// Serialise the container to YAML text.
    ///
    /// Keys are written in insertion order. Parsing block output with
    /// [`Struct::from_yaml`] gives back an equal container, except that a
    /// `.nan` float never compares equal to itself. Flow output writes most
    /// strings unquoted, so strings holding flow indicators (`,`, `[`, `{`)
    /// or spelling a number only survive the block round trip.
    ///
    /// ```
    /// use confstruct::{Struct, YamlOptions};
    ///
    /// let config = Struct::from_yaml("a:\n  b: [1, 2]\n")?;
    /// assert_eq!(config.to_yaml(&YamlOptions::default())?, "a:\n  b:\n  - 1\n  - 2\n");
    /// assert_eq!(
    ///     config.to_yaml(&YamlOptions::default().with_default_flow_style(true))?,
    ///     "{a: {b: [1, 2]}}\n",
    /// );
    /// # Ok::<_, confstruct::StructError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`StructError::Emit`] when the YAML engine fails.
    pub fn to_yaml(&self, options: &YamlOptions) -> StructResult<String> {
        if options.default_flow_style() {
            serde_saphyr::to_string(&FlowMap(self)).map_err(StructError::emit)
        } else {
            serde_yaml::to_string(self).map_err(StructError::emit)
        }
    }

    /// Write [`Struct::to_yaml`] output to the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StructError::Emit`] when serialisation fails and
    /// [`StructError::Io`] when the file cannot be written.
    pub fn dump_yaml(&self, path: impl AsRef<Path>, options: &YamlOptions) -> StructResult<()> {
        let file = path.as_ref();
        let rendered = self.to_yaml(options)?;
        fs::write(file, &rendered).map_err(|err| StructError::io(file, err))?;
        debug!(path = %file.display(), bytes = rendered.len(), "wrote YAML configuration");
        Ok(())
    }
}
