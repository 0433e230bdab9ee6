//! Emission settings for [`crate::Struct::to_yaml`].

/// Layout options for YAML output.
///
/// ```
/// use confstruct::YamlOptions;
///
/// let options = YamlOptions::new().with_default_flow_style(true);
/// assert!(options.default_flow_style());
/// assert!(!YamlOptions::default().default_flow_style());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YamlOptions {
    default_flow_style: bool,
}

impl YamlOptions {
    /// Block style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            default_flow_style: false,
        }
    }

    /// Emit nested mappings and sequences inline (`{a: 1, b: [2, 3]}`) when
    /// `flow` is `true`; use indented block style otherwise.
    #[must_use]
    pub const fn with_default_flow_style(mut self, flow: bool) -> Self {
        self.default_flow_style = flow;
        self
    }

    /// Whether collections are emitted in flow style.
    #[must_use]
    pub const fn default_flow_style(&self) -> bool {
        self.default_flow_style
    }
}
