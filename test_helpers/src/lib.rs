//! Test helpers shared across crates.
//!
//! Provides indentation stripping for inline YAML fixtures and temporary YAML
//! files that clean up after themselves.

pub mod fs;
pub mod text;
