//! Temporary YAML files for loader tests.
//!
//! Each [`TempYaml`] owns a fresh temporary directory that is removed when
//! the guard drops.

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// RAII guard over a YAML file written into its own temporary directory.
pub struct TempYaml {
    _dir: TempDir,
    path: Utf8PathBuf,
}

impl TempYaml {
    /// Writes `contents` to `name` inside a new temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created, its path is not
    /// UTF-8, or the file cannot be written.
    pub fn write(name: &str, contents: &str) -> Result<Self> {
        let dir = TempDir::new().context("create temporary directory")?;
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .map_err(|path| anyhow::anyhow!("non-UTF-8 temporary path: {}", path.display()))?;
        let path = root.join(name);
        std::fs::write(&path, contents).with_context(|| format!("write {path}"))?;
        Ok(Self { _dir: dir, path })
    }

    /// Path of a sibling file in the same temporary directory, which need not
    /// exist yet.
    #[must_use]
    pub fn sibling(&self, name: &str) -> Utf8PathBuf {
        self.path
            .parent()
            .map_or_else(|| Utf8PathBuf::from(name), |parent| parent.join(name))
    }

    /// Path of the written file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}
