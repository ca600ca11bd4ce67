//! Scaffolding domain types

use camino::{Utf8Path, Utf8PathBuf};

use crate::config::ScaffoldConfig;
use crate::error::{Error, Result};

/// Trim a user-supplied name, rejecting empty results
pub fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_name(name));
    }
    Ok(trimmed.to_string())
}

/// A project being initialized under a base directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub root: Utf8PathBuf,
}

impl Project {
    /// Validate `name` and place the project at `base/name`
    pub fn new(base: &Utf8Path, name: &str) -> Result<Self> {
        let name = validate_name(name)?;
        let root = base.join(&name);
        Ok(Self { name, root })
    }

    pub fn source_dir(&self, config: &ScaffoldConfig) -> Utf8PathBuf {
        self.root.join(&config.source_dir)
    }

    pub fn public_dir(&self, config: &ScaffoldConfig) -> Utf8PathBuf {
        self.root.join(&config.public_dir)
    }

    pub fn manifest_path(&self, config: &ScaffoldConfig) -> Utf8PathBuf {
        self.root.join(&config.manifest_file)
    }
}

/// A component generated under the component root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub name: String,
    pub dir: Utf8PathBuf,
}

impl Component {
    /// Validate `name` and place the component at `base/<components_dir>/name`
    pub fn new(base: &Utf8Path, name: &str, config: &ScaffoldConfig) -> Result<Self> {
        let name = validate_name(name)?;
        let dir = base.join(&config.components_dir).join(&name);
        Ok(Self { name, dir })
    }
}

/// Outcome of a successful `init`
#[derive(Debug, Clone)]
pub struct ProjectResult {
    pub name: String,
    pub root: Utf8PathBuf,
    /// Rendered files, in write order
    pub files: Vec<Utf8PathBuf>,
    pub patched_manifest: Utf8PathBuf,
}

/// Outcome of a successful component generation
#[derive(Debug, Clone)]
pub struct ComponentResult {
    pub name: String,
    pub dir: Utf8PathBuf,
    /// Rendered files, in write order
    pub files: Vec<Utf8PathBuf>,
}
