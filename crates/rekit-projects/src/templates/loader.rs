//! Template loading from embedded and on-disk sources.
//!
//! Loads template text from:
//! - An optional override directory (checked first)
//! - Templates embedded in the binary at compile time

use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded template files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/templates/"]
#[prefix = ""]
struct EmbeddedTemplates;

/// Read-only template store with an optional override directory
#[derive(Debug, Clone, Default)]
pub struct TemplateLoader {
    override_dir: Option<Utf8PathBuf>,
}

impl TemplateLoader {
    /// Load templates from embedded resources only
    pub fn embedded() -> Self {
        Self { override_dir: None }
    }

    /// Prefer templates found under `dir`, falling back to the embedded set
    pub fn with_override_dir(dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            override_dir: Some(dir.into()),
        }
    }

    pub fn override_dir(&self) -> Option<&Utf8Path> {
        self.override_dir.as_deref()
    }

    /// Load the raw text of a template by logical name (e.g. `project/index.html`)
    pub fn load(&self, name: &str) -> Result<String> {
        if let Some(dir) = &self.override_dir {
            let path = dir.join(name);
            if path.is_file() {
                debug!("Loading template {} from {}", name, path);
                return std::fs::read_to_string(&path).map_err(|e| {
                    Error::render(name, format!("failed to read {}: {}", path, e))
                });
            }
        }

        let file = EmbeddedTemplates::get(name).ok_or_else(|| Error::template_not_found(name))?;
        debug!("Loading embedded template {}", name);
        String::from_utf8(file.data.into_owned())
            .map_err(|_| Error::render(name, "template is not valid UTF-8"))
    }

    /// Check whether a template can be resolved without reading it
    pub fn exists(&self, name: &str) -> bool {
        let on_disk = self
            .override_dir
            .as_ref()
            .is_some_and(|dir| dir.join(name).is_file());
        on_disk || EmbeddedTemplates::get(name).is_some()
    }

    /// Names of all embedded templates, sorted
    pub fn embedded_names() -> Vec<String> {
        let mut names: Vec<String> = EmbeddedTemplates::iter().map(|n| n.into_owned()).collect();
        names.sort();
        names
    }
}
