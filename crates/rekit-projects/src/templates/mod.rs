//! Template system for project and component scaffolding.
//!
//! - `loader`: resolve a logical template name to its text
//! - `renderer`: substitute variables into template text
//!
//! [`TemplateRenderer`] combines the two: it loads a template by name,
//! renders it, and optionally writes the result to disk.
//!
//! ```no_run
//! use rekit_projects::templates::{TemplateRenderer, TemplateVars};
//!
//! let renderer = TemplateRenderer::new();
//! let html = renderer
//!     .render("project/index.html", &TemplateVars::project("my-app"))
//!     .unwrap();
//! assert!(html.contains("my-app"));
//! ```

pub mod loader;
pub mod renderer;

pub use loader::TemplateLoader;
pub use renderer::{renderer_for, PlaceholderRenderer, Renderer, TemplateVars, TeraRenderer};

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use crate::config::ScaffoldConfig;
use crate::error::{Error, Result};

/// Loads templates by name and renders them with a [`Renderer`]
#[derive(Debug)]
pub struct TemplateRenderer {
    loader: TemplateLoader,
    engine: Box<dyn Renderer>,
}

impl TemplateRenderer {
    /// Embedded templates with lenient substitution
    pub fn new() -> Self {
        Self::with_engine(TemplateLoader::embedded(), Box::new(PlaceholderRenderer))
    }

    /// Build a renderer from configuration
    pub fn from_config(config: &ScaffoldConfig) -> Self {
        let loader = match &config.templates_dir {
            Some(dir) => TemplateLoader::with_override_dir(dir.clone()),
            None => TemplateLoader::embedded(),
        };
        Self::with_engine(loader, renderer_for(config.render_mode))
    }

    /// Use a specific loader and substitution engine
    pub fn with_engine(loader: TemplateLoader, engine: Box<dyn Renderer>) -> Self {
        Self { loader, engine }
    }

    pub fn loader(&self) -> &TemplateLoader {
        &self.loader
    }

    /// Load `name` and substitute `vars` into it
    pub fn render(&self, name: &str, vars: &TemplateVars) -> Result<String> {
        let text = self.loader.load(name)?;
        self.engine.render(name, &text, vars)
    }

    /// Render `name` and write the result to `dest`.
    ///
    /// The parent directory must already exist.
    pub fn render_to(
        &self,
        name: &str,
        vars: &TemplateVars,
        dest: &Utf8Path,
    ) -> Result<Utf8PathBuf> {
        let content = self.render(name, vars)?;
        std::fs::write(dest, content).map_err(|e| Error::file_write(dest.as_str(), e))?;
        debug!("Rendered {} -> {}", name, dest);
        Ok(dest.to_path_buf())
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
