//! Component generation
//!
//! Writes a component definition, a stylesheet and a barrel file into
//! `<components_dir>/<name>/`. An existing component directory stops
//! generation before anything is written.

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

use crate::config::ScaffoldConfig;
use crate::error::{Error, Result};
use crate::templates::{TemplateRenderer, TemplateVars};
use crate::types::{Component, ComponentResult};

/// Component definition template
pub const COMPONENT_TEMPLATE: &str = "component/Component.js";
/// Component stylesheet template
pub const STYLE_TEMPLATE: &str = "component/Component.css";
/// Barrel file template
pub const BARREL_TEMPLATE: &str = "component/index.js";

/// Generates component directories from the component templates
#[derive(Debug)]
pub struct ComponentGenerator {
    config: ScaffoldConfig,
    renderer: TemplateRenderer,
}

impl ComponentGenerator {
    pub fn new(config: ScaffoldConfig) -> Self {
        let renderer = TemplateRenderer::from_config(&config);
        Self { config, renderer }
    }

    /// Generate `component_name` under the component root of `base`
    pub fn generate_component(
        &self,
        base: &Utf8Path,
        component_name: &str,
    ) -> Result<ComponentResult> {
        let component = Component::new(base, component_name, &self.config)?;

        if component.dir.exists() {
            return Err(Error::component_exists(
                &component.name,
                component.dir.as_str(),
            ));
        }

        std::fs::create_dir_all(&component.dir)
            .map_err(|e| Error::directory_creation(component.dir.as_str(), e))?;
        debug!("Created directory {}", component.dir);

        let vars = TemplateVars::component(&component.name);
        let files = component_files(&component)
            .into_iter()
            .map(|(template, dest)| self.renderer.render_to(template, &vars, &dest))
            .collect::<Result<Vec<_>>>()?;

        info!("Component {} generated", component.name);
        Ok(ComponentResult {
            name: component.name,
            dir: component.dir,
            files,
        })
    }
}

/// Template/destination pairs for a component
pub fn component_files(component: &Component) -> Vec<(&'static str, Utf8PathBuf)> {
    vec![
        (
            COMPONENT_TEMPLATE,
            component.dir.join(format!("{}.js", component.name)),
        ),
        (
            STYLE_TEMPLATE,
            component.dir.join(format!("{}.css", component.name)),
        ),
        (BARREL_TEMPLATE, component.dir.join("index.js")),
    ]
}
