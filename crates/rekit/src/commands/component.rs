//! `rekit component` command handler

use anyhow::Result;
use camino::Utf8Path;
use rekit_projects::{ComponentGenerator, ScaffoldConfig};
use tracing::debug;

use crate::cli::ComponentArgs;
use crate::output;

use super::{exit_status, working_dir};

/// Generate a component under `src/components` of the current directory
pub fn run(args: ComponentArgs, config: ScaffoldConfig) -> Result<u8> {
    let base = working_dir()?;
    generate(&ComponentGenerator::new(config), &base, &args.component_name)
}

fn generate(generator: &ComponentGenerator, base: &Utf8Path, name: &str) -> Result<u8> {
    debug!("Generating '{}' under {}", name, base);

    match generator.generate_component(base, name) {
        Ok(component) => {
            output::success(&format!("Component {} generated!", component.name));
            output::created(base, component.files.iter().map(|f| f.as_path()));
            Ok(0)
        }
        Err(e) => exit_status(e, || format!("Failed to generate component '{}'", name)),
    }
}
