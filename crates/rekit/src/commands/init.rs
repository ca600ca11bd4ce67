//! `rekit init` command handler

use std::io::IsTerminal;

use anyhow::{Context, Result};
use camino::Utf8Path;
use dialoguer::Input;
use rekit_projects::types::validate_name;
use rekit_projects::{ProjectInitializer, ScaffoldConfig};
use tracing::debug;

use crate::cli::InitArgs;
use crate::output;

use super::{exit_status, working_dir};

/// Create a new React project in the current directory
pub fn run(args: InitArgs, config: ScaffoldConfig) -> Result<u8> {
    let config = config
        .with_package_manager(args.package_manager)
        .with_assume_yes(args.yes);

    let name = if args.yes || !std::io::stdin().is_terminal() {
        args.project_name
    } else {
        confirm_project_name(&args.project_name)?
    };

    let base = working_dir()?;
    create_project(&ProjectInitializer::new(config), &base, &name)
}

/// Validate the name, announce the project and run the pipeline
fn create_project(initializer: &ProjectInitializer, base: &Utf8Path, name: &str) -> Result<u8> {
    let name = validate_name(name).context("Invalid project name")?;
    debug!("Initializing '{}' under {}", name, base);

    output::header("Create New Project");
    output::field("Project name", &name);
    output::field("Location", base.join(&name).as_str());
    output::field("Package manager", &initializer.config().package_manager);
    println!();

    let project = match initializer.init(base, &name) {
        Ok(project) => project,
        Err(e) => return exit_status(e, || format!("Failed to create project '{}'", name)),
    };

    println!();
    output::success(&format!("Project '{}' created successfully", project.name));
    output::created(&project.root, project.files.iter().map(|f| f.as_path()));
    output::next_steps(&[
        format!("cd {}", project.root),
        format!("{} start", initializer.config().package_manager),
    ]);

    Ok(0)
}

/// Ask the user to confirm or override the project name
fn confirm_project_name(default: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt("Project Name")
        .default(default.to_string())
        .interact_text()
        .context("Failed to read project name")
}
