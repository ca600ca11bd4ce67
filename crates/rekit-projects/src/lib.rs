//! # rekit-projects
//!
//! Scaffolding library for the rekit CLI providing:
//! - Template loading and placeholder substitution
//! - React project initialization (directories, files, dependencies, scripts)
//! - Component generation
//! - `package.json` script patching
//!
//! # Examples
//!
//! ## Initialize a project
//!
//! ```no_run
//! use rekit_projects::{ProjectInitializer, ScaffoldConfig};
//! use camino::Utf8Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let initializer = ProjectInitializer::new(ScaffoldConfig::default());
//! let project = initializer.init(Utf8Path::new("."), "my-app")?;
//! println!("created {}", project.root);
//! # Ok(())
//! # }
//! ```
//!
//! ## Generate a component
//!
//! ```no_run
//! use rekit_projects::{ComponentGenerator, ScaffoldConfig};
//! use camino::Utf8Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = ComponentGenerator::new(ScaffoldConfig::default());
//! let component = generator.generate_component(Utf8Path::new("."), "Button")?;
//! assert_eq!(component.files.len(), 3);
//! # Ok(())
//! # }
//! ```

pub mod component;
pub mod config;
pub mod error;
pub mod installer;
pub mod manifest;
pub mod project;
pub mod templates;
pub mod types;

pub use error::{Error, Result};

pub use component::ComponentGenerator;
pub use config::{RenderMode, ScaffoldConfig};
pub use installer::{DependencyInstaller, InstallStatus, NpmInstaller};
pub use manifest::ManifestPatcher;
pub use project::ProjectInitializer;
pub use templates::{Renderer, TemplateLoader, TemplateRenderer, TemplateVars};
pub use types::{ComponentResult, ProjectResult};
