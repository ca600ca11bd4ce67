//! Scaffolding configuration
//!
//! Defaults describe a create-react-app style layout. The CLI overrides
//! individual fields from its flags.

use camino::Utf8PathBuf;

/// Which substitution engine renders templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Unknown placeholders are left as literal text
    #[default]
    Lenient,
    /// Unknown placeholders are a render error (Tera)
    Strict,
}

/// Configuration shared by project initialization and component generation
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    /// Source directory, relative to the project root
    pub source_dir: String,
    /// Static assets directory, relative to the project root
    pub public_dir: String,
    /// Component root, relative to the working directory
    pub components_dir: String,
    /// Manifest file name, relative to the project root
    pub manifest_file: String,
    /// Runtime dependencies installed after the project is rendered
    pub dependencies: Vec<String>,
    /// Script entries written into the manifest, in order
    pub scripts: Vec<(String, String)>,
    /// Package manager program
    pub package_manager: String,
    /// Skip package manager questionnaires (`init -y`)
    pub assume_yes: bool,
    /// Substitution engine
    pub render_mode: RenderMode,
    /// Directory whose templates take precedence over the embedded ones
    pub templates_dir: Option<Utf8PathBuf>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            source_dir: "src".to_string(),
            public_dir: "public".to_string(),
            components_dir: "src/components".to_string(),
            manifest_file: "package.json".to_string(),
            dependencies: vec!["react".to_string(), "react-dom".to_string()],
            scripts: default_scripts(),
            package_manager: "npm".to_string(),
            assume_yes: false,
            render_mode: RenderMode::default(),
            templates_dir: None,
        }
    }
}

impl ScaffoldConfig {
    /// Set the package manager program
    pub fn with_package_manager(mut self, program: impl Into<String>) -> Self {
        self.package_manager = program.into();
        self
    }

    /// Skip package manager questionnaires
    pub fn with_assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }

    /// Set the render mode
    pub fn with_render_mode(mut self, mode: RenderMode) -> Self {
        self.render_mode = mode;
        self
    }

    /// Set the templates override directory
    pub fn with_templates_dir(mut self, dir: Option<Utf8PathBuf>) -> Self {
        self.templates_dir = dir;
        self
    }
}

fn default_scripts() -> Vec<(String, String)> {
    ["start", "build", "test"]
        .into_iter()
        .map(|name| (name.to_string(), format!("react-scripts {}", name)))
        .collect()
}
