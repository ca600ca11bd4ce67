//! Error types for rekit-projects

use thiserror::Error;

/// Result type alias using rekit-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Empty or whitespace-only project/component name
    #[error("Invalid name: '{name}'. A name must contain at least one non-whitespace character")]
    InvalidName { name: String },

    /// Directory could not be created
    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreation {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Template not found in any template source
    #[error("Template not found: {template}")]
    TemplateNotFound { template: String },

    /// Template could not be rendered
    #[error("Failed to render template {template}: {message}")]
    Render { template: String, message: String },

    /// Rendered output could not be written
    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Component directory already exists
    #[error("Component {name} already exists!")]
    ComponentExists { name: String, path: String },

    /// Package manager could not be run or exited unsuccessfully
    #[error("Dependency installation failed: {message}")]
    DependencyInstall { message: String },

    /// Manifest could not be read, parsed, or written back
    #[error("Failed to patch manifest {path}: {message}")]
    ManifestPatch { path: String, message: String },
}

impl Error {
    /// Create an invalid name error
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }

    /// Create a directory creation error
    pub fn directory_creation(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::DirectoryCreation {
            path: path.into(),
            source,
        }
    }

    /// Create a template not found error
    pub fn template_not_found(template: impl Into<String>) -> Self {
        Self::TemplateNotFound {
            template: template.into(),
        }
    }

    /// Create a render error
    pub fn render(template: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Render {
            template: template.into(),
            message: message.into(),
        }
    }

    /// Create a file write error
    pub fn file_write(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a component exists error
    pub fn component_exists(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::ComponentExists {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Create a dependency install error
    pub fn dependency_install(message: impl Into<String>) -> Self {
        Self::DependencyInstall {
            message: message.into(),
        }
    }

    /// Create a manifest patch error
    pub fn manifest_patch(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ManifestPatch {
            path: path.into(),
            message: message.into(),
        }
    }

    /// A soft stop: reported to the user but not a failure of the command
    pub fn is_soft(&self) -> bool {
        matches!(self, Self::ComponentExists { .. })
    }

    /// Errors after which the CLI terminates the process with status 1
    pub fn exit_explicitly(&self) -> bool {
        matches!(
            self,
            Self::DependencyInstall { .. } | Self::ManifestPatch { .. }
        )
    }
}
