//! Project initialization
//!
//! `init` runs five steps strictly in order:
//! 1. validate the project name
//! 2. create the root, source and public directories
//! 3. render the entry page, entry script and manifest
//! 4. bootstrap the package manager and install runtime dependencies
//! 5. patch the manifest with the run scripts
//!
//! A failing step stops the pipeline. Nothing is rolled back: directories
//! and files written by earlier steps stay on disk.

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

use crate::config::ScaffoldConfig;
use crate::error::{Error, Result};
use crate::installer::{DependencyInstaller, NpmInstaller};
use crate::manifest::ManifestPatcher;
use crate::templates::{TemplateRenderer, TemplateVars};
use crate::types::{Project, ProjectResult};

/// Entry page template
pub const INDEX_HTML_TEMPLATE: &str = "project/index.html";
/// Entry script template
pub const INDEX_JS_TEMPLATE: &str = "project/index.js";
/// Manifest template
pub const MANIFEST_TEMPLATE: &str = "project/package.json";

/// Creates a new project from the project templates
pub struct ProjectInitializer {
    config: ScaffoldConfig,
    renderer: TemplateRenderer,
    installer: Box<dyn DependencyInstaller>,
}

impl ProjectInitializer {
    /// Build an initializer using the configured package manager
    pub fn new(config: ScaffoldConfig) -> Self {
        let installer = NpmInstaller::new(config.package_manager.clone(), config.assume_yes);
        Self::with_installer(config, Box::new(installer))
    }

    /// Build an initializer with a custom installer
    pub fn with_installer(config: ScaffoldConfig, installer: Box<dyn DependencyInstaller>) -> Self {
        let renderer = TemplateRenderer::from_config(&config);
        Self {
            config,
            renderer,
            installer,
        }
    }

    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    /// Initialize `project_name` under `base`
    pub fn init(&self, base: &Utf8Path, project_name: &str) -> Result<ProjectResult> {
        let project = Project::new(base, project_name)?;
        info!("Creating project {} at {}", project.name, project.root);

        self.create_skeleton(&project)?;

        info!("Generating files ...");
        let files = self.generate_files(&project)?;

        info!("Installing dependencies ...");
        self.install_dependencies(&project)?;

        info!("Adding scripts ...");
        let patched_manifest = self.add_scripts(&project)?;

        Ok(ProjectResult {
            name: project.name,
            root: project.root,
            files,
            patched_manifest,
        })
    }

    /// Create the project root with its source and public directories
    pub fn create_skeleton(&self, project: &Project) -> Result<()> {
        for dir in [
            project.root.clone(),
            project.source_dir(&self.config),
            project.public_dir(&self.config),
        ] {
            std::fs::create_dir_all(&dir).map_err(|e| Error::directory_creation(dir.as_str(), e))?;
            debug!("Created directory {}", dir);
        }
        Ok(())
    }

    /// Template/destination pairs rendered into a project
    pub fn project_files(&self, project: &Project) -> Vec<(&'static str, Utf8PathBuf)> {
        vec![
            (
                INDEX_HTML_TEMPLATE,
                project.public_dir(&self.config).join("index.html"),
            ),
            (
                INDEX_JS_TEMPLATE,
                project.source_dir(&self.config).join("index.js"),
            ),
            (MANIFEST_TEMPLATE, project.manifest_path(&self.config)),
        ]
    }

    /// Render the project templates with `projectName` bound
    pub fn generate_files(&self, project: &Project) -> Result<Vec<Utf8PathBuf>> {
        let vars = TemplateVars::project(&project.name);
        self.project_files(project)
            .into_iter()
            .map(|(template, dest)| self.renderer.render_to(template, &vars, &dest))
            .collect()
    }

    /// Run the package manager once in the project root
    pub fn install_dependencies(&self, project: &Project) -> Result<()> {
        let status = self
            .installer
            .install(&project.root, &self.config.dependencies)?;

        if !status.success() {
            return Err(Error::dependency_install(format!(
                "{} exited with {}",
                self.config.package_manager, status
            )));
        }
        Ok(())
    }

    /// Overwrite the manifest's scripts with the configured set
    pub fn add_scripts(&self, project: &Project) -> Result<Utf8PathBuf> {
        let path = project.manifest_path(&self.config);
        ManifestPatcher::new(self.config.scripts.clone()).patch(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::installer::InstallStatus;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::tempdir;

    type Calls = Rc<RefCell<Vec<(Utf8PathBuf, Vec<String>)>>>;

    struct FakeInstaller {
        code: i32,
        calls: Calls,
    }

    impl DependencyInstaller for FakeInstaller {
        fn install(&self, directory: &Utf8Path, packages: &[String]) -> Result<InstallStatus> {
            self.calls
                .borrow_mut()
                .push((directory.to_path_buf(), packages.to_vec()));
            Ok(InstallStatus::from_code(self.code))
        }
    }

    fn initializer(code: i32) -> (ProjectInitializer, Calls) {
        let calls = Calls::default();
        let installer = FakeInstaller {
            code,
            calls: Rc::clone(&calls),
        };
        (
            ProjectInitializer::with_installer(ScaffoldConfig::default(), Box::new(installer)),
            calls,
        )
    }

    fn temp_base() -> (tempfile::TempDir, Utf8PathBuf) {
        let temp = tempdir().unwrap();
        let base = Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap();
        (temp, base)
    }

    #[test]
    fn test_init_runs_installer_once_in_root() {
        let (_temp, base) = temp_base();
        let (init, calls) = initializer(0);

        let result = init.init(&base, "shop").unwrap();

        let calls = calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, base.join("shop"));
        assert_eq!(calls[0].1, vec!["react", "react-dom"]);
        assert_eq!(result.root, base.join("shop"));
        assert_eq!(result.patched_manifest, base.join("shop/package.json"));
    }

    #[test]
    fn test_project_files_layout() {
        let (init, _) = initializer(0);
        let project = Project::new(Utf8Path::new("/w"), "shop").unwrap();
        let files = init.project_files(&project);
        assert_eq!(
            files,
            vec![
                ("project/index.html", Utf8PathBuf::from("/w/shop/public/index.html")),
                ("project/index.js", Utf8PathBuf::from("/w/shop/src/index.js")),
                ("project/package.json", Utf8PathBuf::from("/w/shop/package.json")),
            ]
        );
    }

    #[test]
    fn test_invalid_name_touches_nothing() {
        let (_temp, base) = temp_base();
        let (init, calls) = initializer(0);

        let err = init.init(&base, "   ").unwrap_err();
        assert!(matches!(err, Error::InvalidName { .. }));
        assert!(calls.borrow().is_empty());
        assert_eq!(std::fs::read_dir(&base).unwrap().count(), 0);
    }

    #[test]
    fn test_skeleton_blocked_by_file() {
        let (_temp, base) = temp_base();
        std::fs::write(base.join("shop"), "not a directory").unwrap();
        let (init, calls) = initializer(0);

        let err = init.init(&base, "shop").unwrap_err();
        assert!(matches!(err, Error::DirectoryCreation { .. }));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_existing_project_directory_is_reused() {
        let (_temp, base) = temp_base();
        std::fs::create_dir_all(base.join("shop/src")).unwrap();
        let (init, _) = initializer(0);

        assert!(init.init(&base, "shop").is_ok());
        assert!(base.join("shop/public/index.html").is_file());
    }
}
