//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use rekit_projects::{RenderMode, ScaffoldConfig};

/// Rekit - React project scaffolding and component generation
#[derive(Parser, Debug)]
#[command(name = "rekit")]
#[command(author, version, about = "A CLI for React development", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Directory with templates that override the built-in ones
    #[arg(long, global = true, value_name = "DIR")]
    pub templates_dir: Option<Utf8PathBuf>,

    /// Fail on template placeholders that have no value
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Scaffolding configuration derived from the global flags
    pub fn scaffold_config(&self) -> ScaffoldConfig {
        let mode = if self.strict {
            RenderMode::Strict
        } else {
            RenderMode::Lenient
        };
        ScaffoldConfig::default()
            .with_render_mode(mode)
            .with_templates_dir(self.templates_dir.clone())
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new React project
    Init(InitArgs),

    /// Generate a new React component
    Component(ComponentArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// Init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project name (confirmed interactively unless --yes)
    pub project_name: String,

    /// Accept the name as given and skip package manager questions
    #[arg(short, long)]
    pub yes: bool,

    /// Package manager used to install dependencies
    #[arg(long, default_value = "npm", value_name = "PROGRAM")]
    pub package_manager: String,
}

// Component command
#[derive(Args, Debug)]
pub struct ComponentArgs {
    /// Component name, used for the directory and file names
    pub component_name: String,
}

// Completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_init() {
        let cli = Cli::try_parse_from(["rekit", "init", "my-app"]).unwrap();
        match cli.command {
            Commands::Init(args) => {
                assert_eq!(args.project_name, "my-app");
                assert!(!args.yes);
                assert_eq!(args.package_manager, "npm");
            }
            other => panic!("expected init, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_init_flags() {
        let cli = Cli::try_parse_from([
            "rekit",
            "init",
            "my-app",
            "-y",
            "--package-manager",
            "pnpm",
        ])
        .unwrap();
        match cli.command {
            Commands::Init(args) => {
                assert!(args.yes);
                assert_eq!(args.package_manager, "pnpm");
            }
            other => panic!("expected init, got {:?}", other),
        }
    }

    #[test]
    fn test_init_requires_name() {
        assert!(Cli::try_parse_from(["rekit", "init"]).is_err());
    }

    #[test]
    fn test_parse_component_with_globals() {
        let cli = Cli::try_parse_from([
            "rekit",
            "component",
            "Button",
            "--strict",
            "--templates-dir",
            "/opt/rekit",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);

        let config = cli.scaffold_config();
        assert_eq!(config.render_mode, RenderMode::Strict);
        assert_eq!(config.templates_dir, Some(Utf8PathBuf::from("/opt/rekit")));

        match cli.command {
            Commands::Component(args) => assert_eq!(args.component_name, "Button"),
            other => panic!("expected component, got {:?}", other),
        }
    }

    #[test]
    fn test_default_config_is_lenient() {
        let cli = Cli::try_parse_from(["rekit", "component", "Nav"]).unwrap();
        let config = cli.scaffold_config();
        assert_eq!(config.render_mode, RenderMode::Lenient);
        assert!(config.templates_dir.is_none());
    }
}
