//! Rekit CLI - React project scaffolding
//!
//! This is the main entry point for the rekit command-line interface.

mod cli;
mod commands;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let config = cli.scaffold_config();

    let status = match cli.command {
        Commands::Init(args) => commands::init::run(args, config)?,
        Commands::Component(args) => commands::component::run(args, config)?,
        Commands::Completions(args) => {
            commands::completions::run(args)?;
            0
        }
    };
    Ok(ExitCode::from(status))
}

/// Log to stderr so stdout carries only command output; `RUST_LOG` wins
/// over the verbosity flags
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_directives(verbose, quiet)));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Filter directives for the rekit crates; dependencies stay at `warn`
/// unless tracing everything
fn log_directives(verbose: u8, quiet: bool) -> String {
    let level = match (quiet, verbose) {
        (true, _) => return "error".to_string(),
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => return "trace".to_string(),
    };
    format!("warn,rekit={level},rekit_projects={level}")
}
