//! Command implementations

pub mod completions;
pub mod component;
pub mod init;

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use rekit_projects::Error;

use crate::output;

/// The working directory projects and components are created in
pub(crate) fn working_dir() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    Utf8PathBuf::try_from(cwd).context("Current directory is not valid UTF-8")
}

/// Resolve a failed scaffolding step into the process exit status.
///
/// A component collision is reported and exits 0. Install and manifest
/// failures are reported and exit 1; files already written stay on disk.
/// Every other error is returned with `context` attached.
pub(crate) fn exit_status(err: Error, context: impl FnOnce() -> String) -> Result<u8> {
    if err.is_soft() {
        output::notice(&err.to_string());
        Ok(0)
    } else if err.exit_explicitly() {
        output::failure(&err.to_string());
        Ok(1)
    } else {
        Err(err).with_context(context)
    }
}
