//! Package manager invocation
//!
//! The installer runs as a single blocking child process with inherited
//! stdio, so its output streams straight to the user's terminal. There is no
//! timeout; a hung package manager blocks the caller.

use std::fmt;
use std::process::{Command, ExitStatus};

use camino::Utf8Path;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Exit status of an installer run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallStatus {
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
}

impl InstallStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for InstallStatus {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

impl fmt::Display for InstallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {}", code),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Bootstraps a project's package manifest and installs runtime packages
pub trait DependencyInstaller {
    /// Install `packages` into the project at `directory`.
    ///
    /// `Err` means the installer could not be run at all; a run that
    /// completes unsuccessfully is reported through the returned status.
    fn install(&self, directory: &Utf8Path, packages: &[String]) -> Result<InstallStatus>;
}

/// Runs `<pm> init && <pm> install <packages>` through the platform shell
#[derive(Debug, Clone)]
pub struct NpmInstaller {
    program: String,
    assume_yes: bool,
}

impl NpmInstaller {
    pub fn new(program: impl Into<String>, assume_yes: bool) -> Self {
        Self {
            program: program.into(),
            assume_yes,
        }
    }

    /// The shell command line run inside the project directory
    pub fn command_line(&self, packages: &[String]) -> String {
        let init = if self.assume_yes { "init -y" } else { "init" };
        let mut line = format!("{pm} {init} && {pm} install", pm = shell_quote(&self.program));
        for package in packages {
            line.push(' ');
            line.push_str(&shell_quote(package));
        }
        line
    }
}

impl Default for NpmInstaller {
    fn default() -> Self {
        Self::new("npm", false)
    }
}

impl DependencyInstaller for NpmInstaller {
    fn install(&self, directory: &Utf8Path, packages: &[String]) -> Result<InstallStatus> {
        which::which(&self.program).map_err(|_| {
            Error::dependency_install(format!("'{}' not found in PATH", self.program))
        })?;

        let line = self.command_line(packages);
        info!("Running `{}` in {}", line, directory);

        let mut cmd = shell(&line);
        cmd.current_dir(directory);

        let status = cmd.status().map_err(|e| {
            Error::dependency_install(format!("failed to run {}: {}", self.program, e))
        })?;

        debug!("{} finished with {:?}", self.program, status);
        Ok(status.into())
    }
}

#[cfg(windows)]
fn shell(line: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", line]);
    cmd
}

#[cfg(not(windows))]
fn shell(line: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", line]);
    cmd
}

/// Quote an argument for the shell unless it is plainly safe
fn shell_quote(arg: &str) -> String {
    let safe = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "@/._-^=".contains(c));
    if safe {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
