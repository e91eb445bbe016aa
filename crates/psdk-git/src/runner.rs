//! Injectable subprocess capability.
//!
//! All external commands go through the [`CommandRunner`] trait so the
//! callers stay testable: tests install a fake runner with canned output,
//! production code uses [`SystemRunner`].

use std::path::Path;
use std::process::Command;

use crate::{Error, Result};

/// Captured result of a finished command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Captured standard output, lossily decoded as UTF-8
    pub stdout: String,

    /// Exit code; `-1` when the process was terminated by a signal
    pub status: i32,
}

impl CommandOutput {
    /// Whether the command exited with status zero.
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Capability to run an external command with a working directory and
/// capture its standard output.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<CommandOutput>;
}

/// Runner backed by `std::process::Command`.
///
/// Blocks until the command completes; there is no timeout handling.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<CommandOutput> {
        tracing::debug!(program, ?args, cwd = %cwd.display(), "running command");
        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|source| Error::Spawn {
                program: program.to_string(),
                source,
            })?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            status: output.status.code().unwrap_or(-1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn system_runner_captures_stdout_and_status() {
        let temp = TempDir::new().unwrap();
        let runner = SystemRunner;

        let output = runner.run("git", &["--version"], temp.path()).unwrap();
        assert!(output.success());
        assert!(output.stdout.starts_with("git version"));
    }

    #[test]
    fn system_runner_reports_spawn_failure() {
        let temp = TempDir::new().unwrap();
        let runner = SystemRunner;

        let result = runner.run("definitely-not-a-real-binary", &[], temp.path());
        assert!(matches!(result, Err(Error::Spawn { .. })));
    }
}
