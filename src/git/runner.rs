//! Invocation of the git binary.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use tracing::debug;

use crate::utils::Settings;

/// Program run when nothing else is configured.
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Environment variable naming an alternative git program.
pub const GIT_PROGRAM_VAR: &str = "GIT_CC_GIT";

/// Captured result of a git invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOutput {
    /// Whether git exited with status 0.
    pub success: bool,
    /// Exit code, if git was not killed by a signal.
    pub code: Option<i32>,
    /// Everything git wrote to stdout.
    pub stdout: Vec<u8>,
}

impl GitOutput {
    /// Stdout as text with surrounding whitespace removed.
    pub fn stdout_trimmed(&self) -> String {
        String::from_utf8_lossy(&self.stdout).trim().to_string()
    }
}

/// Runs git with an argument list.
pub trait CommandRunner {
    /// Runs git capturing stdout; stderr goes to the user's terminal.
    fn output(&self, args: &[&str]) -> Result<GitOutput>;

    /// Runs git attached to the user's terminal and returns its exit code.
    ///
    /// A git killed by a signal reports exit code 1.
    fn status(&self, args: &[&str]) -> Result<i32>;
}

/// Runs the real git binary.
#[derive(Debug, Clone)]
pub struct Git {
    program: String,
    current_dir: Option<PathBuf>,
}

impl Default for Git {
    fn default() -> Self {
        Self::new(DEFAULT_GIT_PROGRAM)
    }
}

impl Git {
    /// Runs `program` in the current directory.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            current_dir: None,
        }
    }

    /// Uses the program named by [`GIT_PROGRAM_VAR`] in the environment or
    /// the settings `env` table, else `git`.
    pub fn from_settings(settings: &Settings) -> Self {
        settings
            .get_env_var(GIT_PROGRAM_VAR)
            .map_or_else(Self::default, Self::new)
    }

    /// Runs git inside `dir` instead of the current directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    fn command(&self, args: &[&str]) -> Command {
        debug!(program = %self.program, ?args, "Running git");
        let mut command = Command::new(&self.program);
        command.args(args);
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }
        command
    }
}

impl CommandRunner for Git {
    fn output(&self, args: &[&str]) -> Result<GitOutput> {
        let output = self
            .command(args)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .with_context(|| format!("Failed to execute {} {}", self.program, args.join(" ")))?;

        debug!(status = ?output.status.code(), "git finished");

        Ok(GitOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: output.stdout,
        })
    }

    fn status(&self, args: &[&str]) -> Result<i32> {
        let status = self
            .command(args)
            .status()
            .with_context(|| format!("Failed to execute {} {}", self.program, args.join(" ")))?;

        debug!(status = ?status.code(), "git finished");

        Ok(status.code().unwrap_or(1))
    }
}
