//! Git repository operations

use anyhow::{Context, Result};
use tracing::debug;
use url::Url;

use super::remote::{self, WebHost};
use super::runner::{CommandRunner, GitOutput};
use crate::data::CommitMessage;

/// Options for [`GitRepository::commit`].
#[derive(Debug, Clone, Default)]
pub struct CommitOptions {
    /// Prepared message; without one git opens the editor on an empty message.
    pub message: Option<CommitMessage>,
    /// Opens the editor on the prepared message before committing.
    pub edit: bool,
}

impl CommitOptions {
    /// Arguments passed to git for this commit.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["commit".to_string()];
        match &self.message {
            Some(message) => {
                if self.edit {
                    args.push("--edit".to_string());
                }
                args.push("--message".to_string());
                args.push(message.to_string());
            }
            None => args.push("--edit".to_string()),
        }
        args
    }
}

/// Git operations on the repository the runner points at.
pub struct GitRepository<R> {
    runner: R,
}

impl<R: CommandRunner> GitRepository<R> {
    /// Wraps a runner.
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Access to the underlying runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Name of the checked-out branch, empty when detached or on failure.
    pub fn current_branch(&self) -> Result<String> {
        let output = self.runner.output(&["branch", "--show-current"])?;
        if output.success {
            Ok(output.stdout_trimmed())
        } else {
            debug!(code = ?output.code, "Could not read current branch");
            Ok(String::new())
        }
    }

    /// Web URL behind `remote` (`origin` when `None`).
    pub fn remote_url(&self, remote: Option<&str>) -> Result<Url> {
        let remote = remote.unwrap_or(remote::DEFAULT_REMOTE);
        let output = self.runner.output(&["remote", "get-url", remote])?;
        if !output.success {
            anyhow::bail!("Cannot get {remote} url");
        }

        let raw = output.stdout_trimmed();
        remote::parse_remote_url(&raw).with_context(|| format!("Cannot use {remote} url"))
    }

    /// Tree view URL for `branch` (current branch when `None` or empty).
    ///
    /// `host` overrides the GitLab/GitHub guess made from the remote host.
    pub fn web_url(
        &self,
        remote: Option<&str>,
        branch: Option<&str>,
        host: Option<WebHost>,
    ) -> Result<Url> {
        let remote_url = self.remote_url(remote)?;

        let branch = match branch.filter(|b| !b.is_empty()) {
            Some(branch) => branch.to_string(),
            None => self.current_branch()?,
        };
        if branch.is_empty() {
            anyhow::bail!("Cannot determine the current branch (detached HEAD?); pass --branch");
        }

        let host = host.unwrap_or_else(|| WebHost::detect(&remote_url));
        Ok(remote::tree_url(&remote_url, &branch, host))
    }

    /// Stages `files`; `None` when there is nothing to stage.
    pub fn add_files<S: AsRef<str>>(&self, files: &[S]) -> Result<Option<GitOutput>> {
        if files.is_empty() {
            return Ok(None);
        }

        let mut args = vec!["add"];
        args.extend(files.iter().map(|f| f.as_ref()));
        self.runner.output(&args).map(Some)
    }

    /// Runs `git commit` on the user's terminal and returns git's exit code.
    pub fn commit(&self, options: &CommitOptions) -> Result<i32> {
        let args = options.to_args();
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.runner.status(&args)
    }
}
