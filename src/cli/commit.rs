//! Commit command — builds a conventional commit message and commits.

use std::io::{Read, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};

use crate::data::{CommitMessage, CommitType};
use crate::git::{CommandRunner, CommitOptions, Git, GitRepository};
use crate::prompt::{Prompt, PromptOptions};
use crate::utils::Settings;

const SCOPE_QUESTION: &str = "Scope:";
const DESCRIPTION_QUESTION: &str = "Description (leave empty to open an editor):";

/// Commit command options.
///
/// Parts missing from the command line are asked for interactively.
#[derive(Parser)]
pub struct CommitCommand {
    /// Commit type (e.g. FEAT or feat); chosen from a menu when absent or unknown.
    #[arg(short = 't', long = "type")]
    pub commit_type: Option<String>,

    /// Scope shown in parentheses after the type.
    #[arg(short, long)]
    pub scope: Option<String>,

    /// Description; an empty one opens the editor.
    #[arg(short, long, allow_hyphen_values = true)]
    pub description: Option<String>,

    /// Opens the editor on the prepared message before committing.
    #[arg(short, long)]
    pub edit: bool,

    /// Files to stage before committing.
    #[arg(value_name = "FILES")]
    pub files: Vec<String>,
}

impl CommitCommand {
    /// Executes the commit command and returns git's exit code.
    pub fn execute(self, settings: &Settings) -> Result<i32> {
        crate::utils::check_git_repository()?;

        let options = PromptOptions::standard().with_buffer_size(settings.buffer_size);
        let mut prompt = Prompt::new(&settings.prompt, options);
        let repo = GitRepository::new(Git::from_settings(settings));

        self.run(&mut prompt, &repo)
    }

    /// Asks for missing parts on `prompt`, then stages and commits via `repo`.
    pub fn run<R, W, C>(self, prompt: &mut Prompt<R, W>, repo: &GitRepository<C>) -> Result<i32>
    where
        R: Read,
        W: Write,
        C: CommandRunner,
    {
        let commit_type = match self.commit_type {
            Some(token) if token.parse::<CommitType>().is_ok() => token,
            other => {
                if let Some(token) = other {
                    warn!(commit_type = %token, "Unknown commit type, asking instead");
                }
                prompt
                    .select(&CommitType::ALL)
                    .context("Failed to read commit type")?
                    .to_string()
            }
        };

        let scope = match self.scope {
            Some(scope) => scope,
            None => {
                prompt.print_ln([SCOPE_QUESTION])?;
                prompt.read_string().context("Failed to read scope")?
            }
        };

        let description = match self.description {
            Some(description) => description,
            None => {
                prompt.print_ln([DESCRIPTION_QUESTION])?;
                prompt
                    .read_string()
                    .context("Failed to read description")?
                    .trim()
                    .to_string()
            }
        };

        if let Some(output) = repo.add_files(&self.files)? {
            if !output.success {
                debug!(code = ?output.code, "git add failed, not committing");
                return Ok(1);
            }
        }

        let options = CommitOptions {
            edit: self.edit || description.is_empty(),
            message: Some(CommitMessage::new(commit_type, scope, description)),
        };
        repo.commit(&options)
    }
}
