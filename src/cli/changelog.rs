//! Changelog command — filters commit subjects read from stdin.

use std::io;

use anyhow::Result;
use clap::Parser;

use crate::data::changelog;
use crate::utils::Settings;

/// Changelog command options.
///
/// Typically fed by `git log --format=%s`.
#[derive(Parser)]
pub struct ChangelogCommand {
    /// Text put in front of every entry [default: "* " or settings].
    #[arg(short, long, allow_hyphen_values = true)]
    pub prefix: Option<String>,
}

impl ChangelogCommand {
    /// Executes the changelog command.
    pub fn execute(self, settings: &Settings) -> Result<i32> {
        let prefix = self
            .prefix
            .as_deref()
            .unwrap_or(&settings.changelog_prefix);

        let entries = changelog::collect(io::stdin().lock(), prefix)?;
        println!("{entries}");
        Ok(0)
    }
}
