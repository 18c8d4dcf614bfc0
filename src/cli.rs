//! CLI interface for git-cc.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;

use crate::utils::Settings;

pub mod changelog;
pub mod commit;
pub mod get_url;
pub mod types;

pub use changelog::ChangelogCommand;
pub use commit::CommitCommand;
pub use get_url::GetUrlCommand;
pub use types::TypesCommand;

/// git-cc: conventional commit helpers for git.
#[derive(Parser)]
#[command(name = "git-cc")]
#[command(about = "Conventional commit helpers for git", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The command to execute; lists commit types when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Prints the conventional commit types.
    Types(TypesCommand),
    /// Builds a conventional commit message, asking for missing parts, and commits.
    Commit(CommitCommand),
    /// Prints the web URL of a branch on GitLab or GitHub.
    #[command(name = "get-url")]
    GetUrl(GetUrlCommand),
    /// Keeps the conventional commit lines read from stdin.
    Changelog(ChangelogCommand),
}

impl Cli {
    /// Executes the CLI command and returns the process exit code.
    pub fn execute(self) -> Result<i32> {
        let settings = load_settings();

        match self.command {
            Some(Commands::Types(types_cmd)) => types_cmd.execute(),
            None => TypesCommand::default().execute(),
            Some(Commands::Commit(commit_cmd)) => commit_cmd.execute(&settings),
            Some(Commands::GetUrl(url_cmd)) => url_cmd.execute(&settings),
            Some(Commands::Changelog(changelog_cmd)) => changelog_cmd.execute(&settings),
        }
    }
}

fn load_settings() -> Settings {
    Settings::load().unwrap_or_else(|err| {
        warn!("Ignoring settings: {err:#}");
        Settings::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::WebHost;

    #[test]
    fn no_command_is_accepted() {
        let cli = Cli::try_parse_from(["git-cc"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert!(Cli::try_parse_from(["git-cc", "push"]).is_err());
    }

    #[test]
    fn parses_commit_flags_and_files() {
        let cli = Cli::try_parse_from([
            "git-cc", "commit", "-t", "feat", "-s", "cli", "-d", "add url", "-e", "a.rs", "b.rs",
        ])
        .unwrap();
        let Some(Commands::Commit(cmd)) = cli.command else {
            panic!("expected commit");
        };
        assert_eq!(cmd.commit_type.as_deref(), Some("feat"));
        assert_eq!(cmd.scope.as_deref(), Some("cli"));
        assert_eq!(cmd.description.as_deref(), Some("add url"));
        assert!(cmd.edit);
        assert_eq!(cmd.files, vec!["a.rs", "b.rs"]);
    }

    #[test]
    fn parses_commit_long_flags() {
        let cli = Cli::try_parse_from([
            "git-cc",
            "commit",
            "--type",
            "FIX",
            "--scope",
            "",
            "--description",
            "x",
        ])
        .unwrap();
        let Some(Commands::Commit(cmd)) = cli.command else {
            panic!("expected commit");
        };
        assert_eq!(cmd.commit_type.as_deref(), Some("FIX"));
        assert_eq!(cmd.scope.as_deref(), Some(""));
        assert!(!cmd.edit);
        assert!(cmd.files.is_empty());
    }

    #[test]
    fn parses_get_url() {
        let cli =
            Cli::try_parse_from(["git-cc", "get-url", "-b", "dev", "-r", "up", "-t", "github"])
                .unwrap();
        let Some(Commands::GetUrl(cmd)) = cli.command else {
            panic!("expected get-url");
        };
        assert_eq!(cmd.branch.as_deref(), Some("dev"));
        assert_eq!(cmd.remote.as_deref(), Some("up"));
        assert_eq!(cmd.host, Some(WebHost::Github));
    }

    #[test]
    fn get_url_rejects_unknown_type() {
        assert!(Cli::try_parse_from(["git-cc", "get-url", "--type", "bitbucket"]).is_err());
    }

    #[test]
    fn parses_types_separator() {
        let cli = Cli::try_parse_from(["git-cc", "types", "-s", ","]).unwrap();
        let Some(Commands::Types(cmd)) = cli.command else {
            panic!("expected types");
        };
        assert_eq!(cmd.separator, ",");
    }

    #[test]
    fn types_separator_defaults_to_newline() {
        let cli = Cli::try_parse_from(["git-cc", "types"]).unwrap();
        let Some(Commands::Types(cmd)) = cli.command else {
            panic!("expected types");
        };
        assert_eq!(cmd.separator, "\n");
    }

    #[test]
    fn parses_changelog_prefix() {
        let cli = Cli::try_parse_from(["git-cc", "changelog", "--prefix", "- "]).unwrap();
        let Some(Commands::Changelog(cmd)) = cli.command else {
            panic!("expected changelog");
        };
        assert_eq!(cmd.prefix.as_deref(), Some("- "));
    }

    #[test]
    fn hyphen_values_are_not_flags() {
        let cli = Cli::try_parse_from(["git-cc", "types", "--separator", "-"]).unwrap();
        let Some(Commands::Types(cmd)) = cli.command else {
            panic!("expected types");
        };
        assert_eq!(cmd.separator, "-");

        let cli =
            Cli::try_parse_from(["git-cc", "commit", "-t", "fix", "-d", "-1 off by one"]).unwrap();
        let Some(Commands::Commit(cmd)) = cli.command else {
            panic!("expected commit");
        };
        assert_eq!(cmd.description.as_deref(), Some("-1 off by one"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
