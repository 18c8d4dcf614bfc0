//! Get-url command — prints the web URL of a branch.

use anyhow::Result;
use clap::Parser;
use url::Url;

use crate::git::{CommandRunner, Git, GitRepository, WebHost};
use crate::utils::Settings;

/// Get-url command options.
#[derive(Parser)]
pub struct GetUrlCommand {
    /// Branch to link to (defaults to the current branch).
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Remote whose URL is used (defaults to origin or settings).
    #[arg(short, long)]
    pub remote: Option<String>,

    /// Web front-end flavour (guessed from the remote host when omitted).
    #[arg(short = 't', long = "type", value_enum)]
    pub host: Option<WebHost>,
}

impl GetUrlCommand {
    /// Executes the get-url command.
    pub fn execute(self, settings: &Settings) -> Result<i32> {
        crate::utils::check_git_repository()?;

        let repo = GitRepository::new(Git::from_settings(settings));
        let url = self.web_url(&repo, settings)?;
        println!("{url}");
        Ok(0)
    }

    /// Resolves the URL using `repo`.
    pub fn web_url<R: CommandRunner>(
        &self,
        repo: &GitRepository<R>,
        settings: &Settings,
    ) -> Result<Url> {
        let remote = self.remote.as_deref().unwrap_or(&settings.remote);
        repo.web_url(Some(remote), self.branch.as_deref(), self.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::test_utils::MockRunner;
    use crate::git::GitOutput;

    fn ok(stdout: &str) -> GitOutput {
        GitOutput {
            success: true,
            code: Some(0),
            stdout: stdout.as_bytes().to_vec(),
        }
    }

    #[test]
    fn remote_comes_from_settings() {
        let repo = GitRepository::new(MockRunner::new(vec![ok("https://github.com/o/r.git")]));
        let settings = Settings {
            remote: "upstream".to_string(),
            ..Settings::default()
        };
        let cmd = GetUrlCommand {
            branch: Some("main".to_string()),
            remote: None,
            host: None,
        };

        let url = cmd.web_url(&repo, &settings).unwrap();
        assert_eq!(url.as_str(), "https://github.com/o/r/tree/main");
        assert_eq!(
            repo.runner().calls(),
            vec![vec!["remote", "get-url", "upstream"]]
        );
    }

    #[test]
    fn flag_overrides_settings_remote() {
        let repo = GitRepository::new(MockRunner::new(vec![ok("git@gitlab.com:g/p.git")]));
        let cmd = GetUrlCommand {
            branch: Some("dev".to_string()),
            remote: Some("fork".to_string()),
            host: None,
        };

        let url = cmd.web_url(&repo, &Settings::default()).unwrap();
        assert_eq!(url.as_str(), "https://gitlab.com/g/p/-/tree/dev");
        assert_eq!(repo.runner().calls(), vec![vec!["remote", "get-url", "fork"]]);
    }
}
