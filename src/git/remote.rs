//! Web URLs derived from git remotes.

use std::fmt;
use std::sync::LazyLock;

use anyhow::{bail, Context, Result};
use regex::Regex;
use url::Url;

/// Remote used when none is given.
pub const DEFAULT_REMOTE: &str = "origin";

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static GIT_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.git/?$").unwrap());

// [user@]host:path, the scp-like syntax git accepts for ssh remotes
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static SCP_LIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[^@/]+@)?(?P<host>[^:/]+):(?P<path>[^/].*)$").unwrap());

/// Web front-end flavour of a git host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum WebHost {
    /// GitLab: `<repo>/-/tree/<branch>`.
    Gitlab,
    /// GitHub: `<repo>/tree/<branch>`.
    Github,
}

impl WebHost {
    /// Guesses the flavour from the remote host: github.com is GitHub,
    /// everything else is treated as GitLab.
    pub fn detect(remote: &Url) -> Self {
        if remote.host_str() == Some("github.com") {
            Self::Github
        } else {
            Self::Gitlab
        }
    }
}

impl fmt::Display for WebHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gitlab => write!(f, "gitlab"),
            Self::Github => write!(f, "github"),
        }
    }
}

/// Turns a remote URL as printed by `git remote get-url` into a web URL.
///
/// http(s) remotes keep scheme, host and port but lose credentials, query
/// and fragment. ssh and git protocol remotes, including the scp-like
/// `git@host:owner/repo.git` form, become `https://host/path`.
pub fn parse_remote_url(remote: &str) -> Result<Url> {
    let remote = remote.trim();

    if let Ok(url) = Url::parse(remote) {
        if let Some(host) = url.host_str() {
            return match url.scheme() {
                "http" | "https" => {
                    let port = url.port().map(|p| format!(":{p}")).unwrap_or_default();
                    build_url(url.scheme(), &format!("{host}{port}"), url.path())
                }
                "ssh" | "git" | "git+ssh" | "ssh+git" => build_url("https", host, url.path()),
                scheme => bail!("Unsupported remote URL scheme '{scheme}': {remote}"),
            };
        }
    }

    if !remote.contains("://") {
        if let Some(caps) = SCP_LIKE.captures(remote) {
            let path = format!("/{}", &caps["path"]);
            return build_url("https", &caps["host"], &path);
        }
    }

    bail!("Remote URL has no web host: {remote}")
}

fn build_url(scheme: &str, host: &str, path: &str) -> Result<Url> {
    let raw = format!("{scheme}://{host}{path}");
    Url::parse(&raw).with_context(|| format!("Invalid web URL derived from remote: {raw}"))
}

/// Repository path of a remote URL, without a trailing `.git` or `.git/`.
pub fn repository_path(remote: &Url) -> String {
    GIT_SUFFIX.replace(remote.path(), "").into_owned()
}

/// URL of the tree view of `branch` in the repository behind `remote`.
pub fn tree_url(remote: &Url, branch: &str, host: WebHost) -> Url {
    let path = repository_path(remote);
    let tree = match host {
        WebHost::Gitlab => format!("{path}/-/tree/{branch}"),
        WebHost::Github => format!("{path}/tree/{branch}"),
    };

    let mut url = remote.clone();
    url.set_path(&tree);
    url.set_query(None);
    url.set_fragment(None);
    url
}
