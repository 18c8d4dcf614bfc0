//! Preflight validation checks for early failure detection
//!
//! Commands that talk to git call these before prompting the user, so a
//! missing repository is reported before any question is asked.

use std::path::Path;

use anyhow::{Context, Result};
use git2::Repository;

/// Validate the current directory is inside a git repository
pub fn check_git_repository() -> Result<()> {
    check_git_repository_at(".")
}

/// Validate `path` is inside a git repository
pub fn check_git_repository_at<P: AsRef<Path>>(path: P) -> Result<()> {
    Repository::discover(path).context(
        "Not in a git repository. Please run this command from within a git repository.",
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn finds_repository_from_subdirectory() {
        let temp_dir = TempDir::new().unwrap();
        Repository::init(temp_dir.path()).unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        assert!(check_git_repository_at(&nested).is_ok());
    }

    #[test]
    fn rejects_plain_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = check_git_repository_at(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("Not in a git repository"));
    }
}
