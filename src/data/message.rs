//! Commit message assembly.

use std::fmt;

/// The parts of a conventional commit subject line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitMessage {
    /// Commit type token, used as typed (`FEAT` or `feat`).
    pub commit_type: Option<String>,
    /// Optional scope shown in parentheses after the type.
    pub scope: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
}

impl CommitMessage {
    /// Creates a message from its three parts.
    pub fn new(
        commit_type: impl Into<String>,
        scope: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            commit_type: Some(commit_type.into()),
            scope: Some(scope.into()),
            description: Some(description.into()),
        }
    }
}

/// Renders `type(scope): description`.
///
/// The scope only appears next to a type. Empty parts count as missing.
impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(commit_type) = non_empty(self.commit_type.as_deref()) {
            f.write_str(commit_type)?;
            if let Some(scope) = non_empty(self.scope.as_deref()) {
                write!(f, "({scope})")?;
            }
            f.write_str(": ")?;
        }
        if let Some(description) = non_empty(self.description.as_deref()) {
            f.write_str(description)?;
        }
        Ok(())
    }
}

fn non_empty(part: Option<&str>) -> Option<&str> {
    part.filter(|s| !s.is_empty())
}
