//! Conventional commit types.

use std::fmt;
use std::str::FromStr;

/// A conventional commit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitType {
    /// Build system or dependency changes.
    Build,
    /// Maintenance that touches neither source nor tests.
    Chore,
    /// Continuous integration configuration.
    Ci,
    /// Documentation only.
    Docs,
    /// A new feature.
    Feat,
    /// A bug fix.
    Fix,
    /// A performance improvement.
    Perf,
    /// Restructuring without behaviour change.
    Refactor,
    /// Reverts an earlier commit.
    Revert,
    /// Formatting and other non-semantic changes.
    Style,
}

impl CommitType {
    /// All types, in menu order.
    pub const ALL: [Self; 10] = [
        Self::Build,
        Self::Chore,
        Self::Ci,
        Self::Docs,
        Self::Feat,
        Self::Fix,
        Self::Perf,
        Self::Refactor,
        Self::Revert,
        Self::Style,
    ];

    /// Upper-case spelling, as shown in menus.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Build => "BUILD",
            Self::Chore => "CHORE",
            Self::Ci => "CI",
            Self::Docs => "DOCS",
            Self::Feat => "FEAT",
            Self::Fix => "FIX",
            Self::Perf => "PERF",
            Self::Refactor => "REFACTOR",
            Self::Revert => "REVERT",
            Self::Style => "STYLE",
        }
    }

    /// Whether `line` starts with this type, ignoring case.
    pub fn prefixes(self, line: &str) -> bool {
        let name = self.as_str();
        line.get(..name.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for tokens that name no commit type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown commit type: {0}")]
pub struct UnknownCommitType(pub String);

impl FromStr for CommitType {
    type Err = UnknownCommitType;

    /// Accepts the exact upper-case or exact lower-case spelling only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s || t.as_str().to_lowercase() == s)
            .ok_or_else(|| UnknownCommitType(s.to_string()))
    }
}
