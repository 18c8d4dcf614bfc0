//! # git-cc
//!
//! Interactive helpers layered over the `git` binary.
//!
//! ## Features
//!
//! - Conventional commit messages assembled from flags or interactive answers
//! - Web tree URLs for GitLab and GitHub derived from a remote
//! - Changelog filtering of commit subject lines
//!
//! ## Quick Start
//!
//! ```rust
//! use git_cc::data::CommitMessage;
//!
//! let message = CommitMessage::new("FEAT", "prompt", "select from a menu");
//! assert_eq!(message.to_string(), "FEAT(prompt): select from a menu");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod data;
pub mod git;
pub mod prompt;
pub mod utils;

pub use crate::cli::Cli;

/// The current version of git-cc.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
