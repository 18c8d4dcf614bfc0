//! Commit data: types, message assembly and changelog filtering.

pub mod changelog;
pub mod commit_type;
pub mod message;

pub use commit_type::{CommitType, UnknownCommitType};
pub use message::CommitMessage;
