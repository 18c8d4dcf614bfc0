//! Git invocation, repository operations and remote URL handling.

pub mod remote;
pub mod repository;
pub mod runner;

#[cfg(test)]
pub(crate) mod test_utils;

pub use remote::{WebHost, DEFAULT_REMOTE};
pub use repository::{CommitOptions, GitRepository};
pub use runner::{CommandRunner, Git, GitOutput};
