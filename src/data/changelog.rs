//! Changelog extraction from commit subject lines.

use std::io::BufRead;

use anyhow::{Context, Result};

use super::CommitType;

/// Default prefix put in front of every changelog entry.
pub const DEFAULT_PREFIX: &str = "* ";

/// Whether `line` starts with a commit type, ignoring case.
pub fn is_commit_line(line: &str) -> bool {
    CommitType::ALL.iter().any(|t| t.prefixes(line))
}

/// Keeps the lines of `input` that start with a commit type.
///
/// Each kept line gets `prefix` in front; lines are joined with `\n`.
pub fn collect<R: BufRead>(input: R, prefix: &str) -> Result<String> {
    let mut entries = Vec::new();
    for line in input.split(b'\n') {
        let line = line.context("Failed to read changelog input")?;
        let line = String::from_utf8_lossy(line.strip_suffix(b"\r").unwrap_or(&line));
        if is_commit_line(&line) {
            entries.push(format!("{prefix}{line}"));
        }
    }
    Ok(entries.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const LOG: &str = "\
FEAT(prompt): add select menu
Merge branch 'main'
fix: handle closed stdin
wip
docs(readme): usage
";

    #[test]
    fn keeps_commit_lines_with_prefix() {
        let changelog = collect(Cursor::new(LOG), DEFAULT_PREFIX).unwrap();
        insta::assert_snapshot!(changelog, @r"
        * FEAT(prompt): add select menu
        * fix: handle closed stdin
        * docs(readme): usage
        ");
    }

    #[test]
    fn empty_prefix() {
        let changelog = collect(Cursor::new("perf: faster\nnope\n"), "").unwrap();
        assert_eq!(changelog, "perf: faster");
    }

    #[test]
    fn no_matches_gives_empty_output() {
        let changelog = collect(Cursor::new("hello\nworld\n"), DEFAULT_PREFIX).unwrap();
        assert_eq!(changelog, "");
    }

    #[test]
    fn invalid_utf8_does_not_stop_the_changelog() {
        let input = b"fix: caf\xe9 menu\r\nwip\nfeat: next\n".to_vec();
        let changelog = collect(Cursor::new(input), "- ").unwrap();
        assert_eq!(changelog, "- fix: caf\u{fffd} menu\n- feat: next");
    }

    #[test]
    fn commit_line_detection() {
        assert!(is_commit_line("Revert \"feat: x\""));
        assert!(is_commit_line("ci"));
        assert!(!is_commit_line("c"));
        assert!(!is_commit_line(""));
    }
}
