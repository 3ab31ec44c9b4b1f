//! Version-control command runner boundary.
//!
//! Every query returns raw newline-delimited text. A failed query (non-zero
//! exit, tool unavailable) degrades to empty output rather than raising, so
//! the change detector falls back to snapshot-only detection.

use std::path::PathBuf;
use std::process::Command;

/// Version-control queries the change detector consumes.
pub trait VcsClient: Send {
    /// Modified tracked paths relative to the reference point, one per line.
    fn tracked_modified(&self) -> String;
    /// Untracked, non-ignored paths, one per line.
    fn untracked_files(&self) -> String;
    /// Full textual diff of the working tree.
    fn diff_text(&self) -> String;
}

/// Git implementation shelling out to the `git` binary.
pub struct GitCli {
    root: PathBuf,
}

impl GitCli {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn run(&self, args: &[&str]) -> String {
        match Command::new("git").args(args).current_dir(&self.root).output() {
            Ok(output) if output.status.success() => {
                String::from_utf8_lossy(&output.stdout).into_owned()
            }
            Ok(output) => {
                tracing::warn!(
                    args = ?args,
                    status = ?output.status.code(),
                    "git query failed; treating as empty"
                );
                String::new()
            }
            Err(e) => {
                tracing::warn!(args = ?args, error = %e, "git unavailable; treating as empty");
                String::new()
            }
        }
    }
}

impl VcsClient for GitCli {
    fn tracked_modified(&self) -> String {
        self.run(&["diff", "--name-only"])
    }

    fn untracked_files(&self) -> String {
        self.run(&["ls-files", "--others", "--exclude-standard"])
    }

    fn diff_text(&self) -> String {
        self.run(&["diff"])
    }
}

/// No-op client for plain-directory workspaces: change detection and the
/// diff text both fall back to snapshots.
pub struct NullVcs;

impl VcsClient for NullVcs {
    fn tracked_modified(&self) -> String {
        String::new()
    }

    fn untracked_files(&self) -> String {
        String::new()
    }

    fn diff_text(&self) -> String {
        String::new()
    }
}

/// Split a raw query result into normalized relative paths. Tolerant of
/// trailing whitespace and CR line endings.
pub(crate) fn parse_paths(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.replace('\\', "/"))
}
