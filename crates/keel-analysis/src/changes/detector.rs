//! The change detection engine.

use std::path::PathBuf;

use rustc_hash::{FxHashMap, FxHashSet};

use keel_core::ChangeError;

use super::snapshot::{snapshot, snapshot_changes, SnapshotEntry};
use super::vcs::{parse_paths, VcsClient};

/// Computes the true set of files changed during a session.
///
/// The baseline (tracked ∪ untracked at initialization) is subtracted from
/// every `diff()` so files that were already dirty before the session never
/// appear merely for having existed. An independent before/after snapshot
/// comparison adds back files that were re-edited during the session, which
/// the subtraction would otherwise hide.
pub struct ChangeDetector<V: VcsClient> {
    root: PathBuf,
    vcs: V,
    baseline: FxHashSet<String>,
    baseline_snapshot: FxHashMap<String, SnapshotEntry>,
}

impl<V: VcsClient> ChangeDetector<V> {
    /// Capture the baseline change set and snapshot. Called exactly once,
    /// at workspace initialization; fatal on a missing root.
    pub fn initialize(root: impl Into<PathBuf>, vcs: V) -> Result<Self, ChangeError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(ChangeError::MissingRoot(root.display().to_string()));
        }
        let baseline = dirty_paths(&vcs);
        let baseline_snapshot = snapshot(&root);
        tracing::debug!(
            baseline = baseline.len(),
            snapshot = baseline_snapshot.len(),
            "change detection initialized"
        );
        Ok(Self {
            root,
            vcs,
            baseline,
            baseline_snapshot,
        })
    }

    /// Paths changed since initialization, sorted case-insensitively.
    pub fn diff(&self) -> Vec<String> {
        let current = dirty_paths(&self.vcs);
        let mut changed: FxHashSet<String> = current
            .difference(&self.baseline)
            .cloned()
            .collect();

        // Second source: a full before/after listing recovers edits made to
        // files that were already dirty at baseline.
        let after = snapshot(&self.root);
        changed.extend(snapshot_changes(&self.baseline_snapshot, &after));

        let mut result: Vec<String> = changed.into_iter().collect();
        result.sort_by(|a, b| {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b))
        });
        result
    }

    /// Full textual diff of the session. Version control is the primary
    /// source; when it yields nothing (filesystem-only workspaces, degraded
    /// git queries) a line-oriented diff is synthesized from the baseline
    /// and current snapshots instead. Synthesized hunks are whole-file:
    /// every baseline line removed, every current line added.
    pub fn diff_text(&self) -> String {
        let text = self.vcs.diff_text();
        if !text.is_empty() {
            return text;
        }

        let after = snapshot(&self.root);
        let mut out = String::new();
        for path in snapshot_changes(&self.baseline_snapshot, &after) {
            out.push_str(&format!("--- a/{path}\n+++ b/{path}\n"));
            let before_text = self
                .baseline_snapshot
                .get(&path)
                .and_then(|e| e.text.as_deref());
            if let Some(before_text) = before_text {
                for line in before_text.lines() {
                    out.push('-');
                    out.push_str(line);
                    out.push('\n');
                }
            }
            if let Some(current) = after.get(&path).and_then(|e| e.text.as_deref()) {
                for line in current.lines() {
                    out.push('+');
                    out.push_str(line);
                    out.push('\n');
                }
            }
        }
        out
    }
}

fn dirty_paths(vcs: &impl VcsClient) -> FxHashSet<String> {
    parse_paths(&vcs.tracked_modified())
        .chain(parse_paths(&vcs.untracked_files()))
        .collect()
}
