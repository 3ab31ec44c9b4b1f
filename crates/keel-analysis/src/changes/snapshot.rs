//! Directory snapshots: relative path -> content hash plus text.
//!
//! Walked with the `ignore` crate so gitignored and hidden files (the `.git`
//! directory included) never count as workspace content. Text is retained so
//! a diff can be synthesized when no version control is available.

use std::collections::BTreeSet;
use std::path::Path;

use ignore::WalkBuilder;
use rustc_hash::FxHashMap;
use xxhash_rust::xxh3::xxh3_64;

/// One snapshotted file: xxh3 content hash, and the text for files that
/// decode as UTF-8 (None for binary content).
pub struct SnapshotEntry {
    pub hash: u64,
    pub text: Option<String>,
}

/// Snapshot every non-ignored file under `root`. Unreadable files are
/// logged and skipped; a snapshot never fails outright.
pub fn snapshot(root: &Path) -> FxHashMap<String, SnapshotEntry> {
    let mut entries = FxHashMap::default();

    for entry in WalkBuilder::new(root).build() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(error = %e, "snapshot walk entry failed; skipping");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let content = match std::fs::read(entry.path()) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(path = %entry.path().display(), error = %e, "unreadable file; skipping");
                continue;
            }
        };
        let rel = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .replace('\\', "/");
        let hash = xxh3_64(&content);
        entries.insert(
            rel,
            SnapshotEntry {
                hash,
                text: String::from_utf8(content).ok(),
            },
        );
    }

    entries
}

/// Reduce a before/after snapshot pair to the set of changed paths: added,
/// removed, or re-hashed.
pub fn snapshot_changes(
    before: &FxHashMap<String, SnapshotEntry>,
    after: &FxHashMap<String, SnapshotEntry>,
) -> BTreeSet<String> {
    let mut changed = BTreeSet::new();
    for (path, entry) in after {
        if before.get(path).map(|e| e.hash) != Some(entry.hash) {
            changed.insert(path.clone());
        }
    }
    for path in before.keys() {
        if !after.contains_key(path) {
            changed.insert(path.clone());
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, u64)]) -> FxHashMap<String, SnapshotEntry> {
        entries
            .iter()
            .map(|(k, v)| {
                (
                    k.to_string(),
                    SnapshotEntry {
                        hash: *v,
                        text: None,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn detects_added_removed_and_modified() {
        let before = map(&[("a.cs", 1), ("b.cs", 2), ("c.cs", 3)]);
        let after = map(&[("a.cs", 1), ("b.cs", 9), ("d.cs", 4)]);
        let changed = snapshot_changes(&before, &after);
        let expected: Vec<&str> = vec!["b.cs", "c.cs", "d.cs"];
        assert_eq!(changed.iter().map(String::as_str).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn identical_snapshots_yield_no_changes() {
        let before = map(&[("a.cs", 1)]);
        let after = map(&[("a.cs", 1)]);
        assert!(snapshot_changes(&before, &after).is_empty());
    }
}
