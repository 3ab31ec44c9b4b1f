//! Change detection tests: baseline subtraction, snapshot recovery, and
//! graceful degradation to snapshot-only detection.

use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use keel_analysis::{ChangeDetector, NullVcs, VcsClient};
use keel_core::ChangeError;

/// Scriptable VCS stand-in: the test mutates the shared state between
/// initialization and `diff()` to simulate a work session.
#[derive(Clone, Default)]
struct FakeVcs {
    tracked: Arc<Mutex<String>>,
    untracked: Arc<Mutex<String>>,
    diff: Arc<Mutex<String>>,
}

impl FakeVcs {
    fn set_tracked(&self, text: &str) {
        *self.tracked.lock().unwrap() = text.to_string();
    }

    fn set_untracked(&self, text: &str) {
        *self.untracked.lock().unwrap() = text.to_string();
    }

    fn set_diff(&self, text: &str) {
        *self.diff.lock().unwrap() = text.to_string();
    }
}

impl VcsClient for FakeVcs {
    fn tracked_modified(&self) -> String {
        self.tracked.lock().unwrap().clone()
    }

    fn untracked_files(&self) -> String {
        self.untracked.lock().unwrap().clone()
    }

    fn diff_text(&self) -> String {
        self.diff.lock().unwrap().clone()
    }
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn baseline_dirty_files_are_not_reported() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "A.cs", "class A { }\n");

    let vcs = FakeVcs::default();
    vcs.set_tracked("A.cs\n");
    let detector = ChangeDetector::initialize(dir.path(), vcs.clone()).unwrap();

    // Session touches B only; A stays dirty but unmodified.
    write(dir.path(), "B.cs", "class B { }\n");
    vcs.set_tracked("A.cs\nB.cs\n");

    assert_eq!(detector.diff(), vec!["B.cs".to_string()]);
}

#[test]
fn re_edited_baseline_dirty_file_is_recovered_via_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "A.cs", "class A { }\n");

    let vcs = FakeVcs::default();
    vcs.set_tracked("A.cs\n");
    let detector = ChangeDetector::initialize(dir.path(), vcs.clone()).unwrap();

    // A was dirty at baseline and is modified again during the session.
    // The VCS listing cannot distinguish the two states; the snapshot can.
    write(dir.path(), "A.cs", "class A { int x; }\n");

    assert_eq!(detector.diff(), vec!["A.cs".to_string()]);
}

#[test]
fn untracked_new_files_count_as_changes() {
    let dir = tempfile::tempdir().unwrap();

    let vcs = FakeVcs::default();
    let detector = ChangeDetector::initialize(dir.path(), vcs.clone()).unwrap();

    write(dir.path(), "src/New.cs", "class New { }\n");
    vcs.set_untracked("src/New.cs\n");

    assert_eq!(detector.diff(), vec!["src/New.cs".to_string()]);
}

#[test]
fn degrades_to_snapshot_only_without_version_control() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "Old.cs", "class Old { }\n");

    let detector = ChangeDetector::initialize(dir.path(), NullVcs).unwrap();

    write(dir.path(), "Old.cs", "class Old { int x; }\n");
    write(dir.path(), "Fresh.cs", "class Fresh { }\n");

    assert_eq!(
        detector.diff(),
        vec!["Fresh.cs".to_string(), "Old.cs".to_string()]
    );
}

#[test]
fn result_is_sorted_case_insensitively() {
    let dir = tempfile::tempdir().unwrap();
    let detector = ChangeDetector::initialize(dir.path(), NullVcs).unwrap();

    write(dir.path(), "beta.cs", "class B { }\n");
    write(dir.path(), "Alpha.cs", "class A { }\n");
    write(dir.path(), "Gamma.cs", "class G { }\n");

    assert_eq!(
        detector.diff(),
        vec![
            "Alpha.cs".to_string(),
            "beta.cs".to_string(),
            "Gamma.cs".to_string()
        ]
    );
}

#[test]
fn diff_text_is_synthesized_from_snapshots_without_version_control() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "Old.cs", "class Old { }\n");

    let detector = ChangeDetector::initialize(dir.path(), NullVcs).unwrap();

    write(dir.path(), "Old.cs", "class Old { int x; }\n");
    write(dir.path(), "Fresh.cs", "class Fresh { }\n");

    let text = detector.diff_text();
    assert!(text.contains("--- a/Old.cs\n+++ b/Old.cs\n"));
    assert!(text.contains("-class Old { }\n"));
    assert!(text.contains("+class Old { int x; }\n"));
    // A file with no baseline counterpart only contributes added lines.
    assert!(text.contains("--- a/Fresh.cs\n+++ b/Fresh.cs\n+class Fresh { }\n"));
}

#[test]
fn version_control_diff_text_takes_precedence() {
    let dir = tempfile::tempdir().unwrap();
    let vcs = FakeVcs::default();
    let detector = ChangeDetector::initialize(dir.path(), vcs.clone()).unwrap();

    write(dir.path(), "New.cs", "class New { }\n");
    vcs.set_diff("diff --git a/New.cs b/New.cs\n");

    assert_eq!(detector.diff_text(), "diff --git a/New.cs b/New.cs\n");
}

#[test]
fn no_session_edits_yield_an_empty_diff() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "A.cs", "class A { }\n");

    let vcs = FakeVcs::default();
    vcs.set_tracked("A.cs\n");
    let detector = ChangeDetector::initialize(dir.path(), vcs).unwrap();

    assert!(detector.diff().is_empty());
}

#[test]
fn missing_root_is_fatal_at_initialization() {
    let result = ChangeDetector::initialize("/nonexistent/keel-session", NullVcs);
    assert!(matches!(result, Err(ChangeError::MissingRoot(_))));
}
