//! Conformance engine orchestration tests: candidate resolution, merging,
//! and the completeness heuristic, against a real on-disk workspace.

use std::fs;
use std::path::Path;

use keel_analysis::{ConformanceEngine, Severity};
use keel_core::{WorkspaceConfig, WorkspaceMode};

fn init_logs() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn big_class(name: &str, methods: usize) -> String {
    let mut src = format!("class {name}\n{{\n");
    for i in 0..methods {
        src.push_str(&format!("    public void Method{i}() {{ }}\n"));
    }
    src.push_str("}\n");
    src
}

fn engine_for(root: &Path) -> ConformanceEngine {
    let config = WorkspaceConfig::new(root, WorkspaceMode::Git);
    ConformanceEngine::new(&config).unwrap()
}

#[test]
fn review_flags_violations_in_touched_files() {
    init_logs();
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/Monolith.cs", &big_class("Monolith", 20));

    let engine = engine_for(dir.path());
    let review = engine.review("", &["src/Monolith.cs".to_string()]);

    assert!(review.has_high_severity());
    let finding = review
        .findings
        .iter()
        .find(|f| f.rule_id == "ResponsibilitySize")
        .unwrap();
    assert_eq!(finding.file, "src/Monolith.cs");
    assert!(review
        .required_actions
        .contains(&"split high-complexity types into smaller cohesive units".to_string()));
}

#[test]
fn empty_candidate_set_yields_empty_review() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_for(dir.path());

    let review = engine.review("README.md\nnotes.txt", &["missing/Ghost.cs".to_string()]);
    assert!(review.findings.is_empty());
    assert!(review.required_actions.is_empty());
}

#[test]
fn diff_lines_and_touched_files_are_unioned() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/One.cs", &big_class("One", 16));
    write(dir.path(), "src/Two.cs", &big_class("Two", 17));

    let engine = engine_for(dir.path());
    let diff = "diff --git a/src/One.cs b/src/One.cs\r\nsrc/Two.cs\r\n\r\n";
    let review = engine.review(diff, &["src/One.cs".to_string()]);

    let flagged: Vec<&str> = review
        .findings
        .iter()
        .filter(|f| f.rule_id == "ResponsibilitySize")
        .map(|f| f.file.as_str())
        .collect();
    assert_eq!(flagged.len(), 2);
    assert!(flagged.contains(&"src/One.cs"));
    assert!(flagged.contains(&"src/Two.cs"));
}

#[test]
fn generated_output_paths_are_excluded_even_when_listed_twice() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "bin/Debug/Generated.cs", &big_class("Generated", 40));

    let engine = engine_for(dir.path());
    let review = engine.review(
        "bin/Debug/Generated.cs",
        &["bin/Debug/Generated.cs".to_string()],
    );
    assert!(review.findings.is_empty());
}

#[test]
fn missing_tests_heuristic_fires_without_test_paths() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/Quiet.cs", "class Quiet { void Run() { } }\n");

    let engine = engine_for(dir.path());
    let review = engine.review("", &["src/Quiet.cs".to_string()]);

    let finding = review
        .findings
        .iter()
        .find(|f| f.rule_id == "SeparationOfConcerns")
        .unwrap();
    assert_eq!(finding.severity, Severity::Medium);
    assert_eq!(finding.file, "src/Quiet.cs");
    assert!(review
        .required_actions
        .contains(&"add or update tests covering the implemented behavior".to_string()));
}

#[test]
fn missing_tests_heuristic_ignores_the_workspace_root_name() {
    // A workspace rooted under a "test"-named directory must not satisfy
    // the heuristic; only the files' own relative paths count.
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("testbed");
    write(&root, "src/Quiet.cs", "class Quiet { void Run() { } }\n");

    let engine = engine_for(&root);
    let review = engine.review("", &["src/Quiet.cs".to_string()]);

    assert!(review
        .findings
        .iter()
        .any(|f| f.rule_id == "SeparationOfConcerns"));
}

#[test]
fn missing_tests_heuristic_is_quiet_when_any_path_mentions_tests() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/Quiet.cs", "class Quiet { void Run() { } }\n");

    let engine = engine_for(dir.path());
    // The touched entry is not a candidate, but the heuristic is a path
    // substring check over both lists.
    let review = engine.review(
        "",
        &[
            "src/Quiet.cs".to_string(),
            "tests/QuietTests.cs".to_string(),
        ],
    );
    assert!(review
        .findings
        .iter()
        .all(|f| f.rule_id != "SeparationOfConcerns"));
}

#[test]
fn required_actions_never_repeat_case_insensitively() {
    let dir = tempfile::tempdir().unwrap();
    // Two files, each tripping the same rules.
    write(dir.path(), "src/BigA.cs", &big_class("BigA", 16));
    write(dir.path(), "src/BigB.cs", &big_class("BigB", 16));

    let engine = engine_for(dir.path());
    let review = engine.review(
        "",
        &["src/BigA.cs".to_string(), "src/BigB.cs".to_string()],
    );

    let mut lowered: Vec<String> = review
        .required_actions
        .iter()
        .map(|a| a.to_lowercase())
        .collect();
    lowered.sort();
    let before = lowered.len();
    lowered.dedup();
    assert_eq!(before, lowered.len());
}

#[test]
fn unreadable_file_is_skipped_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/Ok.cs", &big_class("Ok", 16));
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/Binary.cs"), [0xff, 0xfe, 0x00, 0x01]).unwrap();

    let engine = engine_for(dir.path());
    let review = engine.review(
        "",
        &["src/Ok.cs".to_string(), "src/Binary.cs".to_string()],
    );
    // The readable file's findings still come through.
    assert!(review
        .findings
        .iter()
        .any(|f| f.rule_id == "ResponsibilitySize" && f.file == "src/Ok.cs"));
}

#[test]
fn review_serializes_for_persistence() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/Monolith.cs", &big_class("Monolith", 20));

    let engine = engine_for(dir.path());
    let review = engine.review("", &["src/Monolith.cs".to_string()]);

    let json = serde_json::to_string(&review).unwrap();
    assert!(json.contains("\"severity\":\"high\""));
    let back: keel_analysis::ArchitectureReview = serde_json::from_str(&json).unwrap();
    assert_eq!(back.findings, review.findings);
}
