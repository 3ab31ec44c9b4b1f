//! Candidate file resolver.
//!
//! Maps a textual diff plus an explicit touched-file list to the
//! deduplicated set of absolute paths eligible for analysis. An empty
//! result is a valid "nothing to analyze" outcome, not a fault.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;

/// File extension the engine recognizes as analyzable source.
pub const SOURCE_EXTENSION: &str = ".cs";

/// Generated-output directory names, matched case-insensitively against
/// every path segment in either separator style.
const EXCLUDED_SEGMENTS: [&str; 2] = ["bin", "obj"];

/// Resolve the candidate files for one review pass.
///
/// Diff text is split on `\r`/`\n`, trimmed, and empty lines dropped; a
/// candidate qualifies iff it carries the source extension, resolves to an
/// existing file under `root`, and no segment is a generated-output
/// directory. Touched-derived and diff-derived candidates are unioned with
/// case-insensitive full-path dedup. Callers must not rely on output order.
pub fn resolve_candidates(diff_text: &str, touched_files: &[String], root: &Path) -> Vec<PathBuf> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut candidates = Vec::new();

    let lines = touched_files
        .iter()
        .map(String::as_str)
        .chain(diff_text.split(['\r', '\n']));

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some(path) = eligible(line, root) else {
            continue;
        };
        let key = path.to_string_lossy().to_lowercase();
        if seen.insert(key) {
            candidates.push(path);
        }
    }

    tracing::debug!(count = candidates.len(), "resolved candidate files");
    candidates
}

fn eligible(candidate: &str, root: &Path) -> Option<PathBuf> {
    if !has_source_extension(candidate) {
        return None;
    }
    if EXCLUDED_SEGMENTS.iter().any(|dir| has_segment(candidate, dir)) {
        return None;
    }

    let path = Path::new(candidate);
    let resolved = if path.is_absolute() {
        if !path.starts_with(root) {
            return None;
        }
        path.to_path_buf()
    } else {
        root.join(path)
    };
    resolved.is_file().then_some(resolved)
}

fn has_source_extension(candidate: &str) -> bool {
    candidate.len() > SOURCE_EXTENSION.len()
        && candidate[candidate.len() - SOURCE_EXTENSION.len()..]
            .eq_ignore_ascii_case(SOURCE_EXTENSION)
}

fn has_segment(candidate: &str, dir: &str) -> bool {
    candidate
        .split(['/', '\\'])
        .any(|segment| segment.eq_ignore_ascii_case(dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(has_source_extension("src/Service.cs"));
        assert!(has_source_extension("src/Service.CS"));
        assert!(!has_source_extension("src/Service.csproj"));
        assert!(!has_source_extension(".cs"));
    }

    #[test]
    fn generated_output_segments_match_either_separator() {
        assert!(has_segment("src\\BIN\\Service.cs", "bin"));
        assert!(has_segment("src/obj/Debug/Service.cs", "obj"));
        assert!(!has_segment("src/binary/Service.cs", "bin"));
    }
}
