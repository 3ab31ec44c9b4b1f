//! Architecture conformance engine.
//!
//! Orchestrates resolver + parser + analyzers into one `ArchitectureReview`.
//! Analyzers run in a fixed order and return owned outputs; the engine is
//! the only place results are merged.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use keel_core::{ConfigError, WorkspaceConfig};

use crate::analyzers::{self, ActionSet, Analyzer, Finding, Severity};
use crate::parsers::parse_candidates;
use crate::resolver::resolve_candidates;

const MISSING_TESTS_ACTION: &str = "add or update tests covering the implemented behavior";

/// Aggregate result of one review pass. Immutable once returned; handed to
/// the persistence collaborator as a plain value object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArchitectureReview {
    pub findings: Vec<Finding>,
    pub required_actions: Vec<String>,
}

impl ArchitectureReview {
    /// True when at least one finding blocks `Success` termination.
    pub fn has_high_severity(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::High)
    }
}

/// The conformance engine: a fixed analyzer set bound to one workspace.
pub struct ConformanceEngine {
    root: PathBuf,
    analyzers: Vec<Box<dyn Analyzer>>,
}

impl ConformanceEngine {
    /// Build the engine. Fails fast on an invalid workspace configuration.
    pub fn new(config: &WorkspaceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            root: config.root.clone(),
            analyzers: analyzers::default_analyzers(&config.review),
        })
    }

    /// Run one review pass over the current change set.
    pub fn review(&self, diff_text: &str, touched_files: &[String]) -> ArchitectureReview {
        let candidates = resolve_candidates(diff_text, touched_files, &self.root);
        if candidates.is_empty() {
            tracing::debug!("no candidate files; returning empty review");
            return ArchitectureReview::default();
        }

        let parsed = parse_candidates(&self.root, &candidates);

        let mut findings = Vec::new();
        let mut actions = ActionSet::new();
        for analyzer in &self.analyzers {
            let output = analyzer.analyze(&parsed);
            findings.extend(output.findings);
            actions.extend(output.actions);
        }

        // Completeness heuristic: a change set that touches source but
        // nothing test-shaped probably shipped without coverage. Substring
        // match over workspace-relative paths only (the root's own directory
        // name must not satisfy it); not a guarantee.
        let relative: Vec<String> = candidates
            .iter()
            .map(|c| {
                c.strip_prefix(&self.root)
                    .unwrap_or(c)
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        let references_tests = touched_files
            .iter()
            .chain(relative.iter())
            .any(|p| p.to_lowercase().contains("test"));
        if !references_tests {
            let anchor = relative[0].clone();
            findings.push(Finding::new(
                Severity::Medium,
                "SeparationOfConcerns",
                anchor,
                None,
                "source files changed without any test updates",
            ));
            actions.insert(MISSING_TESTS_ACTION);
        }

        tracing::debug!(
            candidates = candidates.len(),
            parsed = parsed.len(),
            findings = findings.len(),
            "review pass complete"
        );

        ArchitectureReview {
            findings,
            required_actions: actions.into_vec(),
        }
    }
}
