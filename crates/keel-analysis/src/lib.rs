//! keel-analysis: the Keel conformance engine.
//!
//! - Parsers: tree-sitter adapter turning C# source into traversable trees
//! - Resolver: maps a diff plus a touched-file list to analyzable candidates
//! - Analyzers: the closed set of six structural rule engines
//! - Engine: orchestrates resolver + parser + analyzers into one review
//! - Changes: session change detection against a version-controlled workspace
//! - Remediation: the bounded review -> remediate -> re-review loop

pub mod analyzers;
pub mod changes;
pub mod engine;
pub mod parsers;
pub mod remediation;
pub mod resolver;

// Re-exports for convenience
pub use analyzers::{ActionSet, Analyzer, AnalyzerOutput, Finding, Severity};
pub use changes::{ChangeDetector, GitCli, NullVcs, VcsClient};
pub use engine::{ArchitectureReview, ConformanceEngine};
pub use parsers::{CSharpParser, ParsedFile};
pub use remediation::{
    ChangeSource, LoopReport, LoopState, Outcome, RemediationAgent, RemediationLoop,
    RemediationLoopState, Reviewer, SessionChanges,
};
pub use resolver::resolve_candidates;
