//! Finding and action value types shared by all analyzers.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Finding severity. High blocks the remediation loop from terminating in
/// `Success`; Medium is advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
}

/// One reported rule violation. Append-only value type; never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub rule_id: String,
    pub file: String,
    pub symbol: Option<String>,
    pub message: String,
}

impl Finding {
    pub fn new(
        severity: Severity,
        rule_id: &str,
        file: impl Into<String>,
        symbol: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            rule_id: rule_id.to_string(),
            file: file.into(),
            symbol,
            message: message.into(),
        }
    }
}

/// Insertion-ordered set of remediation instructions. No two entries are
/// equal under case-insensitive comparison; repeated guidance across rule
/// hits collapses to one entry.
#[derive(Debug, Default)]
pub struct ActionSet {
    order: Vec<String>,
    seen: FxHashSet<String>,
}

impl ActionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, action: impl Into<String>) {
        let action = action.into();
        if self.seen.insert(action.to_lowercase()) {
            self.order.push(action);
        }
    }

    pub fn extend(&mut self, actions: impl IntoIterator<Item = String>) {
        for action in actions {
            self.insert(action);
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

/// Output of one analyzer run. Owned by the analyzer that produced it; the
/// engine merges outputs, so analyzers never share mutable state.
#[derive(Debug, Default)]
pub struct AnalyzerOutput {
    pub findings: Vec<Finding>,
    pub actions: Vec<String>,
}

impl AnalyzerOutput {
    /// Attach the rule's fixed action string iff the run produced findings.
    /// One action per triggering analyzer, not per finding.
    pub fn with_rule_action(mut self, action: &str) -> Self {
        if !self.findings.is_empty() {
            self.actions.push(action.to_string());
        }
        self
    }
}
