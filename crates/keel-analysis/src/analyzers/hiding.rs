//! Override-Hiding rule (LSP): methods shadowing base members via `new`.
//!
//! C# is the language under analysis, so the hiding construct is the `new`
//! modifier on a method declaration.

use super::{enclosing_symbol, AnalyzerOutput, Analyzer, Finding, Severity};
use crate::parsers::ParsedFile;

const ACTION: &str = "avoid member hiding; prefer virtual/override or composition";

/// Flags a method declared with the non-virtual hiding modifier.
pub struct OverrideHiding;

impl OverrideHiding {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OverrideHiding {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for OverrideHiding {
    fn rule_id(&self) -> &'static str {
        "OverrideHiding"
    }

    fn analyze(&self, files: &[ParsedFile]) -> AnalyzerOutput {
        let mut output = AnalyzerOutput::default();

        for file in files {
            super::for_each_node(file.root(), &mut |node| {
                if node.kind() != "method_declaration" {
                    return;
                }
                let mut cursor = node.walk();
                let hides = node
                    .children(&mut cursor)
                    .any(|child| child.kind() == "modifier" && file.text(child) == "new");
                if !hides {
                    return;
                }
                let name = node
                    .child_by_field_name("name")
                    .map(|n| file.text(n).to_string())
                    .unwrap_or_default();
                let owner = enclosing_symbol(file, node).unwrap_or_default();
                output.findings.push(Finding::new(
                    Severity::Medium,
                    self.rule_id(),
                    file.relative_path.clone(),
                    Some(name.clone()),
                    format!("method {owner}.{name} hides a base member with 'new'"),
                ));
            });
        }

        output.with_rule_action(ACTION)
    }
}
