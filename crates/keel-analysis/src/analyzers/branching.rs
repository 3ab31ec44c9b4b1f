//! Branch-Explosion rule (OCP): multi-way branches with too many sections.

use keel_core::ReviewConfig;

use super::{enclosing_symbol, AnalyzerOutput, Analyzer, Finding, Severity};
use crate::parsers::ParsedFile;

const ACTION: &str = "replace large branch statements with polymorphism/strategy mapping";

/// Flags a switch statement or switch expression with `max_sections` or more
/// case sections. The threshold is inclusive: six sections fire.
pub struct BranchExplosion {
    max_sections: u32,
}

impl BranchExplosion {
    pub fn new(config: &ReviewConfig) -> Self {
        Self {
            max_sections: config.effective_max_switch_sections(),
        }
    }

    fn section_count(node: tree_sitter::Node<'_>) -> u32 {
        let section_kind = match node.kind() {
            "switch_statement" => "switch_section",
            "switch_expression" => "switch_expression_arm",
            _ => return 0,
        };
        // switch_statement nests its sections under a switch_body node;
        // switch_expression holds its arms directly.
        let container = node.child_by_field_name("body").unwrap_or(node);
        let mut count = 0;
        let mut cursor = container.walk();
        for child in container.named_children(&mut cursor) {
            if child.kind() == section_kind {
                count += 1;
            }
        }
        count
    }
}

impl Analyzer for BranchExplosion {
    fn rule_id(&self) -> &'static str {
        "BranchExplosion"
    }

    fn analyze(&self, files: &[ParsedFile]) -> AnalyzerOutput {
        let mut output = AnalyzerOutput::default();

        for file in files {
            super::for_each_node(file.root(), &mut |node| {
                if !matches!(node.kind(), "switch_statement" | "switch_expression") {
                    return;
                }
                let sections = Self::section_count(node);
                if sections < self.max_sections {
                    return;
                }
                let symbol = enclosing_symbol(file, node);
                let context = symbol.as_deref().unwrap_or("top level");
                output.findings.push(Finding::new(
                    Severity::Medium,
                    self.rule_id(),
                    file.relative_path.clone(),
                    symbol.clone(),
                    format!("switch in {context} has {sections} case sections"),
                ));
            });
        }

        output.with_rule_action(ACTION)
    }
}
