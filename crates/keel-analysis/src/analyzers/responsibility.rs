//! Responsibility-Size rule (SRP): oversized type declarations.

use keel_core::ReviewConfig;

use super::{member_nodes, AnalyzerOutput, Analyzer, Finding, Severity};
use crate::parsers::ParsedFile;

const ACTION: &str = "split high-complexity types into smaller cohesive units";

/// Flags a declared type with more than `max_methods` method members or more
/// than `max_members` total members.
pub struct ResponsibilitySize {
    max_methods: u32,
    max_members: u32,
}

impl ResponsibilitySize {
    pub fn new(config: &ReviewConfig) -> Self {
        Self {
            max_methods: config.effective_max_methods(),
            max_members: config.effective_max_members(),
        }
    }
}

impl Analyzer for ResponsibilitySize {
    fn rule_id(&self) -> &'static str {
        "ResponsibilitySize"
    }

    fn analyze(&self, files: &[ParsedFile]) -> AnalyzerOutput {
        let mut output = AnalyzerOutput::default();

        for file in files {
            super::for_each_node(file.root(), &mut |node| {
                if !matches!(
                    node.kind(),
                    "class_declaration" | "struct_declaration" | "record_declaration"
                ) {
                    return;
                }
                let Some(body) = node.child_by_field_name("body") else {
                    return;
                };
                let members = member_nodes(body);
                let method_count = members
                    .iter()
                    .filter(|m| m.kind() == "method_declaration")
                    .count() as u32;
                let member_count = members.len() as u32;
                if method_count <= self.max_methods && member_count <= self.max_members {
                    return;
                }
                let name = node
                    .child_by_field_name("name")
                    .map(|n| file.text(n).to_string())
                    .unwrap_or_default();
                output.findings.push(Finding::new(
                    Severity::High,
                    self.rule_id(),
                    file.relative_path.clone(),
                    Some(name.clone()),
                    format!(
                        "type {name} declares {method_count} methods and {member_count} members"
                    ),
                ));
            });
        }

        output.with_rule_action(ACTION)
    }
}
