//! Interface-Size rule (ISP): contracts declaring too many members.

use keel_core::ReviewConfig;

use super::{member_nodes, AnalyzerOutput, Analyzer, Finding, Severity};
use crate::parsers::ParsedFile;

const ACTION: &str = "split broad interfaces into role-focused contracts";

/// Flags an interface declaring more than `max_members` members.
pub struct InterfaceSize {
    max_members: u32,
}

impl InterfaceSize {
    pub fn new(config: &ReviewConfig) -> Self {
        Self {
            max_members: config.effective_max_interface_members(),
        }
    }
}

impl Analyzer for InterfaceSize {
    fn rule_id(&self) -> &'static str {
        "InterfaceSize"
    }

    fn analyze(&self, files: &[ParsedFile]) -> AnalyzerOutput {
        let mut output = AnalyzerOutput::default();

        for file in files {
            super::for_each_node(file.root(), &mut |node| {
                if node.kind() != "interface_declaration" {
                    return;
                }
                let Some(body) = node.child_by_field_name("body") else {
                    return;
                };
                let member_count = member_nodes(body).len() as u32;
                if member_count <= self.max_members {
                    return;
                }
                let name = node
                    .child_by_field_name("name")
                    .map(|n| file.text(n).to_string())
                    .unwrap_or_default();
                output.findings.push(Finding::new(
                    Severity::Medium,
                    self.rule_id(),
                    file.relative_path.clone(),
                    Some(name.clone()),
                    format!("interface {name} declares {member_count} members"),
                ));
            });
        }

        output.with_rule_action(ACTION)
    }
}
