//! Constructor-Fan-in rule (DIP): constructors with too many dependencies.

use keel_core::ReviewConfig;

use super::{enclosing_symbol, AnalyzerOutput, Analyzer, Finding, Severity};
use crate::parsers::ParsedFile;

const ACTION: &str = "refactor constructor dependencies via focused collaborators/facades";

/// Flags a constructor declaring more than `max_params` parameters.
pub struct ConstructorFanIn {
    max_params: u32,
}

impl ConstructorFanIn {
    pub fn new(config: &ReviewConfig) -> Self {
        Self {
            max_params: config.effective_max_constructor_params(),
        }
    }
}

impl Analyzer for ConstructorFanIn {
    fn rule_id(&self) -> &'static str {
        "ConstructorFanIn"
    }

    fn analyze(&self, files: &[ParsedFile]) -> AnalyzerOutput {
        let mut output = AnalyzerOutput::default();

        for file in files {
            super::for_each_node(file.root(), &mut |node| {
                if node.kind() != "constructor_declaration" {
                    return;
                }
                let param_count = node
                    .child_by_field_name("parameters")
                    .map(|list| {
                        let mut cursor = list.walk();
                        list.named_children(&mut cursor)
                            .filter(|p| p.kind() == "parameter")
                            .count() as u32
                    })
                    .unwrap_or(0);
                if param_count <= self.max_params {
                    return;
                }
                let type_name = node
                    .child_by_field_name("name")
                    .map(|n| file.text(n).to_string())
                    .or_else(|| enclosing_symbol(file, node));
                let symbol = type_name.clone().unwrap_or_default();
                output.findings.push(Finding::new(
                    Severity::Medium,
                    self.rule_id(),
                    file.relative_path.clone(),
                    type_name,
                    format!("constructor of {symbol} declares {param_count} parameters"),
                ));
            });
        }

        output.with_rule_action(ACTION)
    }
}
