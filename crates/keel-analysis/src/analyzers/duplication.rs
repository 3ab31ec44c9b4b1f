//! Duplicate-Body rule (DRY): whitespace-insensitive method body matching.
//!
//! Every method body (block or expression-bodied) across all candidate files
//! is normalized by stripping whitespace and grouped by exact equality.
//! Groups with more than one location produce exactly one finding, anchored
//! at the first recorded location.

use rustc_hash::FxHashMap;

use keel_core::ReviewConfig;

use super::{AnalyzerOutput, Analyzer, Finding, Severity};
use crate::parsers::ParsedFile;

const ACTION: &str = "extract duplicated logic into shared methods/components";

/// One recorded method body location.
struct Location {
    file: String,
    symbol: String,
}

/// Flags groups of character-identical (modulo whitespace) method bodies of
/// normalized length at or above the configured floor.
pub struct DuplicateBody {
    min_len: usize,
}

impl DuplicateBody {
    pub fn new(config: &ReviewConfig) -> Self {
        Self {
            min_len: config.effective_min_duplicate_len(),
        }
    }
}

/// Strip all whitespace from a body text.
fn normalize_body(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

impl Analyzer for DuplicateBody {
    fn rule_id(&self) -> &'static str {
        "DuplicateBody"
    }

    fn analyze(&self, files: &[ParsedFile]) -> AnalyzerOutput {
        // Insertion-ordered grouping: groups are emitted in first-occurrence
        // order, and locations within a group keep recording order.
        let mut index: FxHashMap<String, usize> = FxHashMap::default();
        let mut groups: Vec<Vec<Location>> = Vec::new();

        for file in files {
            super::for_each_node(file.root(), &mut |node| {
                if !matches!(
                    node.kind(),
                    "method_declaration" | "local_function_statement"
                ) {
                    return;
                }
                let Some(body) = node
                    .child_by_field_name("body")
                    .or_else(|| {
                        let mut cursor = node.walk();
                        let arrow = node
                            .children(&mut cursor)
                            .find(|c| c.kind() == "arrow_expression_clause");
                        arrow
                    })
                else {
                    return;
                };
                let normalized = normalize_body(file.text(body));
                if normalized.len() < self.min_len {
                    return;
                }
                let symbol = node
                    .child_by_field_name("name")
                    .map(|n| file.text(n).to_string())
                    .unwrap_or_default();
                let location = Location {
                    file: file.relative_path.clone(),
                    symbol,
                };
                match index.get(&normalized) {
                    Some(&i) => groups[i].push(location),
                    None => {
                        index.insert(normalized, groups.len());
                        groups.push(vec![location]);
                    }
                }
            });
        }

        let mut output = AnalyzerOutput::default();
        for group in groups.iter().filter(|g| g.len() > 1) {
            let first = &group[0];
            let rest = group[1..]
                .iter()
                .map(|loc| format!("{}:{}", loc.file, loc.symbol))
                .collect::<Vec<_>>()
                .join(", ");
            output.findings.push(Finding::new(
                Severity::High,
                self.rule_id(),
                first.file.clone(),
                Some(first.symbol.clone()),
                format!("body of {} duplicated at {rest}", first.symbol),
            ));
        }

        output.with_rule_action(ACTION)
    }
}
