//! Structural analyzers — the closed set of six rule engines.
//!
//! Each analyzer implements the `Analyzer` trait, consumes the full parsed
//! candidate list, and returns an owned `AnalyzerOutput`. Analyzers are
//! independent and order-insensitive; the engine merges their outputs. The
//! rule set is fixed and finite, so this is a closed tagged set rather than
//! an open registry.

pub mod branching;
pub mod constructor;
pub mod duplication;
pub mod hiding;
pub mod interface_size;
pub mod responsibility;
pub mod types;

pub use types::{ActionSet, AnalyzerOutput, Finding, Severity};

use tree_sitter::Node;

use keel_core::ReviewConfig;

use crate::parsers::ParsedFile;

/// One structural rule engine. Must not mutate the files it inspects.
pub trait Analyzer: Send + Sync {
    fn rule_id(&self) -> &'static str;
    fn analyze(&self, files: &[ParsedFile]) -> AnalyzerOutput;
}

/// The full rule set, in emission order.
pub fn default_analyzers(config: &ReviewConfig) -> Vec<Box<dyn Analyzer>> {
    vec![
        Box::new(responsibility::ResponsibilitySize::new(config)),
        Box::new(constructor::ConstructorFanIn::new(config)),
        Box::new(interface_size::InterfaceSize::new(config)),
        Box::new(branching::BranchExplosion::new(config)),
        Box::new(hiding::OverrideHiding::new()),
        Box::new(duplication::DuplicateBody::new(config)),
    ]
}

/// Depth-first pre-order walk over every node in a tree.
pub(crate) fn for_each_node<'t>(node: Node<'t>, f: &mut impl FnMut(Node<'t>)) {
    f(node);
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        for_each_node(child, f);
    }
}

/// Named, non-comment children of a node. Comments are extra nodes in the
/// grammar and must not count as members.
pub(crate) fn member_nodes<'t>(body: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = body.walk();
    body.named_children(&mut cursor)
        .filter(|n| n.kind() != "comment")
        .collect()
}

/// Name of the nearest enclosing method, constructor, or type declaration.
pub(crate) fn enclosing_symbol(file: &ParsedFile, node: Node<'_>) -> Option<String> {
    let mut current = node.parent();
    while let Some(parent) = current {
        match parent.kind() {
            "method_declaration"
            | "constructor_declaration"
            | "local_function_statement"
            | "class_declaration"
            | "struct_declaration"
            | "record_declaration"
            | "interface_declaration" => {
                if let Some(name) = parent.child_by_field_name("name") {
                    return Some(file.text(name).to_string());
                }
            }
            _ => {}
        }
        current = parent.parent();
    }
    None
}
