//! C# parser adapter using native tree-sitter.
//!
//! Produces `ParsedFile` values owned by a single review pass. Trees are
//! walked manually by the analyzers; no query API involved.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tree_sitter::{Language, Node, Parser, Tree};

use keel_core::ParseError;

/// One parsed candidate file. Immutable after construction; discarded when
/// the review pass that created it completes.
pub struct ParsedFile {
    pub path: PathBuf,
    /// Path relative to the workspace root, forward slashes.
    pub relative_path: String,
    source: String,
    tree: Tree,
}

impl ParsedFile {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Source text of a node. Empty on a range/encoding mismatch rather than
    /// failing the analyzer.
    pub fn text(&self, node: Node<'_>) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }
}

/// C# parser wrapping tree-sitter with the C# grammar.
pub struct CSharpParser {
    parser: Parser,
}

impl CSharpParser {
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        let language: Language = tree_sitter_c_sharp::LANGUAGE.into();
        parser
            .set_language(&language)
            .map_err(|e| ParseError::GrammarLoad(e.to_string()))?;
        Ok(Self { parser })
    }

    /// Parse source text already in memory.
    pub fn parse_source(
        &mut self,
        root: &Path,
        path: &Path,
        source: String,
    ) -> Result<ParsedFile, ParseError> {
        let tree = self
            .parser
            .parse(&source, None)
            .ok_or_else(|| ParseError::NoTree(path.display().to_string()))?;
        Ok(ParsedFile {
            relative_path: relative_display(root, path),
            path: path.to_path_buf(),
            source,
            tree,
        })
    }

    /// Read and parse one file.
    pub fn parse_file(&mut self, root: &Path, path: &Path) -> Result<ParsedFile, ParseError> {
        let source = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.parse_source(root, path, source)
    }
}

/// Parse all candidates in parallel. A per-file failure is logged and the
/// file skipped; it never aborts the review.
pub fn parse_candidates(root: &Path, candidates: &[PathBuf]) -> Vec<ParsedFile> {
    candidates
        .par_iter()
        .filter_map(|path| {
            let mut parser = match CSharpParser::new() {
                Ok(p) => p,
                Err(e) => {
                    tracing::warn!(error = %e, "grammar unavailable; skipping file");
                    return None;
                }
            };
            match parser.parse_file(root, path) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unparseable file");
                    None
                }
            }
        })
        .collect()
}

fn relative_display(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.to_string_lossy().replace('\\', "/")
}
