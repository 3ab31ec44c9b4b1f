//! Parse errors. Recoverable per file: the review skips the file and continues.

/// Errors that can occur while turning source text into a syntax tree.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to load grammar: {0}")]
    GrammarLoad(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parser produced no tree for {0}")]
    NoTree(String),
}
