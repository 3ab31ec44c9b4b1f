//! Change detection errors.
//!
//! Version-control query failures are not represented here: those degrade to
//! empty result sets. Only snapshot I/O and initialization problems surface.

/// Errors raised by the change detection engine.
#[derive(Debug, thiserror::Error)]
pub enum ChangeError {
    #[error("Workspace root does not exist: {0}")]
    MissingRoot(String),

    #[error("Snapshot walk failed: {0}")]
    Snapshot(#[from] std::io::Error),
}
