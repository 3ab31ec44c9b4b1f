//! Workspace containment errors. Fatal, raised before any I/O occurs.

/// Errors raised when a write target fails the workspace-root guard.
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("Write target escapes workspace root: {0}")]
    EscapesRoot(String),
}
