//! Workspace-root containment guard.
//!
//! Any collaborator that writes on behalf of the engine must pass its target
//! through `guard_write_path` first. The check is lexical so targets that do
//! not exist yet can still be validated, and it runs before any I/O.

use std::path::{Component, Path, PathBuf};

use crate::errors::WorkspaceError;

/// Resolve `candidate` against `root` and reject it if it escapes the root.
///
/// Relative candidates are joined to the root; absolute candidates must
/// already sit under it. `..` components are resolved lexically and may not
/// climb above the root.
pub fn guard_write_path(root: &Path, candidate: &Path) -> Result<PathBuf, WorkspaceError> {
    let joined = if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        root.join(candidate)
    };

    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !resolved.pop() {
                    return Err(WorkspaceError::EscapesRoot(
                        candidate.display().to_string(),
                    ));
                }
            }
            other => resolved.push(other.as_os_str()),
        }
    }

    if !resolved.starts_with(root) {
        return Err(WorkspaceError::EscapesRoot(
            candidate.display().to_string(),
        ));
    }
    Ok(resolved)
}
