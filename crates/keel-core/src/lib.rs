//! keel-core: shared foundation for the Keel conformance engine.
//!
//! - Config: workspace mode and review thresholds
//! - Errors: one error enum per subsystem, `thiserror` only, zero `anyhow`
//! - Cancel: cooperative cancellation token
//! - Workspace: write-target containment guard

pub mod cancel;
pub mod config;
pub mod errors;
pub mod workspace;

pub use cancel::CancelToken;
pub use config::{ReviewConfig, WorkspaceConfig, WorkspaceMode};
pub use errors::{ChangeError, ConfigError, LoopError, ParseError, WorkspaceError};
pub use workspace::guard_write_path;
