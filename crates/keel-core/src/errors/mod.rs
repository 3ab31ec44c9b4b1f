//! Error handling for Keel.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod change_error;
pub mod config_error;
pub mod loop_error;
pub mod parse_error;
pub mod workspace_error;

pub use change_error::ChangeError;
pub use config_error::ConfigError;
pub use loop_error::LoopError;
pub use parse_error::ParseError;
pub use workspace_error::WorkspaceError;
