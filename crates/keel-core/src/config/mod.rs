//! Configuration for Keel. TOML-based, validated fully at initialization.

pub mod review_config;
pub mod workspace_config;

pub use review_config::ReviewConfig;
pub use workspace_config::{WorkspaceConfig, WorkspaceMode};
