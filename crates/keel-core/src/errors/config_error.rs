//! Configuration errors. All fatal: raised at initialization, no partial state.

/// Errors raised while validating or loading workspace configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unsupported workspace mode: {0}")]
    UnsupportedMode(String),

    #[error("Workspace root does not exist: {0}")]
    MissingRoot(String),

    #[error("Workspace root is not a directory: {0}")]
    RootNotADirectory(String),

    #[error("Invalid review configuration: {0}")]
    InvalidToml(#[from] toml::de::Error),
}
