//! Workspace configuration: root, mode, and review thresholds.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

use super::ReviewConfig;

/// How the workspace tracks file state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkspaceMode {
    /// Version-controlled workspace; change detection queries git and
    /// cross-checks with directory snapshots.
    Git,
    /// Plain directory; change detection is snapshot-only.
    FileSystem,
}

impl FromStr for WorkspaceMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "git" => Ok(Self::Git),
            "filesystem" | "fs" => Ok(Self::FileSystem),
            other => Err(ConfigError::UnsupportedMode(other.to_string())),
        }
    }
}

/// Configuration for one review session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    pub root: PathBuf,
    pub mode: WorkspaceMode,
    #[serde(default)]
    pub review: ReviewConfig,
}

impl WorkspaceConfig {
    pub fn new(root: impl Into<PathBuf>, mode: WorkspaceMode) -> Self {
        Self {
            root: root.into(),
            mode,
            review: ReviewConfig::default(),
        }
    }

    /// Validate the configuration. Fails fast: a bad root or mode never
    /// produces a partially initialized session.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.root.exists() {
            return Err(ConfigError::MissingRoot(self.root.display().to_string()));
        }
        if !self.root.is_dir() {
            return Err(ConfigError::RootNotADirectory(
                self.root.display().to_string(),
            ));
        }
        Ok(())
    }
}
