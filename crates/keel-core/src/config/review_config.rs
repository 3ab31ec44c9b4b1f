//! Review thresholds for the structural analyzers and the remediation loop.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Thresholds for the conformance review. All optional; `effective_*()`
/// accessors supply the defaults the rules were calibrated against.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReviewConfig {
    /// Method count above which a type is flagged. Default: 15.
    pub max_methods: Option<u32>,
    /// Total member count above which a type is flagged. Default: 30.
    pub max_members: Option<u32>,
    /// Constructor parameter count above which a constructor is flagged. Default: 6.
    pub max_constructor_params: Option<u32>,
    /// Interface member count above which an interface is flagged. Default: 12.
    pub max_interface_members: Option<u32>,
    /// Switch section count at which a branch is flagged (inclusive). Default: 6.
    pub max_switch_sections: Option<u32>,
    /// Minimum whitespace-stripped body length for duplicate detection. Default: 120.
    pub min_duplicate_len: Option<u32>,
    /// Maximum remediation iterations before the loop gives up. Default: 3.
    pub max_iterations: Option<u32>,
}

impl ReviewConfig {
    /// Parse a `ReviewConfig` from a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn effective_max_methods(&self) -> u32 {
        self.max_methods.unwrap_or(15)
    }

    pub fn effective_max_members(&self) -> u32 {
        self.max_members.unwrap_or(30)
    }

    pub fn effective_max_constructor_params(&self) -> u32 {
        self.max_constructor_params.unwrap_or(6)
    }

    pub fn effective_max_interface_members(&self) -> u32 {
        self.max_interface_members.unwrap_or(12)
    }

    pub fn effective_max_switch_sections(&self) -> u32 {
        self.max_switch_sections.unwrap_or(6)
    }

    pub fn effective_min_duplicate_len(&self) -> usize {
        self.min_duplicate_len.unwrap_or(120) as usize
    }

    pub fn effective_max_iterations(&self) -> u32 {
        self.max_iterations.unwrap_or(3)
    }
}
