//! Errors a plugin reports to the host

use std::fmt;

/// Why a lifecycle call was refused
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    /// The configuration section could not be applied
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The call is not valid in the plugin's current state
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result of a lifecycle call
pub type Result<T> = std::result::Result<T, PluginError>;

impl PluginError {
    /// Rejected configuration
    pub fn config(msg: impl fmt::Display) -> Self {
        Self::ConfigError(msg.to_string())
    }

    /// Call made in the wrong lifecycle state
    pub fn invalid_state(msg: impl fmt::Display) -> Self {
        Self::InvalidState(msg.to_string())
    }
}
