//! # Config Error Types

use cartkit_core::CoreError;
use thiserror::Error;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading, validating or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration values are inconsistent.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading or parsing the config file failed.
    #[error("Failed to load config: {0}")]
    LoadFailed(String),

    /// Writing the config file failed.
    #[error("Failed to save config: {0}")]
    SaveFailed(String),

    /// A configured value was rejected by cartkit-core.
    #[error(transparent)]
    Core(#[from] CoreError),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::LoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::LoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::SaveFailed(err.to_string())
    }
}

impl ConfigError {
    /// Returns true if the file could not be read or parsed, as opposed to
    /// holding values that fail validation.
    pub fn is_load_error(&self) -> bool {
        matches!(self, ConfigError::LoadFailed(_))
    }
}
