//! # cartkit Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CARTKIT_LOG=debug                                                  │
//! │     CARTKIT_STANDARD_DISCOUNTS=false                                   │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/cartkit/cartkit.toml (Linux)                             │
//! │     ~/Library/Application Support/dev.cartkit.cartkit/cartkit.toml     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     standard discount codes, "info,cartkit=debug" log filter           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [log]
//! filter = "info,cartkit=debug"
//!
//! [discounts]
//! include_standard = true
//!
//! [discounts.codes]
//! BLACKFRIDAY = 0.5
//! ```

use cartkit_core::validation::validate_discount_rate;
use cartkit_core::DiscountCatalog;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "cartkit.toml";

// =============================================================================
// Log Settings
// =============================================================================

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info,cartkit=debug".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// Discount Settings
// =============================================================================

/// Which discount codes a cart accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountSettings {
    /// Start from WELCOME10 / SUMMER20.
    #[serde(default = "default_true")]
    pub include_standard: bool,

    /// Extra codes, or overrides of standard ones. Rates must be in `(0, 1]`.
    #[serde(default)]
    pub codes: BTreeMap<String, f64>,
}

fn default_true() -> bool {
    true
}

impl Default for DiscountSettings {
    fn default() -> Self {
        DiscountSettings {
            include_standard: true,
            codes: BTreeMap::new(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete cartkit configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartKitConfig {
    /// Logging settings.
    #[serde(default)]
    pub log: LogSettings,

    /// Discount catalog settings.
    #[serde(default)]
    pub discounts: DiscountSettings,
}

impl CartKitConfig {
    /// Creates a config holding only defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading cartkit config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load cartkit config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a config file without applying environment overrides.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses TOML text.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ConfigError::SaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| ConfigError::SaveFailed(e.to_string()))?;

        info!(?path, "cartkit config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.log.filter.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "log.filter must not be empty".into(),
            ));
        }

        for (code, rate) in &self.discounts.codes {
            validate_discount_rate(code, *rate)
                .map_err(|e| ConfigError::InvalidConfig(e.to_string()))?;
        }

        Ok(())
    }

    /// Builds the discount catalog described by this config.
    ///
    /// Configured codes replace standard codes of the same name.
    pub fn catalog(&self) -> ConfigResult<DiscountCatalog> {
        let mut catalog = if self.discounts.include_standard {
            DiscountCatalog::standard()
        } else {
            DiscountCatalog::empty()
        };

        for (code, rate) in &self.discounts.codes {
            catalog = catalog.with_code(code.clone(), *rate)?;
        }

        debug!(codes = catalog.len(), "Discount catalog built");
        Ok(catalog)
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from an arbitrary key lookup.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(filter) = lookup("CARTKIT_LOG") {
            debug!(filter = %filter, "Overriding log filter from environment");
            self.log.filter = filter;
        }

        if let Some(flag) = lookup("CARTKIT_STANDARD_DISCOUNTS") {
            match flag.to_lowercase().as_str() {
                "true" | "1" | "yes" => self.discounts.include_standard = true,
                "false" | "0" | "no" => self.discounts.include_standard = false,
                _ => warn!(value = %flag, "Unknown CARTKIT_STANDARD_DISCOUNTS value"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "cartkit", "cartkit")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
