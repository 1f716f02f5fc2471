//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::LogSettings;

/// Builds the filter: `RUST_LOG` when set, otherwise the configured directive.
pub fn env_filter(settings: &LogSettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.filter))
}

/// Installs a global fmt subscriber.
///
/// Returns false if a subscriber was already installed, which makes repeated
/// calls (tests, embedding applications) harmless.
pub fn init_tracing(settings: &LogSettings) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .try_init()
        .is_ok()
}
