//! # cartkit-config: Configuration and Logging Setup
//!
//! Everything in cartkit that touches the file system or the environment
//! lives here, so cartkit-core stays free of I/O.
//!
//! ## Usage
//! ```rust,no_run
//! use cartkit_config::{init_tracing, CartKitConfig};
//! use cartkit_core::{Cart, LineItem};
//!
//! let config = CartKitConfig::load_or_default(None);
//! init_tracing(&config.log);
//!
//! let catalog = config.catalog().unwrap();
//! let mut cart = Cart::new();
//! cart.add_item(&LineItem::new(1, "Apple", 10.0, 1));
//! cart.apply_discount_with(&catalog, "WELCOME10").unwrap();
//! ```

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::{CartKitConfig, DiscountSettings, LogSettings, CONFIG_FILE_NAME};
pub use error::{ConfigError, ConfigResult};
pub use telemetry::init_tracing;
