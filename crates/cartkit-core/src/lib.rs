//! # cartkit-core: Cart State and Helper Functions
//!
//! Pure logic with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        cartkit Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                cartkit-config (optional)                        │   │
//! │  │        cartkit.toml + env ──► DiscountCatalog, tracing          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cartkit-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   cart    │  │ discount  │  │   utils   │  │   │
//! │  │   │  LineItem │  │   Cart    │  │  Catalog  │  │ sum, max  │  │   │
//! │  │   │  ItemId   │  │           │  │  Code     │  │ email ... │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `LineItem`, `ItemId`
//! - [`cart`] - the `Cart` aggregate
//! - [`discount`] - discount codes and catalogs
//! - [`validation`] - admission rules for items and discount rates
//! - [`utils`] - arithmetic, string and email helpers
//! - [`error`] - domain error types
//!
//! ## Error Policy
//! Only `Cart::apply_discount` and `utils::divide` return errors. Every
//! other invalid input is ignored or mapped to a fallback value.
//!
//! ## Example Usage
//!
//! ```rust
//! use cartkit_core::{Cart, LineItem};
//!
//! let mut cart = Cart::new();
//! cart.add_item(&LineItem::new(1, "Apple", 10.0, 1));
//! cart.add_item(&LineItem::new(2, "Banana", 2.0, 5));
//! assert_eq!(cart.total, 20.0);
//!
//! cart.apply_discount("WELCOME10").unwrap();
//! assert!((cart.total - 18.0).abs() < 1e-9);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod discount;
pub mod error;
pub mod types;
pub mod utils;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{add_item, apply_discount, clear_cart, create_cart, remove_item, Cart};
pub use discount::{DiscountCatalog, DiscountCode};
pub use error::{CoreError, CoreResult, ValidationError};
pub use types::{ItemId, LineItem};
