//! # Cart
//!
//! The shopping cart aggregate: a list of line items plus a running total.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Operation              Items                    Total                  │
//! │  ─────────              ─────                    ─────                  │
//! │                                                                         │
//! │  add_item(new id) ─────► push(copy)             += price × qty         │
//! │                                                                         │
//! │  add_item(known id) ───► items[i].qty += qty    += price × qty         │
//! │                          (stored price kept)     (incoming price)       │
//! │                                                                         │
//! │  remove_item(id) ──────► items.remove(i)        -= stored price × qty  │
//! │                                                                         │
//! │  apply_discount(code) ─► (unchanged)            ×= 1 - rate            │
//! │                                                                         │
//! │  clear() ──────────────► []                     = 0                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Total Drift
//! `total` is a running accumulator, not a derived value. Once a discount has
//! been applied, or an item was merged at a different price than the stored
//! line, `total` no longer equals [`Cart::subtotal`]. That is the contract:
//! callers that need a recomputed figure use `subtotal()`.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::discount::DiscountCatalog;
use crate::error::CoreResult;
use crate::types::{ItemId, LineItem};
use crate::validation::validate_line_item;

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `id` (adding the same id increases quantity)
/// - Every stored item had `quantity > 0` and `price >= 0` when it was added
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    /// Items in insertion order.
    pub items: Vec<LineItem>,

    /// Running total.
    pub total: f64,
}

impl Cart {
    /// Creates a new empty cart.
    ///
    /// ## Example
    /// ```rust
    /// use cartkit_core::Cart;
    ///
    /// let cart = Cart::new();
    /// assert!(cart.items.is_empty());
    /// assert_eq!(cart.total, 0.0);
    /// ```
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            total: 0.0,
        }
    }

    /// Adds an item to the cart or increases quantity if the id is already present.
    ///
    /// ## Behavior
    /// - `quantity <= 0` or `price < 0`: ignored, nothing changes
    /// - id already in cart: quantity increases, stored price is kept
    ///   (ignored if the merged quantity would overflow `i64`)
    /// - id not in cart: a copy of `item` is appended
    ///
    /// In both accepted cases `total` grows by `item.price × item.quantity`,
    /// using the incoming price.
    ///
    /// ## Example
    /// ```rust
    /// use cartkit_core::{Cart, LineItem};
    ///
    /// let mut cart = Cart::new();
    /// cart.add_item(&LineItem::new(1, "Apple", 1.0, 2));
    /// cart.add_item(&LineItem::new(1, "Apple", 1.0, 3));
    ///
    /// assert_eq!(cart.items.len(), 1);
    /// assert_eq!(cart.items[0].quantity, 5);
    /// assert_eq!(cart.total, 5.0);
    /// ```
    pub fn add_item(&mut self, item: &LineItem) {
        if let Err(reason) = validate_line_item(item) {
            debug!(id = %item.id, %reason, "Ignoring line item");
            return;
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            let Some(quantity) = existing.quantity.checked_add(item.quantity) else {
                debug!(id = %item.id, "Ignoring line item, merged quantity overflows");
                return;
            };
            existing.quantity = quantity;
            debug!(id = %item.id, quantity, "Merged into existing line");
        } else {
            self.items.push(item.clone());
            debug!(id = %item.id, quantity = item.quantity, "Added new line");
        }

        self.total += item.line_total();
    }

    /// Removes the first line with the given id.
    ///
    /// Unknown ids are a no-op. The removed line's `price × quantity` is
    /// subtracted from `total`.
    pub fn remove_item(&mut self, id: impl Into<ItemId>) {
        let id = id.into();
        let Some(index) = self.items.iter().position(|i| i.id == id) else {
            debug!(%id, "Remove skipped, id not in cart");
            return;
        };

        let removed = self.items.remove(index);
        self.total -= removed.line_total();
        debug!(%id, total = self.total, "Removed line");
    }

    /// Clears all items and resets the total to zero.
    pub fn clear(&mut self) {
        self.items.clear();
        self.total = 0.0;
        debug!("Cart cleared");
    }

    /// Applies a built-in discount code to the current total.
    ///
    /// ## Behavior
    /// - `WELCOME10`: total × 0.9
    /// - `SUMMER20`: total × 0.8
    /// - anything else: `CoreError::InvalidDiscountCode`, total unchanged
    ///
    /// Calling it again compounds on the already-discounted total.
    ///
    /// ## Example
    /// ```rust
    /// use cartkit_core::{Cart, LineItem};
    ///
    /// let mut cart = Cart::new();
    /// cart.add_item(&LineItem::new(1, "Apple", 10.0, 1));
    ///
    /// cart.apply_discount("SUMMER20").unwrap();
    /// assert!((cart.total - 8.0).abs() < 1e-9);
    ///
    /// assert!(cart.apply_discount("INVALID").is_err());
    /// assert!((cart.total - 8.0).abs() < 1e-9);
    /// ```
    pub fn apply_discount(&mut self, code: &str) -> CoreResult<()> {
        self.apply_discount_with(&DiscountCatalog::standard(), code)
    }

    /// Applies a discount code looked up in `catalog`.
    pub fn apply_discount_with(&mut self, catalog: &DiscountCatalog, code: &str) -> CoreResult<()> {
        let rate = catalog.lookup(code).inspect_err(|_| {
            debug!(code, "Rejected discount code");
        })?;

        self.total *= 1.0 - rate;
        debug!(code, rate, total = self.total, "Discount applied");
        Ok(())
    }

    /// Returns the line with the given id, if any.
    pub fn get(&self, id: impl Into<ItemId>) -> Option<&LineItem> {
        let id = id.into();
        self.items.iter().find(|i| i.id == id)
    }

    /// Returns the number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines, saturating at `i64::MAX`.
    pub fn total_quantity(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Recomputes `Σ price × quantity` over the stored lines.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Free Functions
// =============================================================================
// Call-surface mirrors of the methods above for callers that prefer
// `add_item(&mut cart, &item)` over `cart.add_item(&item)`.

/// Creates an empty cart.
pub fn create_cart() -> Cart {
    Cart::new()
}

/// See [`Cart::add_item`].
pub fn add_item(cart: &mut Cart, item: &LineItem) {
    cart.add_item(item);
}

/// See [`Cart::remove_item`].
pub fn remove_item(cart: &mut Cart, id: impl Into<ItemId>) {
    cart.remove_item(id);
}

/// See [`Cart::clear`].
pub fn clear_cart(cart: &mut Cart) {
    cart.clear();
}

/// See [`Cart::apply_discount`].
pub fn apply_discount(cart: &mut Cart, code: &str) -> CoreResult<()> {
    cart.apply_discount(code)
}
