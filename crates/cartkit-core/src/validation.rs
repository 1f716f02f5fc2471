//! # Validation Module
//!
//! Admission rules for values entering a cart or a discount catalog.
//!
//! ## Where Rules Apply
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  Cart::add_item ────────► validate_line_item                           │
//! │                           ├── quantity <= 0 → MustBePositive           │
//! │                           └── price    <  0 → OutOfRange               │
//! │                           Err → item ignored, cart unchanged            │
//! │                                                                         │
//! │  DiscountCatalog::with_code ──► validate_discount_rate                 │
//! │                                 ├── blank code  → Required             │
//! │                                 └── rate ∉ (0,1] → OutOfRange          │
//! │                                 Err → returned to caller                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Items already in a cart are never re-validated.

use crate::error::ValidationError;
use crate::types::LineItem;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Line Items
// =============================================================================

/// Checks whether a line item may enter a cart.
///
/// ## Rules
/// - Quantity must be positive (> 0)
/// - Price must be non-negative (>= 0); zero is allowed (free items)
///
/// A NaN price passes, because `NaN < 0` is false.
///
/// ## Example
/// ```rust
/// use cartkit_core::validation::validate_line_item;
/// use cartkit_core::LineItem;
///
/// assert!(validate_line_item(&LineItem::new(1, "Apple", 1.0, 3)).is_ok());
/// assert!(validate_line_item(&LineItem::new(1, "Ghost", 10.0, 0)).is_err());
/// assert!(validate_line_item(&LineItem::new(2, "Buggy", -5.0, 2)).is_err());
/// ```
pub fn validate_line_item(item: &LineItem) -> ValidationResult<()> {
    validate_quantity(item.quantity)?;
    validate_price(item.price)
}

/// Validates a quantity value.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if price < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0.0,
            max: f64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Discounts
// =============================================================================

/// Validates a discount catalog entry.
///
/// ## Rules
/// - Code must not be blank
/// - Rate must be in `(0, 1]`; a zero rate could never be applied
pub fn validate_discount_rate(code: &str, rate: f64) -> ValidationResult<()> {
    if code.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "discount code".to_string(),
        });
    }

    if !(rate > 0.0 && rate <= 1.0) {
        return Err(ValidationError::OutOfRange {
            field: format!("discount rate for {}", code),
            min: 0.0,
            max: 1.0,
        });
    }

    Ok(())
}
