//! # Error Types
//!
//! Domain-specific error types for cartkit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cartkit-core errors (this file)                                       │
//! │  ├── CoreError        - The two failures callers must handle           │
//! │  └── ValidationError  - Input rule violations                          │
//! │                                                                         │
//! │  cartkit-config errors (separate crate)                                │
//! │  └── ConfigError      - Config file / environment failures             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ConfigError → caller              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Which Operations Raise?
//! Only two call sites ever return an error to the caller:
//!
//! | Operation                | Error                             |
//! |--------------------------|-----------------------------------|
//! | `Cart::apply_discount`   | [`CoreError::InvalidDiscountCode`] |
//! | `utils::divide`          | [`CoreError::DivisionByZero`]      |
//!
//! Every other bad input (a line item with zero quantity, an empty string
//! passed to `capitalize`, ...) degrades to a no-op or a fallback value.
//! [`ValidationError`] is still produced for those rules, but the cart
//! swallows it after logging.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors surfaced to callers of cartkit-core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// The discount code is not present in the catalog.
    ///
    /// ## When This Occurs
    /// - Typo in the code ("WELCOME1O")
    /// - Wrong case ("welcome10"), lookup is exact
    /// - Code configured with a zero rate
    ///
    /// The cart total is left untouched.
    #[error("Invalid discount code: {0}")]
    InvalidDiscountCode(String),

    /// Divisor was zero (positive or negative).
    #[error("Division by zero")]
    DivisionByZero,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
