//! # Arithmetic Helpers
//!
//! `sum`, `divide` and `get_max`.
//!
//! ## Dynamic Addition
//! `sum` reproduces the addition operator of a dynamically typed host:
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  either side Text or Sequence?                                          │
//! │       │                                                                 │
//! │       ├── yes ─► concatenate string forms      "5" + 3      = "53"      │
//! │       │                                        [1,2] + 3    = "1,23"    │
//! │       │                                                                 │
//! │       └── no ──► coerce, then IEEE-754 add     true + 1     = 2         │
//! │                  Bool   → 0 / 1                null + 5     = 5         │
//! │                  Null   → 0                    undefined+5  = NaN       │
//! │                  Undefined → NaN               MAX + MAX    = Infinity  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Callers that only ever add numbers can use [`sum_numbers`].

use std::fmt;
use tracing::debug;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Operand
// =============================================================================

/// A dynamically typed value accepted by [`sum`].
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A number (including NaN and the infinities).
    Number(f64),
    /// A string.
    Text(String),
    /// A boolean.
    Bool(bool),
    /// An ordered list of numbers.
    Sequence(Vec<f64>),
    /// An explicit "no value".
    Null,
    /// An absent value.
    Undefined,
}

impl Operand {
    /// Numeric coercion used by addition. `None` for Text and Sequence,
    /// which force concatenation instead.
    fn to_addend(&self) -> Option<f64> {
        match self {
            Operand::Number(n) => Some(*n),
            Operand::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Operand::Null => Some(0.0),
            Operand::Undefined => Some(f64::NAN),
            Operand::Text(_) | Operand::Sequence(_) => None,
        }
    }

    /// Returns the number if this is `Number`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Operand::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string if this is `Text`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Operand::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true for `Number(NaN)`.
    pub fn is_nan(&self) -> bool {
        matches!(self, Operand::Number(n) if n.is_nan())
    }
}

/// String form used for concatenation.
impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Number(n) => f.write_str(&format_number(*n)),
            Operand::Text(s) => f.write_str(s),
            Operand::Bool(b) => write!(f, "{}", b),
            Operand::Sequence(values) => {
                let parts: Vec<String> = values.iter().map(|v| format_number(*v)).collect();
                f.write_str(&parts.join(","))
            }
            Operand::Null => f.write_str("null"),
            Operand::Undefined => f.write_str("undefined"),
        }
    }
}

impl From<f64> for Operand {
    fn from(n: f64) -> Self {
        Operand::Number(n)
    }
}

impl From<i32> for Operand {
    fn from(n: i32) -> Self {
        Operand::Number(n as f64)
    }
}

impl From<i64> for Operand {
    fn from(n: i64) -> Self {
        Operand::Number(n as f64)
    }
}

impl From<u32> for Operand {
    fn from(n: u32) -> Self {
        Operand::Number(n as f64)
    }
}

impl From<bool> for Operand {
    fn from(b: bool) -> Self {
        Operand::Bool(b)
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::Text(s.to_string())
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand::Text(s)
    }
}

impl From<Vec<f64>> for Operand {
    fn from(values: Vec<f64>) -> Self {
        Operand::Sequence(values)
    }
}

impl From<&[f64]> for Operand {
    fn from(values: &[f64]) -> Self {
        Operand::Sequence(values.to_vec())
    }
}

impl From<()> for Operand {
    fn from(_: ()) -> Self {
        Operand::Null
    }
}

/// `None` is the absent value.
impl<T: Into<Operand>> From<Option<T>> for Operand {
    fn from(value: Option<T>) -> Self {
        value.map_or(Operand::Undefined, Into::into)
    }
}

/// Formats a number the way the host's number-to-string conversion does:
/// plain decimal for magnitudes in `[1e-6, 1e21)`, exponent form with an
/// explicit sign otherwise.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return n.to_string();
    }

    let formatted = format!("{:e}", n);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

// =============================================================================
// Operations
// =============================================================================

/// Adds two operands with dynamic-typing semantics.
///
/// ## Example
/// ```rust
/// use cartkit_core::utils::{sum, Operand};
///
/// assert_eq!(sum(2, 3), Operand::Number(5.0));
/// assert_eq!(sum("5", 3), Operand::Text("53".to_string()));
/// assert_eq!(sum(true, 1), Operand::Number(2.0));
/// assert_eq!(sum(Operand::Null, 5), Operand::Number(5.0));
/// assert!(sum(Operand::Undefined, 5).is_nan());
/// ```
pub fn sum(a: impl Into<Operand>, b: impl Into<Operand>) -> Operand {
    let (a, b) = (a.into(), b.into());
    match (a.to_addend(), b.to_addend()) {
        (Some(x), Some(y)) => Operand::Number(x + y),
        _ => Operand::Text(format!("{}{}", a, b)),
    }
}

/// Adds two numbers.
#[inline]
pub fn sum_numbers(a: f64, b: f64) -> f64 {
    a + b
}

/// Divides `a` by `b`.
///
/// ## Errors
/// `CoreError::DivisionByZero` when `b` is zero of either sign, whatever `a` is.
///
/// ## Example
/// ```rust
/// use cartkit_core::utils::divide;
///
/// assert_eq!(divide(10.0, 2.0).unwrap(), 5.0);
/// assert!(divide(0.0, 0.0).is_err());
/// ```
pub fn divide(a: f64, b: f64) -> CoreResult<f64> {
    if b == 0.0 {
        debug!(dividend = a, "Refusing division by zero");
        return Err(CoreError::DivisionByZero);
    }
    Ok(a / b)
}

/// Returns the largest value, or `None` for an empty slice.
///
/// A NaN anywhere makes the result NaN, and `0` beats `-0`.
pub fn get_max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(|max, v| {
        if max.is_nan() || v.is_nan() {
            f64::NAN
        } else if v > max || (v == max && max.is_sign_negative() && v.is_sign_positive()) {
            v
        } else {
            max
        }
    })
}

/// [`get_max`] over an operand: `None` unless it is a non-empty `Sequence`.
pub fn get_max_of(value: &Operand) -> Option<f64> {
    match value {
        Operand::Sequence(values) => get_max(values),
        _ => None,
    }
}
