//! # Discount Module
//!
//! Discount codes and the catalog they are looked up in.
//!
//! ## How a Discount Is Applied
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart total: 100.00                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  apply_discount("WELCOME10")                                            │
//! │       │  catalog lookup → 0.10                                          │
//! │       ▼                                                                 │
//! │  total × (1 - 0.10) = 90.00                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  apply_discount("SUMMER20")                                             │
//! │       │  catalog lookup → 0.20                                          │
//! │       ▼                                                                 │
//! │  total × (1 - 0.20) = 72.00   (compounds on the current total)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lookup is exact: `"welcome10"` is not `"WELCOME10"`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::validation::validate_discount_rate;

// =============================================================================
// Built-in Codes
// =============================================================================

/// The discount codes every catalog starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscountCode {
    /// 10% off.
    #[serde(rename = "WELCOME10")]
    Welcome10,
    /// 20% off.
    #[serde(rename = "SUMMER20")]
    Summer20,
}

impl DiscountCode {
    /// All built-in codes.
    pub const ALL: [DiscountCode; 2] = [DiscountCode::Welcome10, DiscountCode::Summer20];

    /// The code as typed by a customer.
    pub const fn as_str(&self) -> &'static str {
        match self {
            DiscountCode::Welcome10 => "WELCOME10",
            DiscountCode::Summer20 => "SUMMER20",
        }
    }

    /// Fraction taken off the total.
    pub const fn rate(&self) -> f64 {
        match self {
            DiscountCode::Welcome10 => 0.10,
            DiscountCode::Summer20 => 0.20,
        }
    }
}

impl fmt::Display for DiscountCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiscountCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DiscountCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| CoreError::InvalidDiscountCode(s.to_string()))
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// A mapping from discount code to the fraction it takes off a total.
///
/// ## Example
/// ```rust
/// use cartkit_core::DiscountCatalog;
///
/// let catalog = DiscountCatalog::standard()
///     .with_code("BLACKFRIDAY", 0.5)
///     .unwrap();
///
/// assert_eq!(catalog.rate("WELCOME10"), Some(0.10));
/// assert_eq!(catalog.rate("BLACKFRIDAY"), Some(0.5));
/// assert_eq!(catalog.rate("welcome10"), None);
/// ```
///
/// Serializes as a plain `{ code: rate }` map. Deserializing runs every
/// entry through [`with_code`](DiscountCatalog::with_code), so out-of-range
/// rates are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "BTreeMap<String, f64>", try_from = "BTreeMap<String, f64>")]
pub struct DiscountCatalog {
    codes: BTreeMap<String, f64>,
}

impl DiscountCatalog {
    /// A catalog with no codes at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in catalog: `WELCOME10` (10%) and `SUMMER20` (20%).
    pub fn standard() -> Self {
        let codes = DiscountCode::ALL
            .into_iter()
            .map(|code| (code.as_str().to_string(), code.rate()))
            .collect();
        DiscountCatalog { codes }
    }

    /// Adds or replaces a code.
    ///
    /// ## Errors
    /// `CoreError::Validation` when the code is blank or the rate is
    /// outside `(0, 1]`.
    pub fn with_code(mut self, code: impl Into<String>, rate: f64) -> CoreResult<Self> {
        let code = code.into();
        validate_discount_rate(&code, rate)?;
        self.codes.insert(code, rate);
        Ok(self)
    }

    /// Looks up a code. Zero rates count as unknown.
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.codes.get(code).copied().filter(|rate| *rate != 0.0)
    }

    /// Like [`rate`](Self::rate), but unknown codes become
    /// `CoreError::InvalidDiscountCode`.
    pub fn lookup(&self, code: &str) -> CoreResult<f64> {
        self.rate(code)
            .ok_or_else(|| CoreError::InvalidDiscountCode(code.to_string()))
    }

    /// Returns true if the code would be accepted.
    pub fn contains(&self, code: &str) -> bool {
        self.rate(code).is_some()
    }

    /// Iterates codes in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = (&str, f64)> {
        self.codes.iter().map(|(code, rate)| (code.as_str(), *rate))
    }

    /// Number of codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true if the catalog has no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Merges `other` into `self`; codes in `other` win.
    pub fn extend(&mut self, other: DiscountCatalog) {
        self.codes.extend(other.codes);
    }
}

impl TryFrom<BTreeMap<String, f64>> for DiscountCatalog {
    type Error = CoreError;

    fn try_from(codes: BTreeMap<String, f64>) -> CoreResult<Self> {
        codes
            .into_iter()
            .try_fold(DiscountCatalog::empty(), |catalog, (code, rate)| {
                catalog.with_code(code, rate)
            })
    }
}

impl From<DiscountCatalog> for BTreeMap<String, f64> {
    fn from(catalog: DiscountCatalog) -> Self {
        catalog.codes
    }
}
