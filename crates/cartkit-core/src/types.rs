//! # Domain Types
//!
//! The value types a cart is built from.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐                        │
//! │  │     ItemId      │   │       LineItem       │                        │
//! │  │  ─────────────  │   │  ──────────────────  │                        │
//! │  │  number | text  │◄──│  id                  │                        │
//! │  │  1, "SKU-9"     │   │  name                │                        │
//! │  └─────────────────┘   │  price    (>= 0)     │                        │
//! │                        │  quantity (> 0)      │                        │
//! │                        └──────────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `>= 0` / `> 0` rules are checked once, when an item enters a cart.
//! A `LineItem` value on its own may hold anything.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Item Identifier
// =============================================================================

/// Identifier of a line item. Two items are "the same product" when their
/// ids compare equal.
///
/// Numbers and strings are distinct: `ItemId::from(1)` and `ItemId::from("1")`
/// name different products. Serializes untagged, as a JSON number or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum ItemId {
    /// Integer id, e.g. `1`.
    Number(i64),
    /// String id, e.g. `"SKU-9"`.
    Text(String),
}

impl ItemId {
    /// Creates a string id.
    pub fn new(id: impl Into<String>) -> Self {
        ItemId::Text(id.into())
    }

    /// Returns the integer value for numeric ids.
    pub const fn as_number(&self) -> Option<i64> {
        match self {
            ItemId::Number(n) => Some(*n),
            ItemId::Text(_) => None,
        }
    }

    /// Returns the string value for text ids.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ItemId::Number(_) => None,
            ItemId::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId::Text(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        ItemId::Text(id)
    }
}

impl From<&ItemId> for ItemId {
    fn from(id: &ItemId) -> Self {
        id.clone()
    }
}

macro_rules! item_id_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ItemId {
                fn from(id: $t) -> Self {
                    ItemId::Number(i64::from(id))
                }
            }
        )*
    };
}

item_id_from_int!(i8, i16, i32, i64, u8, u16, u32);

// =============================================================================
// Line Item
// =============================================================================

/// One product entry in a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Product identifier, unique within a cart.
    pub id: ItemId,

    /// Display name.
    pub name: String,

    /// Unit price.
    pub price: f64,

    /// Number of units.
    pub quantity: i64,
}

impl LineItem {
    /// Creates a line item.
    ///
    /// ## Example
    /// ```rust
    /// use cartkit_core::LineItem;
    ///
    /// let apple = LineItem::new(1, "Apple", 1.0, 3);
    /// assert_eq!(apple.id.as_number(), Some(1));
    /// assert_eq!(apple.line_total(), 3.0);
    /// ```
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, price: f64, quantity: i64) -> Self {
        LineItem {
            id: id.into(),
            name: name.into(),
            price,
            quantity,
        }
    }

    /// `price * quantity`.
    #[inline]
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_string_ids_are_distinct() {
        assert_ne!(ItemId::from(1), ItemId::from("1"));
        assert_eq!(ItemId::from(999u32), ItemId::Number(999));
        assert_eq!(ItemId::from("SKU-9"), ItemId::new("SKU-9"));
        assert_ne!(ItemId::from(1), ItemId::from(2));
    }

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId::from(42).to_string(), "42");
        assert_eq!(ItemId::from("SKU-9").to_string(), "SKU-9");
    }

    #[test]
    fn test_line_total() {
        let item = LineItem::new("banana", "Banana", 2.5, 4);
        assert_eq!(item.line_total(), 10.0);
    }

    #[test]
    fn test_item_id_serializes_untagged() {
        let numeric = serde_json::to_value(LineItem::new(7, "Pear", 1.0, 1)).unwrap();
        assert_eq!(numeric["id"], 7);

        let text = serde_json::to_value(LineItem::new("7", "Pear", 1.0, 1)).unwrap();
        assert_eq!(text["id"], "7");

        let back: ItemId = serde_json::from_str("7").unwrap();
        assert_eq!(back, ItemId::Number(7));
        let back: ItemId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(back, ItemId::Text("7".to_string()));
    }
}
