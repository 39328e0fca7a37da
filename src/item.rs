//! Inventory item module.
//!
//! Provides the `Item` type, the mutable record that the rule engine
//! transforms once per tick.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single stock item.
///
/// The name doubles as the category key. `sell_in` counts the days left
/// before the item must be sold and may be negative. Items are owned by the
/// caller; the engine only mutates them in place.
///
/// # Examples
///
/// ```rust
/// use gilded_rose::Item;
///
/// let item = Item::new("Aged Brie", 5, 10);
/// assert_eq!(item.name, "Aged Brie");
/// assert_eq!(item.sell_in, 5);
/// assert_eq!(item.quality, 10);
/// assert_eq!(item.to_string(), "Aged Brie 5 10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Item name, matched case-insensitively against the category labels.
    pub name: String,

    /// Days remaining before the item must be sold.
    pub sell_in: i32,

    /// Desirability of the item.
    pub quality: i32,
}

impl Item {
    /// Create a new `Item`.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.sell_in, self.quality)
    }
}
