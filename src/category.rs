//! Item categories.
//!
//! An item's category is derived from its name exactly once, at the dispatch
//! boundary. Per-phase logic only ever sees the resolved `Category`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The rule composition that applies to an item.
///
/// Five categories are known; any other name resolves to `Unknown`.
///
/// # Examples
///
/// ```rust
/// use gilded_rose::Category;
///
/// assert_eq!(Category::from_name("Aged Brie"), Category::AgedBrie);
/// assert_eq!(Category::from_name("SULFURAS"), Category::Sulfuras);
/// assert_eq!(Category::from_name("Widget"), Category::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Degrades by 1 per day, 2 once passed.
    Normal,

    /// Matures by 1 per day.
    AgedBrie,

    /// Event item: rises towards the event, worthless afterwards.
    BackstagePasses,

    /// Legendary item: never changes.
    Sulfuras,

    /// Degrades twice as fast as a normal item.
    Conjured,

    /// Name matched none of the known labels.
    Unknown,
}

impl Category {
    /// The five known categories, in label order.
    pub const KNOWN: [Category; 5] = [
        Category::Normal,
        Category::AgedBrie,
        Category::BackstagePasses,
        Category::Sulfuras,
        Category::Conjured,
    ];

    /// Resolve a category from an item name.
    ///
    /// Matching is case-insensitive but otherwise exact: no trimming, no
    /// prefix matching.
    pub fn from_name(name: &str) -> Self {
        let normalized = name.to_lowercase();
        Self::KNOWN
            .into_iter()
            .find(|category| category.label() == Some(normalized.as_str()))
            .unwrap_or(Category::Unknown)
    }

    /// The lowercase label this category is matched by.
    ///
    /// Returns `None` for `Unknown`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gilded_rose::Category;
    ///
    /// assert_eq!(Category::BackstagePasses.label(), Some("backstage passes"));
    /// assert_eq!(Category::Unknown.label(), None);
    /// ```
    pub fn label(self) -> Option<&'static str> {
        match self {
            Category::Normal => Some("normal item"),
            Category::AgedBrie => Some("aged brie"),
            Category::BackstagePasses => Some("backstage passes"),
            Category::Sulfuras => Some("sulfuras"),
            Category::Conjured => Some("conjured"),
            Category::Unknown => None,
        }
    }

    /// Whether this is one of the five known categories.
    pub fn is_known(self) -> bool {
        self != Category::Unknown
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().unwrap_or("unknown"))
    }
}
