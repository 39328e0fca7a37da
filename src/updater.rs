//! Daily update dispatcher.
//!
//! Resolves each item's [`Category`] from its name and runs the matching
//! ruleset. Items whose name matches no category are left numerically
//! unchanged and renamed to [`NO_SUCH_ITEM`], which the report layer
//! recognises.

use crate::category::Category;
use crate::item::Item;
use crate::ruleset;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Name given to items whose category could not be resolved.
pub const NO_SUCH_ITEM: &str = "NO SUCH ITEM";

/// What happened to an item during a tick.
///
/// The sentinel rename loses the original name; it is kept here so callers
/// that want it do not have to rely on the rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TickOutcome {
    /// The category's ruleset ran.
    Updated { category: Category },

    /// No category matched; the item was renamed to [`NO_SUCH_ITEM`].
    UnknownCategory { original_name: String },
}

impl TickOutcome {
    /// Whether the item was dispatched to a ruleset.
    pub fn is_updated(&self) -> bool {
        matches!(self, TickOutcome::Updated { .. })
    }
}

/// Apply one daily tick to a single item.
///
/// # Examples
///
/// ```rust
/// use gilded_rose::{update_item, Category, Item, TickOutcome, NO_SUCH_ITEM};
///
/// let mut brie = Item::new("Aged Brie", 5, 49);
/// let outcome = update_item(&mut brie);
/// assert_eq!(outcome, TickOutcome::Updated { category: Category::AgedBrie });
/// assert_eq!((brie.sell_in, brie.quality), (4, 50));
///
/// let mut widget = Item::new("Widget", 3, 7);
/// update_item(&mut widget);
/// assert_eq!(widget.name, NO_SUCH_ITEM);
/// assert_eq!((widget.sell_in, widget.quality), (3, 7));
/// ```
pub fn update_item(item: &mut Item) -> TickOutcome {
    let category = Category::from_name(&item.name);

    if !category.is_known() {
        warn!(name = %item.name, "no category matches item name");
        let original_name = std::mem::replace(&mut item.name, NO_SUCH_ITEM.to_string());
        return TickOutcome::UnknownCategory { original_name };
    }

    let (sell_in, quality) = (item.sell_in, item.quality);
    ruleset::apply_updates(category, item);
    debug!(
        name = %item.name,
        %category,
        sell_in_before = sell_in,
        sell_in = item.sell_in,
        quality_before = quality,
        quality = item.quality,
        "item updated"
    );

    TickOutcome::Updated { category }
}

/// Apply one daily tick to every item in `items`.
///
/// Items are independent of each other. Outcomes are returned in input
/// order.
pub fn update_items(items: &mut [Item]) -> Vec<TickOutcome> {
    let outcomes: Vec<TickOutcome> = items.iter_mut().map(update_item).collect();

    let unknown = outcomes.iter().filter(|o| !o.is_updated()).count();
    info!(
        items = outcomes.len(),
        unknown,
        "daily update applied"
    );

    outcomes
}
