//! Per-category rulesets.
//!
//! Every category updates an item in three phases, applied in strict order:
//!
//! ```text
//! [Pre] → [General] → [Post]
//! ```
//!
//! 1. **Pre** decrements `sell_in` (shared by every category)
//! 2. **General** applies the category's own quality rule
//! 3. **Post** clamps quality into `[0, 50]` (shared by every category)
//!
//! The general phase reads the already-decremented `sell_in`, which shifts
//! every threshold by one day relative to the value the caller supplied.
//! Sulfuras skips all three phases.

use crate::category::Category;
use crate::item::Item;
use crate::rules;

/// Phase of a daily update.
///
/// # Examples
///
/// ```rust
/// use gilded_rose::ruleset::UpdatePhase;
///
/// assert!(UpdatePhase::Pre < UpdatePhase::General);
/// assert_eq!(UpdatePhase::ALL.last(), Some(&UpdatePhase::Post));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UpdatePhase {
    /// Runs first: daily `sell_in` adjustment.
    Pre,
    /// Category-specific quality rule.
    General,
    /// Runs last: quality bounds.
    Post,
}

impl UpdatePhase {
    /// All phases in application order.
    pub const ALL: [UpdatePhase; 3] = [UpdatePhase::Pre, UpdatePhase::General, UpdatePhase::Post];
}

/// Default pre-phase: one day passes.
pub fn apply_pre_updates(item: &mut Item) {
    item.sell_in = rules::decrement_sell_in(item.sell_in);
}

/// Default post-phase: enforce the minimum, then the maximum quality.
pub fn apply_post_updates(item: &mut Item) {
    item.quality = rules::clamp_min(item.quality);
    item.quality = rules::clamp_max(item.quality);
}

/// Category-specific general phase.
///
/// Sulfuras and `Unknown` leave the item untouched.
pub fn apply_general_updates(category: Category, item: &mut Item) {
    match category {
        Category::Normal => {
            let passed = rules::has_sell_in_passed(item.sell_in);
            item.quality = rules::degrade_quality(item.quality, passed);
        }
        Category::AgedBrie => {
            item.quality = rules::mature_quality(item.quality);
        }
        Category::BackstagePasses => {
            item.quality = rules::event_quality(item.quality, item.sell_in);
        }
        Category::Conjured => {
            let passed = rules::has_sell_in_passed(item.sell_in);
            item.quality = rules::conjured_quality(item.quality, passed);
        }
        Category::Sulfuras => rules::sulfuras_noop(),
        Category::Unknown => {}
    }
}

/// Apply a single phase of `category`'s ruleset.
///
/// Sulfuras overrides every phase with a no-op, so its values are never
/// read or written. `Unknown` has no ruleset and is likewise left alone.
pub fn apply_phase(category: Category, phase: UpdatePhase, item: &mut Item) {
    if matches!(category, Category::Sulfuras | Category::Unknown) {
        rules::sulfuras_noop();
        return;
    }

    match phase {
        UpdatePhase::Pre => apply_pre_updates(item),
        UpdatePhase::General => apply_general_updates(category, item),
        UpdatePhase::Post => apply_post_updates(item),
    }
}

/// Run the full three-phase update for `category` on `item`.
///
/// # Examples
///
/// ```rust
/// use gilded_rose::{Category, Item};
/// use gilded_rose::ruleset::apply_updates;
///
/// let mut passes = Item::new("Backstage Passes", 11, 20);
/// apply_updates(Category::BackstagePasses, &mut passes);
///
/// // Evaluated at the decremented sell-in of 10: the "close" band.
/// assert_eq!(passes.sell_in, 10);
/// assert_eq!(passes.quality, 22);
/// ```
pub fn apply_updates(category: Category, item: &mut Item) {
    for phase in UpdatePhase::ALL {
        apply_phase(category, phase, item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(category: Category, sell_in: i32, quality: i32) -> (i32, i32) {
        let mut item = Item::new("test", sell_in, quality);
        apply_updates(category, &mut item);
        (item.sell_in, item.quality)
    }

    #[test]
    fn test_phase_order() {
        let mut sorted = UpdatePhase::ALL;
        sorted.sort();
        assert_eq!(sorted, UpdatePhase::ALL);
    }

    #[test]
    fn test_pre_updates() {
        let mut item = Item::new("x", 0, 10);
        apply_pre_updates(&mut item);
        assert_eq!(item.sell_in, -1);
        assert_eq!(item.quality, 10);
    }

    #[test]
    fn test_post_updates() {
        let mut item = Item::new("x", 3, -4);
        apply_post_updates(&mut item);
        assert_eq!(item.quality, 0);

        item.quality = 51;
        apply_post_updates(&mut item);
        assert_eq!(item.quality, 50);
        assert_eq!(item.sell_in, 3);
    }

    #[test]
    fn test_normal() {
        assert_eq!(tick(Category::Normal, 5, 10), (4, 9));
        assert_eq!(tick(Category::Normal, 0, 10), (-1, 8));
        assert_eq!(tick(Category::Normal, 1, 10), (0, 9));
        assert_eq!(tick(Category::Normal, 0, 1), (-1, 0));
        assert_eq!(tick(Category::Normal, 5, 60), (4, 50));
    }

    #[test]
    fn test_aged_brie() {
        assert_eq!(tick(Category::AgedBrie, 5, 49), (4, 50));
        assert_eq!(tick(Category::AgedBrie, 5, 50), (4, 50));
        assert_eq!(tick(Category::AgedBrie, -3, 10), (-4, 11));
        assert_eq!(tick(Category::AgedBrie, 5, -5), (4, 0));
    }

    #[test]
    fn test_backstage_passes() {
        assert_eq!(tick(Category::BackstagePasses, 12, 20), (11, 21));
        assert_eq!(tick(Category::BackstagePasses, 11, 20), (10, 22));
        assert_eq!(tick(Category::BackstagePasses, 6, 20), (5, 23));
        assert_eq!(tick(Category::BackstagePasses, 1, 20), (0, 23));
        assert_eq!(tick(Category::BackstagePasses, 0, 20), (-1, 0));
        assert_eq!(tick(Category::BackstagePasses, 3, 49), (2, 50));
    }

    #[test]
    fn test_conjured() {
        assert_eq!(tick(Category::Conjured, 5, 10), (4, 8));
        assert_eq!(tick(Category::Conjured, 0, 10), (-1, 6));
        assert_eq!(tick(Category::Conjured, 0, 3), (-1, 0));
    }

    #[test]
    fn test_sulfuras_untouched() {
        assert_eq!(tick(Category::Sulfuras, -5, 80), (-5, 80));
        assert_eq!(tick(Category::Sulfuras, i32::MIN, -1), (i32::MIN, -1));
    }

    #[test]
    fn test_unknown_untouched() {
        assert_eq!(tick(Category::Unknown, 3, 7), (3, 7));
    }

    #[test]
    fn test_sell_in_wraps() {
        assert_eq!(tick(Category::Normal, i32::MIN, 10), (i32::MAX, 9));
    }
}
