//! # gilded_rose - Deterministic Daily Inventory Engine
//!
//! Applies one "daily tick" to a batch of stock items. Each item carries a
//! countdown to its sell-by date (`sell_in`) and a desirability score
//! (`quality`); the tick computes the next-day values according to a fixed
//! rule for the item's category.
//!
//! ## Core Concepts
//!
//! ### Update Pipeline
//!
//! Items flow through a simple pipeline:
//!
//! ```text
//! [reader] → [updater] → [ruleset] → [report]
//! ```
//!
//! 1. **reader** parses raw records into [`Item`]s
//! 2. **updater** resolves each item's [`Category`] from its name
//! 3. **ruleset** runs the category's three phases (pre, general, post)
//! 4. **report** renders the updated batch
//!
//! ### Categories
//!
//! | Name               | Rule                                          |
//! |--------------------|-----------------------------------------------|
//! | `Normal Item`      | quality -1 per day, -2 once passed            |
//! | `Aged Brie`        | quality +1 per day                            |
//! | `Backstage Passes` | +1, +2 within 10 days, +3 within 5, 0 after   |
//! | `Sulfuras`         | never changes                                 |
//! | `Conjured`         | degrades twice as fast as a normal item       |
//!
//! Quality is kept in `[0, 50]` for everything but Sulfuras. Names are
//! matched case-insensitively; anything else is renamed to
//! [`NO_SUCH_ITEM`] and otherwise left alone.
//!
//! ## Example
//!
//! ```rust
//! use gilded_rose::*;
//!
//! let mut items = reader::parse_goods("Aged Brie 5 49\nConjured 0 10\nWidget 3 7").unwrap();
//! let outcomes = update_items(&mut items);
//!
//! assert_eq!(items[0], Item::new("Aged Brie", 4, 50));
//! assert_eq!(items[1], Item::new("Conjured", -1, 6));
//! assert_eq!(items[2], Item::new(NO_SUCH_ITEM, 3, 7));
//! assert!(!outcomes[2].is_updated());
//! ```
//!
//! ## Modules
//!
//! - [`item`] - The mutable item record
//! - [`rules`] - Atomic inventory rules
//! - [`category`] - Category resolution
//! - [`ruleset`] - Three-phase per-category updates
//! - [`updater`] - Dispatch and batch updates
//! - [`reader`] - Record ingestion
//! - [`report`] - Result rendering
//! - [`error`] - Error types

pub mod category;
pub mod error;
pub mod item;
pub mod reader;
pub mod report;
pub mod rules;
pub mod ruleset;
pub mod updater;

// Re-export main types for convenience
pub use category::Category;
pub use error::InventoryError;
pub use item::Item;
pub use ruleset::UpdatePhase;
pub use updater::{update_item, update_items, TickOutcome, NO_SUCH_ITEM};
