//! Inventory ingestion.
//!
//! Each line of input is one record: a name (which may contain spaces)
//! followed by two integers, `sell_in` then `quality`.
//!
//! ```text
//! Backstage Passes 11 20
//! ```
//!
//! Parsing works backwards from the end of the line, so names of any length
//! are supported. Any malformed record aborts the whole batch.

use crate::error::InventoryError;
use crate::item::Item;
use std::fs;
use std::path::Path;
use tracing::info;

/// Parse a single record.
///
/// `line` is the 1-based line number used in error messages.
///
/// # Examples
///
/// ```rust
/// use gilded_rose::reader::parse_line;
/// use gilded_rose::Item;
///
/// let item = parse_line(1, "Backstage   Passes 11 20").unwrap();
/// assert_eq!(item, Item::new("Backstage Passes", 11, 20));
///
/// assert!(parse_line(2, "Aged Brie").is_err());
/// ```
pub fn parse_line(line: usize, raw: &str) -> Result<Item, InventoryError> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();

    let [name @ .., sell_in, quality] = tokens.as_slice() else {
        return Err(InventoryError::MissingFields {
            line,
            record: raw.to_string(),
        });
    };
    if name.is_empty() {
        return Err(InventoryError::MissingFields {
            line,
            record: raw.to_string(),
        });
    }

    let quality: i32 = quality.parse().map_err(|_| InventoryError::InvalidQuality {
        line,
        record: raw.to_string(),
    })?;
    let sell_in: i32 = sell_in.parse().map_err(|_| InventoryError::InvalidSellIn {
        line,
        record: raw.to_string(),
    })?;

    Ok(Item::new(name.join(" "), sell_in, quality))
}

/// Parse every line of `input` into items.
///
/// The first malformed record aborts the batch; no partial result is
/// returned.
pub fn parse_goods(input: &str) -> Result<Vec<Item>, InventoryError> {
    input
        .lines()
        .enumerate()
        .map(|(idx, raw)| parse_line(idx + 1, raw))
        .collect()
}

/// Read and parse an inventory file.
pub fn read_goods(path: impl AsRef<Path>) -> Result<Vec<Item>, InventoryError> {
    let path = path.as_ref();
    let input = fs::read_to_string(path).map_err(|source| InventoryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let items = parse_goods(&input)?;
    info!(path = %path.display(), items = items.len(), "inventory loaded");
    Ok(items)
}
