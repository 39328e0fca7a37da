//! Report rendering.
//!
//! Turns a batch of updated items into the end-of-day table, or into JSON
//! for machine consumers. Items carrying the [`NO_SUCH_ITEM`] sentinel are
//! shown by name only.

use crate::item::Item;
use crate::updater::NO_SUCH_ITEM;
use serde::Serialize;
use std::io::{self, Write};

const BANNER: &str = "=========================================";
const TITLE: &str = "RESULTS: Finest Goods After 1 Elapsed Day";
const HEADER: &str = "ITEMNAME | SELLIN | QUALITY";
const RULE: &str = "---------------------------";

/// Write the end-of-day table for `items` to `out`.
pub fn write_report<W: Write>(out: &mut W, items: &[Item]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out)?;
    writeln!(out, "{BANNER}")?;
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{BANNER}")?;
    writeln!(out, "{HEADER}")?;
    writeln!(out, "{RULE}")?;
    for item in items {
        if item.name == NO_SUCH_ITEM {
            writeln!(out, "{}", item.name)?;
        } else {
            writeln!(out, "{item}")?;
        }
    }
    writeln!(out, "{RULE}")?;
    writeln!(out)?;
    Ok(())
}

/// Render the end-of-day table as a `String`.
///
/// # Examples
///
/// ```rust
/// use gilded_rose::{Item, NO_SUCH_ITEM};
/// use gilded_rose::report::render_report;
///
/// let report = render_report(&[
///     Item::new("Aged Brie", 4, 50),
///     Item::new(NO_SUCH_ITEM, 3, 7),
/// ]);
/// assert!(report.contains("\nAged Brie 4 50\n"));
/// assert!(report.contains("\nNO SUCH ITEM\n"));
/// ```
pub fn render_report(items: &[Item]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_report(&mut buf, items);
    String::from_utf8_lossy(&buf).into_owned()
}

#[derive(Serialize)]
struct ReportRow<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sell_in: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    quality: Option<i32>,
}

impl<'a> From<&'a Item> for ReportRow<'a> {
    fn from(item: &'a Item) -> Self {
        if item.name == NO_SUCH_ITEM {
            Self {
                name: &item.name,
                sell_in: None,
                quality: None,
            }
        } else {
            Self {
                name: &item.name,
                sell_in: Some(item.sell_in),
                quality: Some(item.quality),
            }
        }
    }
}

/// Render the batch as a pretty-printed JSON array.
///
/// Sentinel rows carry only their name.
pub fn render_json(items: &[Item]) -> serde_json::Result<String> {
    let rows: Vec<ReportRow<'_>> = items.iter().map(ReportRow::from).collect();
    serde_json::to_string_pretty(&rows)
}
