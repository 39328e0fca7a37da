//! Error types for inventory ingestion.
//!
//! The rule engine itself never fails. Everything that can go wrong happens
//! while turning raw input into [`Item`](crate::item::Item)s, and is
//! represented by the `InventoryError` enum.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading an inventory batch.
///
/// Every parse variant carries the 1-based line number and the raw record,
/// so a failing batch can be fixed without guessing which line broke it.
///
/// # Examples
///
/// ```rust
/// use gilded_rose::InventoryError;
///
/// let err = InventoryError::MissingFields {
///     line: 3,
///     record: "Aged Brie".to_string(),
/// };
/// assert!(err.to_string().contains("line 3"));
/// ```
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A record had fewer than three whitespace-delimited tokens.
    #[error("Invalid data for item on line {line}: {record:?}")]
    MissingFields { line: usize, record: String },

    /// The trailing token of a record is not an integer.
    #[error("Unable to parse quality on line {line}: {record:?}")]
    InvalidQuality { line: usize, record: String },

    /// The second-to-last token of a record is not an integer.
    #[error("Unable to parse sell-in on line {line}: {record:?}")]
    InvalidSellIn { line: usize, record: String },

    /// The input file could not be read.
    #[error("Unable to read inventory file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InventoryError {
    /// Line number the error refers to, if it came from a record.
    pub fn line(&self) -> Option<usize> {
        match self {
            InventoryError::MissingFields { line, .. }
            | InventoryError::InvalidQuality { line, .. }
            | InventoryError::InvalidSellIn { line, .. } => Some(*line),
            InventoryError::Io { .. } => None,
        }
    }
}
