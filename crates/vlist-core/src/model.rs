//! Row model
//!
//! A row is one integer identifier followed by five text fields. Cells are
//! addressed by column index: column 0 is the identifier, columns 1..=5 are
//! the text fields.

use crate::errors::{Result, VListError};
use serde::{Deserialize, Serialize};

/// Number of text fields in a row
pub const TEXT_FIELDS: usize = 5;

/// Column headers shown by every list view
pub const COLUMN_LABELS: [&str; Row::COLUMNS] = [
    "field 0", "field 1", "field 2", "field 3", "field 4", "field 5",
];

/// One row of the `test` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub id: i64,
    pub fields: [String; TEXT_FIELDS],
}

impl Row {
    /// Identifier column plus the text fields
    pub const COLUMNS: usize = TEXT_FIELDS + 1;

    pub fn new(id: i64, fields: [String; TEXT_FIELDS]) -> Self {
        Self { id, fields }
    }

    /// Text of a single cell.
    ///
    /// # Errors
    ///
    /// `ColumnOutOfRange` when `column >= Row::COLUMNS`.
    pub fn cell_text(&self, column: usize) -> Result<String> {
        match column {
            0 => Ok(self.id.to_string()),
            c if c < Self::COLUMNS => Ok(self.fields[c - 1].clone()),
            c => Err(VListError::ColumnOutOfRange {
                column: c,
                columns: Self::COLUMNS,
            }
            .into()),
        }
    }

    /// Every cell of the row as text, in column order
    pub fn cells(&self) -> Vec<String> {
        std::iter::once(self.id.to_string())
            .chain(self.fields.iter().cloned())
            .collect()
    }
}
