//! Lazy (virtual) list adapter

use super::declare_columns;
use crate::errors::{Result, VListError};
use crate::model::Row;
use crate::row_source::RowSource;
use crate::view::{CellSource, HostView};
use std::cell::Cell;

/// Store identifier for a zero-based row position.
///
/// Identifiers start at 1, so position `p` is identifier `p + 1`.
///
/// # Errors
///
/// `OutOfRange` if the position does not fit an `i64` identifier.
pub fn position_to_id(position: usize) -> Result<i64> {
    i64::try_from(position)
        .ok()
        .and_then(|p| p.checked_add(1))
        .ok_or_else(|| VListError::PositionOverflow { position }.into())
}

/// Binds a row source to a virtual host view without holding any rows.
///
/// The declared count is the adapter's promise to the view: positions below
/// it are answered by a point lookup, positions at or past it are refused
/// without touching the source.
pub struct LazyListAdapter<'s, S: ?Sized> {
    source: &'s S,
    row_count: Cell<usize>,
    lookups: Cell<usize>,
}

impl<'s, S: RowSource + ?Sized> LazyListAdapter<'s, S> {
    /// Read the row count once from `source`.
    ///
    /// # Errors
    ///
    /// Propagates the source's count failure.
    pub fn new(source: &'s S) -> Result<Self> {
        let row_count = source.count()?;
        tracing::debug!(row_count, "lazy adapter created");
        Ok(Self {
            source,
            row_count: Cell::new(row_count),
            lookups: Cell::new(0),
        })
    }

    /// Declare the column headers and the row count on `view`
    pub fn install(&self, view: &mut dyn HostView) {
        declare_columns(view);
        view.set_row_count(self.row_count.get());
    }

    /// Re-read the count from the source and declare it again.
    ///
    /// Call whenever the underlying table changed size.
    ///
    /// # Errors
    ///
    /// Propagates the source's count failure; the old count stays in force.
    pub fn refresh(&self, view: &mut dyn HostView) -> Result<usize> {
        let row_count = self.source.count()?;
        self.row_count.set(row_count);
        view.set_row_count(row_count);
        Ok(row_count)
    }

    /// The declared row count
    pub fn row_count(&self) -> usize {
        self.row_count.get()
    }

    /// Point lookups issued so far
    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }

    /// Text of one cell.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` when `row >= row_count()` (host contract violation)
    /// - `InvalidInput` when `column >= Row::COLUMNS`
    /// - the source's `NotFound` when the translated identifier is missing
    pub fn cell_text(&self, row: usize, column: usize) -> Result<String> {
        let count = self.row_count.get();
        if row >= count {
            return Err(VListError::RowOutOfRange {
                position: row,
                count,
            }
            .into());
        }
        if column >= Row::COLUMNS {
            return Err(VListError::ColumnOutOfRange {
                column,
                columns: Row::COLUMNS,
            }
            .into());
        }

        let id = position_to_id(row)?;
        self.lookups.set(self.lookups.get() + 1);
        self.source
            .get(id)
            .map_err(|e| e.with_position(row))?
            .cell_text(column)
    }
}

impl<S: RowSource + ?Sized> CellSource for LazyListAdapter<'_, S> {
    fn row_count(&self) -> usize {
        LazyListAdapter::row_count(self)
    }

    fn cell_text(&self, row: usize, column: usize) -> Result<String> {
        LazyListAdapter::cell_text(self, row, column)
    }
}
