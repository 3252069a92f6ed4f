//! Host view capabilities and headless report lists
//!
//! A host view is the list widget that owns columns, a scroll position and a
//! selection, and decides which rows are visible. Two flavours exist:
//!
//! - [`ReportList`] keeps every cell in its own storage
//! - [`VirtualReportList`] keeps no rows; it is told a row count and asks a
//!   [`CellSource`] for each visible cell on every redraw
//!
//! Neither draws pixels. `redraw()` returns a [`Frame`] holding the text a
//! toolkit would paint.

mod report;
mod virtual_report;

pub use report::ReportList;
pub use virtual_report::VirtualReportList;

use crate::errors::{ExError, ExErrorKind, Result, VListError};
use std::collections::BTreeSet;
use std::ops::Range;

/// Rows visible at once when no height was set
pub const DEFAULT_VISIBLE_ROWS: usize = 20;

/// Column and row-count declarations accepted by every host view
pub trait HostView {
    /// Insert a column header at `index` (appended when past the end)
    fn add_column(&mut self, index: usize, label: &str);

    /// Declare how many rows the view shows
    fn set_row_count(&mut self, count: usize);

    fn row_count(&self) -> usize;

    fn columns(&self) -> &[String];
}

/// Per-cell text provider queried by a virtual host view
pub trait CellSource {
    /// Rows the provider promises to answer for
    fn row_count(&self) -> usize;

    /// Text of exactly one cell.
    ///
    /// # Errors
    ///
    /// Implementations report their own failures; the host view propagates
    /// them out of `redraw()` unchanged.
    fn cell_text(&self, row: usize, column: usize) -> Result<String>;
}

/// Walks the selected row positions of a view in ascending order
pub trait SelectionCursor {
    fn first_selected(&self) -> Option<usize>;

    /// First selected position strictly after `after`
    fn next_selected(&self, after: usize) -> Option<usize>;

    /// Iterator over the current selection, driven by the cursor calls
    fn selected(&self) -> Selected<'_, Self>
    where
        Self: Sized,
    {
        Selected {
            cursor: self,
            next: self.first_selected(),
        }
    }
}

/// Iterator returned by [`SelectionCursor::selected`]
pub struct Selected<'a, C> {
    cursor: &'a C,
    next: Option<usize>,
}

impl<C: SelectionCursor> Iterator for Selected<'_, C> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.next?;
        self.next = self.cursor.next_selected(current);
        Some(current)
    }
}

/// First visible row and number of visible rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub first: usize,
    pub height: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            first: 0,
            height: DEFAULT_VISIBLE_ROWS,
        }
    }
}

impl Viewport {
    /// Visible row positions given the declared row count
    pub fn visible(&self, row_count: usize) -> Range<usize> {
        let start = self.first.min(row_count);
        let end = self.first.saturating_add(self.height).min(row_count);
        start..end
    }
}

/// One painted row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRow {
    pub position: usize,
    pub selected: bool,
    pub cells: Vec<String>,
}

/// Result of one redraw
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    pub rows: Vec<FrameRow>,
    /// `cell_text` calls made while painting
    pub cell_reads: usize,
}

impl Frame {
    /// Cell text at a painted position, if that row was visible
    pub fn cell(&self, position: usize, column: usize) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.position == position)
            .and_then(|r| r.cells.get(column))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, Default)]
struct Header {
    labels: Vec<String>,
}

impl Header {
    fn insert(&mut self, index: usize, label: &str) {
        let at = index.min(self.labels.len());
        self.labels.insert(at, label.to_string());
    }
}

#[derive(Debug, Clone, Default)]
struct Selection {
    positions: BTreeSet<usize>,
}

impl Selection {
    fn select(&mut self, position: usize, row_count: usize) -> Result<()> {
        if position >= row_count {
            return Err(ExError::new(ExErrorKind::OutOfRange)
                .with_op("select")
                .with_position(position)
                .with_message(format!("view has {} rows", row_count)));
        }
        self.positions.insert(position);
        Ok(())
    }

    fn first(&self) -> Option<usize> {
        self.positions.iter().next().copied()
    }

    fn after(&self, after: usize) -> Option<usize> {
        self.positions
            .range(after.saturating_add(1)..)
            .next()
            .copied()
            .filter(|&p| p > after)
    }

    fn contains(&self, position: usize) -> bool {
        self.positions.contains(&position)
    }

    fn truncate(&mut self, row_count: usize) {
        self.positions.retain(|&p| p < row_count);
    }
}

/// Paint the visible rows by asking `source` for every cell.
fn paint(
    source: &dyn CellSource,
    row_count: usize,
    columns: usize,
    viewport: Viewport,
    selection: &Selection,
) -> Result<Frame> {
    let mut frame = Frame::default();
    for position in viewport.visible(row_count) {
        let mut cells = Vec::with_capacity(columns);
        for column in 0..columns {
            frame.cell_reads += 1;
            cells.push(source.cell_text(position, column)?);
        }
        frame.rows.push(FrameRow {
            position,
            selected: selection.contains(position),
            cells,
        });
    }
    Ok(frame)
}

fn out_of_range(position: usize, count: usize) -> ExError {
    VListError::RowOutOfRange { position, count }.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_clamps_to_row_count() {
        let viewport = Viewport {
            first: 8,
            height: 5,
        };
        assert_eq!(viewport.visible(10), 8..10);
        assert_eq!(viewport.visible(3), 3..3);
        assert_eq!(viewport.visible(100), 8..13);
    }

    #[test]
    fn test_viewport_does_not_overflow() {
        let viewport = Viewport {
            first: usize::MAX - 1,
            height: 10,
        };
        assert!(viewport.visible(usize::MAX).len() <= 10);
    }

    #[test]
    fn test_header_insert_appends_past_end() {
        let mut header = Header::default();
        header.insert(5, "b");
        header.insert(0, "a");
        assert_eq!(header.labels, vec!["a", "b"]);
    }

    #[test]
    fn test_selection_walk() {
        let mut selection = Selection::default();
        selection.select(4, 10).unwrap();
        selection.select(1, 10).unwrap();
        assert_eq!(selection.first(), Some(1));
        assert_eq!(selection.after(1), Some(4));
        assert_eq!(selection.after(4), None);
        assert_eq!(selection.after(usize::MAX), None);
    }

    #[test]
    fn test_select_past_end_fails() {
        let mut selection = Selection::default();
        let err = selection.select(3, 3).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::OutOfRange);
    }
}
