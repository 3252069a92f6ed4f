//! Report list that owns its cells

use super::{
    out_of_range, paint, CellSource, Frame, Header, HostView, Selection, SelectionCursor,
    Viewport,
};
use crate::errors::{ExError, ExErrorKind, Result};

/// A report-style list holding every cell in its own storage
#[derive(Debug, Clone, Default)]
pub struct ReportList {
    header: Header,
    items: Vec<Vec<String>>,
    selection: Selection,
    viewport: Viewport,
}

impl ReportList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item whose first column reads `text`.
    ///
    /// `position` past the end appends. Returns the index the item landed
    /// at. Selected positions at or after it shift down by one.
    pub fn insert_item(&mut self, position: usize, text: impl Into<String>) -> usize {
        let index = position.min(self.items.len());
        let mut cells = vec![String::new(); self.header.labels.len().max(1)];
        cells[0] = text.into();
        self.items.insert(index, cells);

        let shifted: Vec<usize> = self
            .selection
            .positions
            .iter()
            .map(|&p| if p >= index { p + 1 } else { p })
            .collect();
        self.selection.positions = shifted.into_iter().collect();
        index
    }

    /// Set the text of one cell of an existing item.
    ///
    /// # Errors
    ///
    /// `OutOfRange` for an unknown item, `InvalidInput` for an undeclared
    /// column.
    pub fn set_item(&mut self, index: usize, column: usize, text: impl Into<String>) -> Result<()> {
        let count = self.items.len();
        let columns = self.header.labels.len();
        let row = self
            .items
            .get_mut(index)
            .ok_or_else(|| out_of_range(index, count))?;
        if column >= columns {
            return Err(ExError::new(ExErrorKind::InvalidInput)
                .with_op("set_item")
                .with_message(format!("column {} not declared ({} columns)", column, columns)));
        }
        if row.len() < columns {
            row.resize(columns, String::new());
        }
        row[column] = text.into();
        Ok(())
    }

    /// Stored text of one cell
    pub fn item_text(&self, index: usize, column: usize) -> Option<&str> {
        self.items
            .get(index)
            .and_then(|row| row.get(column))
            .map(String::as_str)
    }

    /// # Errors
    ///
    /// `OutOfRange` when `position` is not an item.
    pub fn select(&mut self, position: usize) -> Result<()> {
        self.selection.select(position, self.items.len())
    }

    pub fn deselect(&mut self, position: usize) {
        self.selection.positions.remove(&position);
    }

    pub fn clear_selection(&mut self) {
        self.selection.positions.clear();
    }

    pub fn scroll_to(&mut self, first: usize) {
        self.viewport.first = first;
    }

    pub fn set_visible_rows(&mut self, height: usize) {
        self.viewport.height = height;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Paint the visible rows from item storage.
    ///
    /// # Errors
    ///
    /// Never fails for a consistent list; the signature matches
    /// [`VirtualReportList::redraw`](super::VirtualReportList::redraw).
    pub fn redraw(&self) -> Result<Frame> {
        paint(
            self,
            self.items.len(),
            self.header.labels.len(),
            self.viewport,
            &self.selection,
        )
    }
}

impl HostView for ReportList {
    fn add_column(&mut self, index: usize, label: &str) {
        let at = index.min(self.header.labels.len());
        self.header.insert(index, label);
        for row in &mut self.items {
            if at < row.len() {
                row.insert(at, String::new());
            } else {
                row.resize(at + 1, String::new());
            }
        }
    }

    /// Only a capacity hint: the row count of an owning list is its items.
    fn set_row_count(&mut self, count: usize) {
        self.items.reserve(count.saturating_sub(self.items.len()));
    }

    fn row_count(&self) -> usize {
        self.items.len()
    }

    fn columns(&self) -> &[String] {
        &self.header.labels
    }
}

impl CellSource for ReportList {
    fn row_count(&self) -> usize {
        self.items.len()
    }

    fn cell_text(&self, row: usize, column: usize) -> Result<String> {
        self.item_text(row, column)
            .map(str::to_string)
            .ok_or_else(|| out_of_range(row, self.items.len()))
    }
}

impl SelectionCursor for ReportList {
    fn first_selected(&self) -> Option<usize> {
        self.selection.first()
    }

    fn next_selected(&self, after: usize) -> Option<usize> {
        self.selection.after(after)
    }
}
