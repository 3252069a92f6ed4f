//! Report list without row storage

use super::{paint, CellSource, Frame, Header, HostView, Selection, SelectionCursor, Viewport};
use crate::errors::Result;

/// A report-style list that stores no rows.
///
/// It shows exactly the count declared through
/// [`HostView::set_row_count`] and asks its [`CellSource`] for every visible
/// cell on each redraw. A count larger than what the source can answer
/// surfaces as the source's error from `redraw()`.
pub struct VirtualReportList<'a> {
    source: &'a dyn CellSource,
    header: Header,
    item_count: usize,
    selection: Selection,
    viewport: Viewport,
}

impl<'a> VirtualReportList<'a> {
    /// A view with no columns and a row count of zero
    pub fn new(source: &'a dyn CellSource) -> Self {
        Self {
            source,
            header: Header::default(),
            item_count: 0,
            selection: Selection::default(),
            viewport: Viewport::default(),
        }
    }

    /// # Errors
    ///
    /// `OutOfRange` when `position` is at or past the declared count.
    pub fn select(&mut self, position: usize) -> Result<()> {
        self.selection.select(position, self.item_count)
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

    /// Query the source once per visible cell.
    ///
    /// # Errors
    ///
    /// The first error returned by the cell source.
    pub fn redraw(&self) -> Result<Frame> {
        let frame = paint(
            self.source,
            self.item_count,
            self.header.labels.len(),
            self.viewport,
            &self.selection,
        )?;
        tracing::debug!(
            rows = frame.rows.len(),
            cell_reads = frame.cell_reads,
            "virtual redraw"
        );
        Ok(frame)
    }
}

impl HostView for VirtualReportList<'_> {
    fn add_column(&mut self, index: usize, label: &str) {
        self.header.insert(index, label);
    }

    fn set_row_count(&mut self, count: usize) {
        self.item_count = count;
        self.selection.truncate(count);
    }

    fn row_count(&self) -> usize {
        self.item_count
    }

    fn columns(&self) -> &[String] {
        &self.header.labels
    }
}

impl SelectionCursor for VirtualReportList<'_> {
    fn first_selected(&self) -> Option<usize> {
        self.selection.first()
    }

    fn next_selected(&self, after: usize) -> Option<usize> {
        self.selection.after(after)
    }
}
