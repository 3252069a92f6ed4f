//! Eager (normal) list adapter

use super::declare_columns;
use crate::errors::Result;
use crate::model::Row;
use crate::row_source::RowSource;
use crate::view::{HostView, ReportList, SelectionCursor};

/// A report list loaded with every row of a source
#[derive(Debug, Clone)]
pub struct EagerList {
    view: ReportList,
    loaded: usize,
}

impl EagerList {
    /// Build a fresh view holding every row of `source`.
    ///
    /// # Errors
    ///
    /// The first error produced while iterating the source.
    pub fn build<S: RowSource + ?Sized>(source: &S) -> Result<Self> {
        let mut view = ReportList::new();
        let loaded = Self::populate(source, &mut view)?;
        Ok(Self { view, loaded })
    }

    /// Append every row of `source` to `view`, one item per row and one
    /// entry per column. Returns the number of rows appended.
    ///
    /// # Errors
    ///
    /// The first error produced while iterating the source. Rows appended
    /// before it stay in the view.
    pub fn populate<S: RowSource + ?Sized>(source: &S, view: &mut ReportList) -> Result<usize> {
        declare_columns(view);

        let mut loaded = 0;
        for row in source.iterate() {
            let row = row?;
            let index = view.insert_item(usize::MAX, row.id.to_string());
            for column in 1..Row::COLUMNS {
                view.set_item(index, column, row.cell_text(column)?)?;
            }
            loaded += 1;
        }

        tracing::debug!(loaded, "eager list populated");
        Ok(loaded)
    }

    /// Rows copied into the view
    pub fn loaded(&self) -> usize {
        self.loaded
    }

    pub fn view(&self) -> &ReportList {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ReportList {
        &mut self.view
    }

    pub fn into_view(self) -> ReportList {
        self.view
    }

    /// Selected positions, walked through the view's selection cursor
    pub fn selected_positions(&self) -> Vec<usize> {
        self.view.selected().collect()
    }

    /// Column count as declared on the view
    pub fn columns(&self) -> usize {
        self.view.columns().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row_source::MemoryRowSource;

    #[test]
    fn test_empty_source_builds_empty_view() {
        let source = MemoryRowSource::new();
        let list = EagerList::build(&source).unwrap();
        assert_eq!(list.loaded(), 0);
        assert_eq!(list.columns(), Row::COLUMNS);
        assert!(list.view().redraw().unwrap().rows.is_empty());
    }

    #[test]
    fn test_every_row_is_copied() {
        let source = MemoryRowSource::from_fields(
            (0..4).map(|r| std::array::from_fn(|f| format!("{}-{}", r, f))),
        );
        let list = EagerList::build(&source).unwrap();
        assert_eq!(list.loaded(), 4);
        assert_eq!(HostView::row_count(list.view()), 4);
        assert_eq!(list.view().item_text(3, 0), Some("4"));
        assert_eq!(list.view().item_text(3, 5), Some("3-4"));
    }

    #[test]
    fn test_selection_is_read_through_cursor() {
        let source = MemoryRowSource::from_fields(
            (0..5).map(|r| std::array::from_fn(|f| format!("{}-{}", r, f))),
        );
        let mut list = EagerList::build(&source).unwrap();
        list.view_mut().select(3).unwrap();
        list.view_mut().select(0).unwrap();
        assert_eq!(list.selected_positions(), vec![0, 3]);
    }
}
