//! List adapters binding a row source to a host view
//!
//! - [`EagerList`] copies every row into a [`ReportList`](crate::view::ReportList)
//!   before the first paint and never touches the source again
//! - [`LazyListAdapter`] declares a row count and answers one cell per call,
//!   doing a fresh point lookup each time

mod eager;
mod lazy;

pub use eager::EagerList;
pub use lazy::{position_to_id, LazyListAdapter};

use crate::model::COLUMN_LABELS;
use crate::view::HostView;

/// Declare the standard column headers on a view that has none yet
fn declare_columns(view: &mut dyn HostView) {
    if !view.columns().is_empty() {
        return;
    }
    for (index, label) in COLUMN_LABELS.iter().enumerate() {
        view.add_column(index, label);
    }
}
