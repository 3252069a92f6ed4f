//! VList Core - list rendering kernel
//!
//! This crate provides everything a list view needs that does not touch the
//! database:
//! - The `Row` model (one identifier, five text fields)
//! - The `RowSource` seam implemented by the SQLite store
//! - Host view capabilities and headless report lists that drive them
//! - Eager and lazy list adapters
//! - Error and logging facilities shared by every layer

pub mod adapters;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod row_source;
pub mod view;

pub use vlist_core_types as core_types;

// Re-export commonly used types
pub use adapters::{position_to_id, EagerList, LazyListAdapter};
pub use errors::{ExError, ExErrorKind, Result, VListError};
pub use model::{Row, COLUMN_LABELS};
pub use row_source::{MemoryRowSource, RowIter, RowSource};
pub use view::{CellSource, Frame, HostView, ReportList, SelectionCursor, VirtualReportList};
