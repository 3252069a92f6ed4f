//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Row addressing
pub const FIELD_ROW_ID: &str = "row_id";
pub const FIELD_ROW_POSITION: &str = "row_position";
pub const FIELD_COLUMN: &str = "column";

// Collection sizes
pub const FIELD_ROW_COUNT: &str = "row_count";
pub const FIELD_CELLS_FETCHED: &str = "cells_fetched";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
