//! Error handling for vlist-store
//!
//! Wraps vlist-core ExError with store-specific helpers

use vlist_core::errors::{ExError, ExErrorKind, VListError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create a not-found error for a row identifier
pub fn row_not_found(id: i64) -> ExError {
    VListError::RowNotFound { id }.into()
}

/// Create a seeding error; the transaction has been rolled back
pub fn seed_aborted(inserted: usize, cause: &ExError) -> ExError {
    ExError::from(VListError::SeedAborted {
        inserted,
        reason: cause.to_string(),
    })
    .with_source(cause.clone())
}

/// Create an error for a value SQLite cannot represent
pub fn out_of_range(op: &str, value: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::Internal)
        .with_op(op.to_string())
        .with_message(format!("value out of range: {}", value))
}
