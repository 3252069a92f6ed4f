//! Database connection management
//!
//! Provides utilities for opening and configuring SQLite connections

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use std::path::Path;

/// Open a SQLite database at the given path, creating the file if needed
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path.as_ref()).map_err(|e| {
        from_rusqlite(e).with_entity_id(path.as_ref().display().to_string())
    })
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Configure a connection for a single writer and many point reads.
///
/// Returns the journal mode SQLite settled on (`memory` for in-memory
/// databases, `wal` otherwise).
pub fn configure(conn: &Connection) -> Result<String> {
    let mode: String = conn
        .query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))
        .map_err(from_rusqlite)?;

    conn.execute_batch("PRAGMA synchronous = NORMAL;")
        .map_err(from_rusqlite)?;

    tracing::debug!(journal_mode = %mode, "connection configured");
    Ok(mode)
}
