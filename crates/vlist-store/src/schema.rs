//! Embedded schema
//!
//! The single table is defined in SQL embedded at compile time using
//! include_str!

/// Name of the one table the demo reads
pub const TABLE: &str = "test";

/// Schema statement creating [`TABLE`]
pub const CREATE_TABLE_SQL: &str = include_str!("../sql/001_test_table.sql");

/// Point lookup by identifier
pub(crate) const SELECT_BY_ID: &str = "SELECT f0, f1, f2, f3, f4, f5 FROM test WHERE f0 = ?1";

/// Next page in identifier order
pub(crate) const SELECT_PAGE: &str =
    "SELECT f0, f1, f2, f3, f4, f5 FROM test WHERE f0 > ?1 ORDER BY f0 LIMIT ?2";

pub(crate) const COUNT_ROWS: &str = "SELECT count(f0) FROM test";

pub(crate) const INSERT_ROW: &str =
    "INSERT INTO test (f1, f2, f3, f4, f5) VALUES (?1, ?2, ?3, ?4, ?5)";

pub(crate) const TABLE_EXISTS: &str =
    "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1";
