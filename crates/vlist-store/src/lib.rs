//! VList Store - SQLite row store
//!
//! Provides:
//! - Connection helpers
//! - The embedded single-table schema
//! - `RowStore`, the SQLite implementation of `vlist_core::RowSource`
//! - Atomic seeding with pseudo-random rows

pub mod config;
pub mod db;
pub mod errors;
pub mod row_store;
pub mod schema;
pub mod seed;

// Re-export key types
pub use config::StoreConfig;
pub use errors::Result;
pub use row_store::RowStore;
pub use seed::RandomWords;
