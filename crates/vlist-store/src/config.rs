//! Store configuration
//!
//! There is no configuration file; the CLI maps its flags onto
//! [`StoreConfig`] and everything else takes the defaults below.

use std::path::PathBuf;

/// Database file, relative to the working directory
pub const DEFAULT_DB_FILE: &str = "test.sqlite";

/// Rows written when the table has to be created
pub const DEFAULT_SEED_ROWS: usize = 100_000;

/// Rows fetched per query while iterating the whole table
pub const DEFAULT_PAGE_SIZE: usize = 512;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub db_path: PathBuf,
    pub seed_rows: usize,
    /// Fixed RNG seed for reproducible databases; entropy when `None`
    pub rng_seed: Option<u64>,
    pub page_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE),
            seed_rows: DEFAULT_SEED_ROWS,
            rng_seed: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl StoreConfig {
    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = path.into();
        self
    }

    pub fn with_seed_rows(mut self, rows: usize) -> Self {
        self.seed_rows = rows;
        self
    }

    pub fn with_rng_seed(mut self, seed: Option<u64>) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Zero is treated as one
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}
