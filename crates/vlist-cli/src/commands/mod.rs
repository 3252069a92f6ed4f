//! Subcommands and the helpers they share

pub mod count;
pub mod get;
pub mod normal;
pub mod virtual_list;

use clap::Args;
use std::path::PathBuf;
use std::time::Instant;
use vlist_core::view::{Frame, DEFAULT_VISIBLE_ROWS};
use vlist_store::config::{DEFAULT_DB_FILE, DEFAULT_SEED_ROWS};
use vlist_store::{RowStore, StoreConfig};

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Where the database lives and how to seed it on first use
#[derive(Debug, Args)]
pub struct StoreOpts {
    /// Database file (created and seeded if it has no table)
    #[arg(long, default_value = DEFAULT_DB_FILE, global = true)]
    pub db: PathBuf,

    /// Rows written when the database is created
    #[arg(long, default_value_t = DEFAULT_SEED_ROWS, global = true)]
    pub seed_rows: usize,

    /// Fixed RNG seed for reproducible seed rows
    #[arg(long, global = true)]
    pub rng_seed: Option<u64>,
}

impl StoreOpts {
    pub fn config(&self) -> StoreConfig {
        StoreConfig::default()
            .with_db_path(&self.db)
            .with_seed_rows(self.seed_rows)
            .with_rng_seed(self.rng_seed)
    }

    pub fn open(&self) -> vlist_core::Result<RowStore> {
        RowStore::open(&self.config())
    }
}

/// Scroll position, viewport height and selection shared by both lists
#[derive(Debug, Args)]
pub struct ViewArgs {
    /// First visible row position
    #[arg(long, default_value_t = 0)]
    pub first: usize,

    /// Visible rows
    #[arg(long, default_value_t = DEFAULT_VISIBLE_ROWS)]
    pub height: usize,

    /// Select a row position (repeatable)
    #[arg(long = "select")]
    pub select: Vec<usize>,
}

pub fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Tab-separated header and painted rows; selected rows are starred
pub fn print_frame(columns: &[String], frame: &Frame) {
    println!("  {}", columns.join("\t"));
    for row in &frame.rows {
        let mark = if row.selected { '*' } else { ' ' };
        println!("{} {}", mark, row.cells.join("\t"));
    }
}

pub fn print_selection(selected: impl IntoIterator<Item = usize>) {
    for position in selected {
        println!("selected: {}", position);
    }
}
