//! Point lookup
//!
//! Usage: vlist get <ID> [--json]

use super::{elapsed_ms, CmdResult, StoreOpts};
use clap::Args;
use std::time::Instant;
use vlist_core::{log_op_end, log_op_error, log_op_start, RowSource};

const OP: &str = "get_row";

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Row identifier (the first row is 1)
    pub id: i64,

    /// Print the row as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: GetArgs, store: &StoreOpts) -> CmdResult {
    let started = Instant::now();
    log_op_start!(OP, row_id = args.id);

    let row = match store.open().and_then(|s| s.get(args.id)) {
        Ok(row) => row,
        Err(e) => {
            log_op_error!(OP, e.clone(), duration_ms = elapsed_ms(started), row_id = args.id);
            return Err(e.into());
        }
    };
    log_op_end!(OP, duration_ms = elapsed_ms(started), row_id = args.id);

    if args.json {
        println!("{}", serde_json::to_string(&row)?);
    } else {
        println!("{}", row.cells().join("\t"));
    }
    Ok(())
}
