//! Row count
//!
//! Usage: vlist count

use super::{elapsed_ms, CmdResult, StoreOpts};
use std::time::Instant;
use vlist_core::{log_op_end, log_op_error, log_op_start, RowSource};

const OP: &str = "count";

pub fn execute(store: &StoreOpts) -> CmdResult {
    let started = Instant::now();
    log_op_start!(OP);

    match store.open().and_then(|s| s.count()) {
        Ok(count) => {
            log_op_end!(OP, duration_ms = elapsed_ms(started), row_count = count);
            println!("{}", count);
            Ok(())
        }
        Err(e) => {
            log_op_error!(OP, e.clone(), duration_ms = elapsed_ms(started));
            Err(e.into())
        }
    }
}
