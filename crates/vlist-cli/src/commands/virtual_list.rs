//! Virtual list
//!
//! Usage: vlist virtual [--first N] [--height H] [--select P]...
//!
//! The list is only told how many rows exist; each visible cell is a point
//! lookup made during the redraw.

use super::{elapsed_ms, print_frame, print_selection, CmdResult, StoreOpts, ViewArgs};
use clap::Args;
use std::time::Instant;
use vlist_core::view::{HostView, SelectionCursor};
use vlist_core::{log_op_end, log_op_error, log_op_start, LazyListAdapter, VirtualReportList};

const OP: &str = "virtual_list";

#[derive(Debug, Args)]
pub struct VirtualArgs {
    #[command(flatten)]
    pub view: ViewArgs,
}

pub fn execute(args: VirtualArgs, store: &StoreOpts) -> CmdResult {
    let started = Instant::now();
    log_op_start!(OP, first = args.view.first, height = args.view.height);

    match run(&args.view, store) {
        Ok(lookups) => {
            log_op_end!(OP, duration_ms = elapsed_ms(started), cells_fetched = lookups);
            Ok(())
        }
        Err(e) => {
            log_op_error!(OP, e.clone(), duration_ms = elapsed_ms(started));
            Err(e.into())
        }
    }
}

fn run(view_args: &ViewArgs, store: &StoreOpts) -> vlist_core::Result<usize> {
    let store = store.open()?;

    let declare_started = Instant::now();
    let adapter = LazyListAdapter::new(&store)?;
    let mut view = VirtualReportList::new(&adapter);
    adapter.install(&mut view);
    println!(
        "declared {} rows in {} ms",
        view.row_count(),
        elapsed_ms(declare_started)
    );

    view.scroll_to(view_args.first);
    view.set_visible_rows(view_args.height);
    for &position in &view_args.select {
        view.select(position)?;
    }

    let frame = view.redraw()?;
    print_frame(view.columns(), &frame);
    println!("cell queries: {}", adapter.lookups());
    print_selection(view.selected());
    Ok(adapter.lookups())
}
