//! Eager ("normal") list
//!
//! Usage: vlist normal [--first N] [--height H] [--select P]...
//!
//! Every row is copied into the list before anything is shown.

use super::{elapsed_ms, print_frame, print_selection, CmdResult, StoreOpts, ViewArgs};
use clap::Args;
use std::time::Instant;
use vlist_core::view::HostView;
use vlist_core::{log_op_end, log_op_error, log_op_start, EagerList};

const OP: &str = "normal_list";

#[derive(Debug, Args)]
pub struct NormalArgs {
    #[command(flatten)]
    pub view: ViewArgs,
}

pub fn execute(args: NormalArgs, store: &StoreOpts) -> CmdResult {
    let started = Instant::now();
    log_op_start!(OP, first = args.view.first, height = args.view.height);

    match run(&args.view, store) {
        Ok(loaded) => {
            log_op_end!(OP, duration_ms = elapsed_ms(started), row_count = loaded);
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

    let load_started = Instant::now();
    let mut list = EagerList::build(&store)?;
    println!(
        "loaded {} rows in {} ms",
        list.loaded(),
        elapsed_ms(load_started)
    );

    let view = list.view_mut();
    view.scroll_to(view_args.first);
    view.set_visible_rows(view_args.height);
    for &position in &view_args.select {
        view.select(position)?;
    }

    let frame = list.view().redraw()?;
    print_frame(list.view().columns(), &frame);
    print_selection(list.selected_positions());
    Ok(list.loaded())
}
