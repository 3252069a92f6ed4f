// Integration tests: the eager and lazy lists must paint the same cells

mod common;

use common::lettered_source;
use proptest::prelude::*;
use vlist_core::model::TEXT_FIELDS;
use vlist_core::view::{HostView, SelectionCursor};
use vlist_core::{EagerList, LazyListAdapter, MemoryRowSource, Row, VirtualReportList};

#[test]
fn test_every_cell_matches() {
    let source = lettered_source(25);
    let eager = EagerList::build(&source).unwrap();
    let lazy = LazyListAdapter::new(&source).unwrap();

    for position in 0..lazy.row_count() {
        for column in 0..Row::COLUMNS {
            assert_eq!(
                Some(lazy.cell_text(position, column).unwrap().as_str()),
                eager.view().item_text(position, column),
                "cell ({}, {})",
                position,
                column
            );
        }
    }
}

#[test]
fn test_frames_match_for_same_viewport() {
    let source = lettered_source(40);
    let mut eager = EagerList::build(&source).unwrap();
    let lazy = LazyListAdapter::new(&source).unwrap();
    let mut view = VirtualReportList::new(&lazy);
    lazy.install(&mut view);

    eager.view_mut().scroll_to(30);
    eager.view_mut().set_visible_rows(15);
    eager.view_mut().select(33).unwrap();
    view.scroll_to(30);
    view.set_visible_rows(15);
    view.select(33).unwrap();

    let eager_frame = eager.view().redraw().unwrap();
    let lazy_frame = view.redraw().unwrap();

    assert_eq!(eager_frame.rows, lazy_frame.rows);
    assert_eq!(lazy_frame.rows.len(), 10);
    assert_eq!(eager.selected_positions(), view.selected().collect::<Vec<_>>());
}

#[test]
fn test_both_declare_same_headers() {
    let source = lettered_source(1);
    let eager = EagerList::build(&source).unwrap();
    let lazy = LazyListAdapter::new(&source).unwrap();
    let mut view = VirtualReportList::new(&lazy);
    lazy.install(&mut view);

    assert_eq!(eager.view().columns(), view.columns());
}

fn arb_fields() -> impl Strategy<Value = [String; TEXT_FIELDS]> {
    proptest::array::uniform5("[a-zA-Z]{0,10}")
}

proptest! {
    #[test]
    fn prop_lazy_equals_eager(rows in proptest::collection::vec(arb_fields(), 0..40)) {
        let source = MemoryRowSource::from_fields(rows);
        let eager = EagerList::build(&source).unwrap();
        let lazy = LazyListAdapter::new(&source).unwrap();

        prop_assert_eq!(eager.loaded(), lazy.row_count());
        for position in 0..lazy.row_count() {
            for column in 0..Row::COLUMNS {
                let text = lazy.cell_text(position, column).unwrap();
                prop_assert_eq!(Some(text.as_str()), eager.view().item_text(position, column));
            }
        }
    }
}
