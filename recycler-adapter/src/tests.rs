use crate::*;

use std::cell::Cell;
use std::format;
use std::string::String;
use std::sync::Arc;

use recycler::{DataSource, RecyclerOptions, RowWindow, ScrollDirection, Size, Transfer};

struct Rows {
    count: Cell<usize>,
}

impl Rows {
    fn new(count: usize) -> Arc<Self> {
        Arc::new(Self {
            count: Cell::new(count),
        })
    }
}

impl DataSource for Rows {
    fn total_row_count(&self) -> usize {
        self.count.get()
    }

    fn text_for_row(&self, row: usize) -> String {
        format!("row {row}")
    }
}

const FRAME: Size = Size {
    width: 320.0,
    height: 400.0,
};

fn attached(count: usize) -> (Controller, Arc<dyn DataSource>) {
    let source: Arc<dyn DataSource> = Rows::new(count);
    let mut c = Controller::default();
    c.set_frame(FRAME);
    c.set_data_source(Some(&source));
    (c, source)
}

#[test]
fn attaching_a_source_lays_out_the_pool() {
    let (c, _source) = attached(1000);

    assert!(!c.always_bounce_vertical());
    assert!(c.is_data_source_attached());
    assert_eq!(c.content_size(), Size::new(320.0, 40_000.0));
    assert_eq!(c.engine().pool_size(), 21);
    assert_eq!(c.visible_cells().count(), 11);

    let state = c.viewport_state();
    assert_eq!(state.offset_y, 0.0);
    assert_eq!(state.frame, FRAME);
    assert_eq!(state.total_row_count, 1000);
    assert_eq!(state.content_size.height, 40_000.0);
}

#[test]
fn without_a_source_everything_is_empty() {
    let mut c = Controller::default();
    assert_eq!(c.set_frame(FRAME).map(|o| o.pool_size), Some(0));
    assert_eq!(c.content_size(), Size::ZERO);
    assert_eq!(c.set_content_offset(4000.0), Transfer::None);
    assert_eq!(c.content_offset(), 4000.0);

    let mut count = 0;
    c.for_each_cell(|_| count += 1);
    assert_eq!(count, 0);
}

#[test]
fn unchanged_frame_does_not_reset() {
    let (mut c, _source) = attached(1000);
    let generation = c.engine().pool().generation();

    assert_eq!(c.set_frame(FRAME), None);
    assert_eq!(c.engine().pool().generation(), generation);

    let outcome = c.set_frame(Size::new(320.0, 800.0)).unwrap();
    assert_eq!(outcome.pool_size, 41);
    assert_eq!(c.engine().pool().generation(), generation + 1);
}

#[test]
fn offsets_are_tracked_between_notifications() {
    let (mut c, _source) = attached(1000);

    assert_eq!(c.set_content_offset(35.0), Transfer::None);
    assert_eq!(
        c.set_content_offset(75.0),
        Transfer::Shifted {
            count: 1,
            direction: ScrollDirection::Forward
        }
    );
    assert_eq!(
        c.content_offset_changed(75.0, 10_075.0),
        Transfer::Recomputed { start: 241 }
    );
    assert_eq!(c.content_offset(), 10_075.0);
    assert_eq!(
        c.engine().active_window(),
        c.engine().window_for_offset(10_075.0)
    );
}

#[test]
fn relayout_keeps_the_window_at_the_current_offset() {
    let (mut c, _source) = attached(1000);
    c.set_content_offset(2010.0);

    c.set_frame(Size::new(320.0, 600.0));
    assert_eq!(c.engine().pool_size(), 31);
    assert_eq!(
        c.engine().active_window(),
        Some(RowWindow { start: 35, end: 66 })
    );
    assert_eq!(c.engine().accumulated_shift(), 10.0);
}

#[test]
fn reload_picks_up_a_new_row_count() {
    let rows = Rows::new(5);
    let source: Arc<dyn DataSource> = rows.clone();
    let mut c = Controller::default();
    c.set_frame(FRAME);
    c.set_data_source(Some(&source));
    assert_eq!(c.visible_cells().count(), 5);

    rows.count.set(500);
    let outcome = c.reload_data();
    assert_eq!(outcome.content_size.height, 20_000.0);
    assert_eq!(c.visible_cells().count(), 11);
}

#[test]
fn dropped_source_is_treated_as_detached() {
    let (mut c, source) = attached(1000);
    assert!(!c.engine().pool().is_empty());

    drop(source);
    assert!(!c.is_data_source_attached());
    assert_eq!(c.set_content_offset(400.0), Transfer::None);
    assert!(c.engine().pool().is_empty());
    assert_eq!(c.content_size(), Size::ZERO);
}

#[test]
fn replacing_the_source_resets_the_pool() {
    let (mut c, _first) = attached(1000);
    let generation = c.engine().pool().generation();

    let second: Arc<dyn DataSource> = Arc::new(std::vec!["only"]);
    let outcome = c.set_data_source(Some(&second));
    assert_eq!(outcome.content_size.height, 40.0);
    assert_eq!(c.engine().pool().generation(), generation + 1);

    let texts: std::vec::Vec<&str> = c.visible_cells().map(|s| s.text()).collect();
    assert_eq!(texts, ["only"]);

    let outcome = c.set_data_source(None);
    assert_eq!(outcome.pool_size, 0);
    assert!(!c.is_data_source_attached());
}

#[test]
fn bounce_is_configuration() {
    let c = Controller::new(
        ControllerOptions::new(RecyclerOptions::default()).with_always_bounce_vertical(true),
    );
    assert!(c.always_bounce_vertical());
}

#[test]
fn source_handles_compare_by_allocation() {
    let a: Arc<dyn DataSource> = Rows::new(1);
    let b: Arc<dyn DataSource> = Rows::new(1);
    assert!(SourceHandle::new(&a).ptr_eq(&SourceHandle::new(&a)));
    assert!(!SourceHandle::new(&a).ptr_eq(&SourceHandle::new(&b)));
    assert!(SourceHandle::detached().ptr_eq(&SourceHandle::default()));
    assert!(SourceHandle::detached().upgrade().is_none());
}

#[test]
fn dropped_source_hides_cells_before_the_next_notification() {
    let (c, source) = attached(1000);
    drop(source);

    assert!(!c.engine().pool().is_empty());
    assert_eq!(c.content_size(), Size::ZERO);
    assert_eq!(c.viewport_state().total_row_count, 0);
    assert_eq!(c.visible_cells().count(), 0);

    let mut visited = 0;
    c.for_each_cell(|_| visited += 1);
    assert_eq!(visited, 0);

    let mut out = std::vec::Vec::new();
    c.collect_cells(&mut out);
    assert!(out.is_empty());
}
