use alloc::sync::Arc;
use alloc::vec::Vec;

use recycler::{
    CellSlot, DataSource, Recycler, RecyclerOptions, ResetOutcome, Size, Transfer, ViewportState,
};

use crate::SourceHandle;

/// Configuration for [`Controller`].
#[derive(Clone, Debug, Default)]
pub struct ControllerOptions {
    pub recycler: RecyclerOptions,
    /// Reported to the host scroll container; fixed for the controller's lifetime.
    pub always_bounce_vertical: bool,
}

impl ControllerOptions {
    pub fn new(recycler: RecyclerOptions) -> Self {
        Self {
            recycler,
            always_bounce_vertical: false,
        }
    }

    pub fn with_always_bounce_vertical(mut self, always_bounce_vertical: bool) -> Self {
        self.always_bounce_vertical = always_bounce_vertical;
        self
    }
}

/// A framework-neutral viewport controller that wraps a [`Recycler`].
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `set_data_source` / `reload_data` when the data changes
/// - `set_frame` when the scroll container is laid out
/// - `set_content_offset` (or `content_offset_changed`) when the container scrolls
///
/// and render the cells from `for_each_cell`, sizing the scrollable region with `content_size`.
#[derive(Clone, Debug)]
pub struct Controller {
    engine: Recycler,
    source: SourceHandle,
    frame: Size,
    offset_y: f64,
    always_bounce_vertical: bool,
}

impl Controller {
    pub fn new(options: ControllerOptions) -> Self {
        Self {
            engine: Recycler::new(options.recycler),
            source: SourceHandle::detached(),
            frame: Size::ZERO,
            offset_y: 0.0,
            always_bounce_vertical: options.always_bounce_vertical,
        }
    }

    pub fn engine(&self) -> &Recycler {
        &self.engine
    }

    pub fn into_engine(self) -> Recycler {
        self.engine
    }

    pub fn always_bounce_vertical(&self) -> bool {
        self.always_bounce_vertical
    }

    /// Attaches (or detaches, with `None`) the data source and rebuilds the pool.
    ///
    /// Only a weak reference is kept; the caller owns the source.
    pub fn set_data_source(&mut self, source: Option<&Arc<dyn DataSource>>) -> ResetOutcome {
        self.source = source.map(SourceHandle::new).unwrap_or_default();
        adebug!(attached = source.is_some(), "set_data_source");
        self.relayout()
    }

    pub fn is_data_source_attached(&self) -> bool {
        self.source.is_attached()
    }

    /// Rebuilds the pool from the current data source, e.g. after its row count changed.
    pub fn reload_data(&mut self) -> ResetOutcome {
        self.relayout()
    }

    /// Applies a new frame size. Returns `None` when the size did not change.
    pub fn set_frame(&mut self, frame: Size) -> Option<ResetOutcome> {
        if self.frame == frame {
            return None;
        }
        self.frame = frame;
        Some(self.relayout())
    }

    pub fn frame(&self) -> Size {
        self.frame
    }

    pub fn content_offset(&self) -> f64 {
        self.offset_y
    }

    /// Call this when the host reports a new content offset.
    pub fn set_content_offset(&mut self, offset_y: f64) -> Transfer {
        let old = self.offset_y;
        self.content_offset_changed(old, offset_y)
    }

    /// Host notification carrying both the previous and the new content offset.
    pub fn content_offset_changed(&mut self, old_offset_y: f64, new_offset_y: f64) -> Transfer {
        self.offset_y = new_offset_y;
        let Some(source) = self.source.upgrade() else {
            if !self.engine.pool().is_empty() {
                awarn!("content_offset_changed: data source detached, clearing pool");
                self.engine.clear();
            }
            return Transfer::None;
        };
        self.engine
            .apply_offset_delta(new_offset_y, old_offset_y, &*source)
    }

    /// Size of the scrollable region: frame width by `row_count * row_height`.
    ///
    /// Zero once the data source has been dropped, even before the next notification clears the
    /// pool.
    pub fn content_size(&self) -> Size {
        self.live_engine()
            .map_or(Size::ZERO, |engine| engine.content_size())
    }

    pub fn viewport_state(&self) -> ViewportState {
        ViewportState {
            offset_y: self.offset_y,
            frame: self.frame,
            total_row_count: self.live_engine().map_or(0, |engine| engine.total_row_count()),
            content_size: self.content_size(),
        }
    }

    /// Visits every pooled cell. Nothing is visited once the data source has been dropped.
    pub fn for_each_cell(&self, f: impl FnMut(&CellSlot)) {
        if let Some(engine) = self.live_engine() {
            engine.for_each_slot(f);
        }
    }

    /// Collects the cells into `out` (clears `out` first).
    pub fn collect_cells(&self, out: &mut Vec<CellSlot>) {
        match self.live_engine() {
            Some(engine) => engine.collect_slots(out),
            None => out.clear(),
        }
    }

    /// Iterates over the cells the host should currently show.
    pub fn visible_cells(&self) -> impl Iterator<Item = &CellSlot> + '_ {
        self.live_engine()
            .into_iter()
            .flat_map(|engine| engine.slots())
            .filter(|s| !s.is_hidden())
    }

    // The engine still holds the last pool until a notification clears it.
    fn live_engine(&self) -> Option<&Recycler> {
        self.source.is_attached().then_some(&self.engine)
    }

    // A reset centers the window at offset 0; replaying the current offset re-aligns it.
    fn relayout(&mut self) -> ResetOutcome {
        let source = self.source.upgrade();
        let outcome = self.engine.reset(self.frame, source.as_deref());
        if let Some(source) = &source {
            if self.offset_y != 0.0 {
                self.engine
                    .apply_offset_delta(self.offset_y, 0.0, &**source);
            }
        }
        outcome
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(ControllerOptions::default())
    }
}
