use alloc::vec::Vec;

use crate::math;
use crate::pool::{CellPool, CellSlot};
use crate::{
    Change, DataSource, Rect, RecyclerOptions, ResetOutcome, RowRange, RowWindow,
    ScrollDirection, Size, Transfer,
};

/// A headless windowing engine for fixed-height lists.
///
/// The engine keeps a fixed pool of [`CellSlot`]s for a contiguous window of rows around the
/// scroll position. Scrolling never allocates slots: rows that leave the window are recycled at
/// the opposite edge.
///
/// It holds no UI objects and no reference to the data source; your adapter passes the source to
/// every call that may need row text, and maps [`crate::SlotId`]s onto its own views.
#[derive(Clone, Debug)]
pub struct Recycler {
    options: RecyclerOptions,
    pool: CellPool,
    frame: Size,
    total_row_count: usize,
    content_size: Size,
    // Scroll distance not yet consumed by whole-row shifts, kept in `[0, row_height)`.
    shift: f64,
}

#[derive(Clone, Copy)]
struct RowLayout {
    row_height: f64,
    width: f64,
    total_row_count: usize,
}

impl RowLayout {
    fn contains(&self, row: i64) -> bool {
        row >= 0 && (row as u64) < self.total_row_count as u64
    }

    fn assign(&self, slot: &mut CellSlot, row: i64, source: &dyn DataSource) {
        slot.row = row;
        slot.frame =
            Rect::new(0.0, row as f64 * self.row_height, self.width, self.row_height).integral();
        slot.hidden = !self.contains(row);
        if slot.hidden {
            slot.text.clear();
        } else {
            slot.text = source.text_for_row(row as usize);
        }
    }
}

impl Recycler {
    pub fn new(options: RecyclerOptions) -> Self {
        rdebug!(
            row_height = options.row_height,
            buffer_factor = options.buffer_factor,
            "Recycler::new"
        );
        Self {
            options,
            pool: CellPool::new(),
            frame: Size::ZERO,
            total_row_count: 0,
            content_size: Size::ZERO,
            shift: 0.0,
        }
    }

    pub fn options(&self) -> &RecyclerOptions {
        &self.options
    }

    /// Replaces the options and rebuilds the pool for the current frame.
    pub fn set_options(
        &mut self,
        options: RecyclerOptions,
        source: Option<&dyn DataSource>,
    ) -> ResetOutcome {
        self.options = options;
        self.reset(self.frame, source)
    }

    /// Discards the pool and rebuilds it for `frame`, centered around offset 0.
    ///
    /// Without a data source, or when the frame is too small to hold a single row, the pool is
    /// left empty and the content size is zero.
    pub fn reset(&mut self, frame: Size, source: Option<&dyn DataSource>) -> ResetOutcome {
        self.frame = frame;
        self.shift = 0.0;

        let pool_size = self.options.pool_size_for(frame.height);
        let source = match source {
            Some(source) if pool_size > 0 => source,
            _ => {
                rdebug!(
                    has_source = source.is_some(),
                    frame_height = frame.height,
                    "reset: empty pool"
                );
                self.total_row_count = 0;
                self.content_size = Size::ZERO;
                self.pool.reset(0);
                let outcome = ResetOutcome::default();
                self.notify(Change::Reset(outcome));
                return outcome;
            }
        };

        self.total_row_count = source.total_row_count();
        self.content_size = Size::new(
            frame.width,
            self.total_row_count as f64 * self.options.row_height,
        );
        self.pool.reset(pool_size);

        self.assign_from(-((pool_size / 2) as i64), source);

        rdebug!(
            pool_size,
            total_row_count = self.total_row_count,
            content_height = self.content_size.height,
            "reset"
        );
        let outcome = ResetOutcome {
            pool_size,
            content_size: self.content_size,
        };
        self.notify(Change::Reset(outcome));
        outcome
    }

    /// Empties the pool, as if the data source had been detached.
    pub fn clear(&mut self) -> ResetOutcome {
        self.reset(self.frame, None)
    }

    /// Applies a content offset change reported by the host.
    ///
    /// Deltas smaller than a row are accumulated until they add up to whole rows. A jump further
    /// than the pool can shift incrementally reassigns every slot around `new_offset_y`.
    pub fn apply_offset_delta(
        &mut self,
        new_offset_y: f64,
        old_offset_y: f64,
        source: &dyn DataSource,
    ) -> Transfer {
        if self.pool.is_empty() {
            return Transfer::None;
        }
        if !new_offset_y.is_finite() || !old_offset_y.is_finite() {
            rwarn!(new_offset_y, old_offset_y, "apply_offset_delta: non-finite offset");
            return Transfer::None;
        }

        let row_height = self.options.row_height;
        self.shift += new_offset_y - old_offset_y;
        if !self.shift.is_finite() {
            rwarn!(new_offset_y, old_offset_y, "apply_offset_delta: delta overflowed");
            self.shift = 0.0;
            let start = self.recompute(new_offset_y, source);
            let transfer = Transfer::Recomputed { start };
            self.notify(Change::Transfer(transfer));
            return transfer;
        }

        let mut rows = math::floor(self.shift / row_height);
        self.shift -= rows * row_height;
        // Rounding can leave the residual a hair outside `[0, row_height)`.
        if self.shift >= row_height {
            self.shift -= row_height;
            rows += 1.0;
        } else if self.shift < 0.0 {
            self.shift += row_height;
            rows -= 1.0;
        }
        // Far beyond 2^53 the subtraction above loses the residual entirely.
        if !(0.0..row_height).contains(&self.shift) {
            self.shift = 0.0;
        }
        if rows == 0.0 {
            return Transfer::None;
        }

        let direction = if rows > 0.0 {
            ScrollDirection::Forward
        } else {
            ScrollDirection::Backward
        };
        let count = (if rows > 0.0 { rows } else { -rows }) as usize;
        let pool_size = self.pool.len();

        let transfer = if count > pool_size {
            let start = self.recompute(new_offset_y, source);
            rdebug!(count, pool_size, start, "apply_offset_delta: recomputed window");
            Transfer::Recomputed { start }
        } else {
            let layout = self.layout();
            match direction {
                ScrollDirection::Forward => {
                    let mut row = self.pool.last().map_or(0, |s| s.row);
                    for _ in 0..count {
                        row = row.saturating_add(1);
                        if let Some(slot) = self.pool.rotate_forward() {
                            layout.assign(slot, row, source);
                        }
                    }
                }
                ScrollDirection::Backward => {
                    let mut row = self.pool.first().map_or(0, |s| s.row);
                    for _ in 0..count {
                        row = row.saturating_sub(1);
                        if let Some(slot) = self.pool.rotate_backward() {
                            layout.assign(slot, row, source);
                        }
                    }
                }
            }
            rtrace!(count, ?direction, "apply_offset_delta: shifted");
            Transfer::Shifted { count, direction }
        };

        if !self.pool.is_contiguous() {
            rwarn!(?transfer, "apply_offset_delta: pool rows out of order");
            debug_assert!(
                self.pool.is_contiguous(),
                "pool rows must stay contiguous and ascending ({transfer:?})"
            );
        }
        self.notify(Change::Transfer(transfer));
        transfer
    }

    pub fn pool(&self) -> &CellPool {
        &self.pool
    }

    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    pub fn slots(&self) -> impl ExactSizeIterator<Item = &CellSlot> + DoubleEndedIterator + '_ {
        self.pool.iter()
    }

    pub fn for_each_slot(&self, mut f: impl FnMut(&CellSlot)) {
        for slot in self.pool.iter() {
            f(slot);
        }
    }

    /// Clones the pooled slots into `out` (clears `out` first).
    pub fn collect_slots(&self, out: &mut Vec<CellSlot>) {
        out.clear();
        out.extend(self.pool.iter().cloned());
    }

    pub fn slot_for_row(&self, row: i64) -> Option<&CellSlot> {
        self.pool.slot_for_row(row)
    }

    /// The rows currently backed by slots, or `None` when the pool is empty.
    pub fn active_window(&self) -> Option<RowWindow> {
        let first = self.pool.first()?;
        let last = self.pool.last()?;
        Some(RowWindow {
            start: first.row,
            end: last.row.saturating_add(1),
        })
    }

    /// The window a full recompute at `offset_y` would produce with the current pool.
    pub fn window_for_offset(&self, offset_y: f64) -> Option<RowWindow> {
        if self.pool.is_empty() || !offset_y.is_finite() {
            return None;
        }
        let pool_size = self.pool.len();
        let start = self.window_start(offset_y);
        Some(RowWindow {
            start,
            end: start.saturating_add(pool_size as i64),
        })
    }

    /// The in-bounds part of the active window.
    pub fn visible_rows(&self) -> RowRange {
        self.active_window()
            .map(|w| w.clamp_to(self.total_row_count))
            .unwrap_or_default()
    }

    pub fn frame(&self) -> Size {
        self.frame
    }

    pub fn content_size(&self) -> Size {
        self.content_size
    }

    pub fn total_row_count(&self) -> usize {
        self.total_row_count
    }

    pub fn row_height(&self) -> f64 {
        self.options.row_height
    }

    pub fn accumulated_shift(&self) -> f64 {
        self.shift
    }

    fn window_start(&self, offset_y: f64) -> i64 {
        math::row_at(offset_y, self.options.row_height).saturating_sub((self.pool.len() / 2) as i64)
    }

    // Reassigns every slot around `offset_y`, returning the first row.
    fn recompute(&mut self, offset_y: f64, source: &dyn DataSource) -> i64 {
        let start = self.window_start(offset_y);
        self.assign_from(start, source);
        start
    }

    fn assign_from(&mut self, start: i64, source: &dyn DataSource) {
        let layout = self.layout();
        for (i, slot) in self.pool.iter_mut().enumerate() {
            layout.assign(slot, start.saturating_add(i as i64), source);
        }
    }

    fn layout(&self) -> RowLayout {
        RowLayout {
            row_height: self.options.row_height,
            width: self.frame.width,
            total_row_count: self.total_row_count,
        }
    }

    fn notify(&self, change: Change) {
        if let Some(cb) = &self.options.on_change {
            cb(self, change);
        }
    }
}
