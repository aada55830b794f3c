use crate::math;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    /// Content offset grew (scrolling down the list).
    Forward,
    /// Content offset shrank (scrolling up the list).
    Backward,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Returns the smallest rect with integral coordinates that contains `self`.
    ///
    /// The origin is rounded down and the far edges are rounded up.
    pub fn integral(&self) -> Self {
        let x = math::floor(self.x);
        let y = math::floor(self.y);
        Self {
            x,
            y,
            width: math::ceil(self.max_x()) - x,
            height: math::ceil(self.max_y()) - y,
        }
    }
}

/// A contiguous range of logical row indices backed by pooled slots.
///
/// Indices may be negative or past the row count; such rows are hidden.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowWindow {
    pub start: i64,
    pub end: i64, // exclusive
}

impl RowWindow {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, row: i64) -> bool {
        row >= self.start && row < self.end
    }

    /// Clips the window to `[0, count)`.
    pub fn clamp_to(&self, count: usize) -> RowRange {
        let count = count as i64;
        let start = self.start.clamp(0, count);
        let end = self.end.clamp(start, count);
        RowRange {
            start_index: start as usize,
            end_index: end as usize,
        }
    }
}

/// A range of in-bounds row indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl RowRange {
    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }
}

/// Stable identity of a pooled slot.
///
/// `generation` changes on every pool reset, so an id never refers to a slot of an older pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotId {
    pub generation: u64,
    pub index: u32,
}

/// What a full reset produced.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResetOutcome {
    pub pool_size: usize,
    pub content_size: Size,
}

/// What an offset delta did to the pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transfer {
    /// The delta stayed below one row height (or the pool is empty).
    None,
    /// `count` slots were moved from the trailing edge to the leading edge.
    Shifted {
        count: usize,
        direction: ScrollDirection,
    },
    /// The jump exceeded the pool size; every slot was reassigned starting at `start`.
    Recomputed { start: i64 },
}

impl Transfer {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Passed to the `on_change` hook.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Change {
    Reset(ResetOutcome),
    Transfer(Transfer),
}
