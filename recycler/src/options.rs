use alloc::sync::Arc;

use crate::Change;
use crate::recycler::Recycler;

/// A callback fired after every full reset and every non-trivial transfer.
pub type OnChangeCallback = Arc<dyn Fn(&Recycler, Change) + Send + Sync>;

/// How many slots a pool holds for `n = floor(frame_height * buffer_factor / row_height)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PoolSizing {
    /// `n + 1` slots.
    #[default]
    Compact,
    /// `2n + 1` slots: `n` rows on each side of the anchor row.
    Centered,
}

impl PoolSizing {
    pub fn pool_size(self, active_rows: usize) -> usize {
        match self {
            Self::Compact => active_rows.saturating_add(1),
            Self::Centered => active_rows.saturating_mul(2).saturating_add(1),
        }
    }
}

/// Configuration for [`crate::Recycler`].
///
/// Cheap to clone; the optional hook is stored in an `Arc`.
#[derive(Clone)]
pub struct RecyclerOptions {
    /// Height of every row.
    pub row_height: f64,
    /// Multiplier on the frame height that decides how many rows are kept alive.
    pub buffer_factor: f64,
    pub pool_sizing: PoolSizing,
    pub on_change: Option<OnChangeCallback>,
}

impl RecyclerOptions {
    pub const DEFAULT_ROW_HEIGHT: f64 = 40.0;
    pub const DEFAULT_BUFFER_FACTOR: f64 = 2.0;

    pub fn new(row_height: f64) -> Self {
        Self {
            row_height,
            ..Self::default()
        }
    }

    pub fn with_row_height(mut self, row_height: f64) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_buffer_factor(mut self, buffer_factor: f64) -> Self {
        self.buffer_factor = buffer_factor;
        self
    }

    pub fn with_pool_sizing(mut self, pool_sizing: PoolSizing) -> Self {
        self.pool_sizing = pool_sizing;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Recycler, Change) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    /// Number of rows a frame of `frame_height` keeps active, or `0` for degenerate input.
    pub fn active_rows(&self, frame_height: f64) -> usize {
        if !self.is_valid() || !frame_height.is_finite() || frame_height <= 0.0 {
            return 0;
        }
        let n = crate::math::floor(frame_height * self.buffer_factor / self.row_height);
        if !n.is_finite() || n <= 0.0 {
            0
        } else {
            n as usize
        }
    }

    pub fn pool_size_for(&self, frame_height: f64) -> usize {
        match self.active_rows(frame_height) {
            0 => 0,
            n => self.pool_sizing.pool_size(n),
        }
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.row_height.is_finite()
            && self.row_height > 0.0
            && self.buffer_factor.is_finite()
            && self.buffer_factor > 0.0
    }
}

impl Default for RecyclerOptions {
    fn default() -> Self {
        Self {
            row_height: Self::DEFAULT_ROW_HEIGHT,
            buffer_factor: Self::DEFAULT_BUFFER_FACTOR,
            pool_sizing: PoolSizing::default(),
            on_change: None,
        }
    }
}

impl core::fmt::Debug for RecyclerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RecyclerOptions")
            .field("row_height", &self.row_height)
            .field("buffer_factor", &self.buffer_factor)
            .field("pool_sizing", &self.pool_sizing)
            .finish_non_exhaustive()
    }
}
