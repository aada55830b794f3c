//! A headless cell-recycling engine for fixed-height virtualized lists.
//!
//! For viewport-level utilities (frame/offset notifications, weak data source handles), see the
//! `recycler-adapter` crate.
//!
//! A list with millions of rows only ever needs a handful of cells on screen. This crate keeps a
//! fixed pool of reusable slots for a window of rows around the scroll position and, on every
//! offset change, moves the slots that scrolled out of the window to the opposite edge instead of
//! creating new ones.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the frame size of the scroll container
//! - content offset changes
//! - a [`DataSource`] for the row count and row text
//!
//! and to render each [`CellSlot`] at its frame, keyed by its [`SlotId`].
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod math;
mod options;
mod pool;
mod recycler;
mod source;
mod state;
mod types;


pub use options::{OnChangeCallback, PoolSizing, RecyclerOptions};
pub use pool::{CellPool, CellSlot};
pub use recycler::Recycler;
pub use source::{DataSource, FnDataSource};
pub use state::ViewportState;
pub use types::{
    Change, Rect, ResetOutcome, RowRange, RowWindow, ScrollDirection, Size, SlotId, Transfer,
};
