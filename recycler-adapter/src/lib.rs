//! Viewport utilities for the `recycler` crate.
//!
//! The `recycler` crate is UI-agnostic and only knows about row windows and pooled slots. This
//! crate provides the framework-neutral glue an adapter needs around it:
//!
//! - A [`Controller`] that tracks the frame and content offset of a scroll container and turns
//!   host notifications into engine calls
//! - A weak [`SourceHandle`] so the list never keeps its data source alive
//!
//! This crate is intentionally framework-agnostic (no UIKit/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod handle;

#[cfg(test)]
mod tests;

pub use controller::{Controller, ControllerOptions};
pub use handle::SourceHandle;
