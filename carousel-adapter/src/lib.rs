//! Host-side adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the windowing math and state. This crate
//! provides small, framework-neutral helpers commonly needed by hosts:
//!
//! - Frame coalescing of scroll events (at most one offset update per frame, last value wins)
//! - A controller that pairs the render window with host items and answers paging controls
//!
//! This crate is intentionally framework-agnostic (no DOM, egui or ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod coalesce;
mod controller;
mod entry;

#[cfg(test)]
mod tests;

pub use coalesce::FrameCoalescer;
pub use controller::Controller;
pub use entry::Entry;
