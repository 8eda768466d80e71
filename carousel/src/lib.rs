//! A headless windowing engine for horizontally scrolling, virtualized carousels.
//!
//! For host-side workflows (frame-coalesced scroll handling, item pairing, paging buttons), see
//! the `carousel-adapter` crate.
//!
//! This crate holds the algorithmic core: a measurement cache of per-item `{size, offset}`,
//! binary-search offset → index lookup, an overscanned render window, and item-aligned paging
//! targets for "previous"/"next" controls.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - the item set (or just its identity keys)
//! - container geometry and a per-item size probe, once layout is available
//! - scroll offsets, at most once per frame
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod cache;
mod error;
mod navigation;
mod options;
pub mod range;
mod types;
mod viewport;


pub use cache::MeasurementCache;
pub use error::{TransitionError, TransitionResult};
pub use navigation::{
    ControlVisibility, NavigationTarget, backward_meaningful, backward_target, forward_meaningful,
    forward_target,
};
pub use options::{CarouselOptions, OnInitializeCallback};
pub use range::{OVERSCAN, compute_render_range, start_index_for_offset, stop_index_for_start};
pub use types::{
    ContainerGeometry, Extents, InitializePayload, ItemKey, Measurement, MeasurementEntry,
    RenderRange, ScrollDirection, ScrollEvent, ScrollTo, VirtualItem,
};
pub use viewport::{Action, ViewportState};
