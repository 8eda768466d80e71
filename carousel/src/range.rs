//! Offset → index lookups and render-window computation over a measured prefix.
//!
//! All functions are total: empty inputs and positions outside the measured track are handled
//! by clamping, never by unchecked indexing.

use crate::{MeasurementEntry, RenderRange};

/// Extra items rendered on each side of the visible window, so keyboard focus can always move
/// to a mounted neighbour.
pub const OVERSCAN: usize = 1;

/// Binary searches for the item whose leading edge is the greatest one `<= position`.
///
/// An exact offset match returns that index. Positions before the first item map to `0`,
/// positions past the end map to the last index, and an empty slice maps to `0`.
pub fn start_index_for_offset(entries: &[MeasurementEntry], position: f64) -> usize {
    let Some(mut high) = entries.len().checked_sub(1) else {
        return 0;
    };

    let mut low = 0usize;
    while low <= high {
        let middle = low + (high - low) / 2;
        let current = entries[middle].offset;
        if current == position {
            return middle;
        } else if current < position {
            low = middle + 1;
        } else if middle == 0 {
            break;
        } else {
            high = middle - 1;
        }
    }

    low.saturating_sub(1)
}

/// Walks forward from `start_index`, accumulating sizes until the window
/// `[position, position + viewport_extent)` is covered or the entries run out.
///
/// Returns the last index included (inclusive).
pub fn stop_index_for_start(
    entries: &[MeasurementEntry],
    start_index: usize,
    position: f64,
    viewport_extent: f64,
) -> usize {
    let Some(last) = entries.len().checked_sub(1) else {
        return 0;
    };
    let mut stop = start_index.min(last);
    let max_offset = position + viewport_extent;

    let mut offset = entries[stop].end();
    while stop < last && offset < max_offset {
        stop += 1;
        offset += entries[stop].size;
    }
    stop
}

/// Computes the visible window for `offset`/`viewport_extent` and widens it by [`OVERSCAN`].
pub fn compute_render_range(
    entries: &[MeasurementEntry],
    offset: f64,
    viewport_extent: f64,
) -> RenderRange {
    let count = entries.len();
    if count == 0 {
        return RenderRange::EMPTY;
    }

    let visible_start = start_index_for_offset(entries, offset);
    let visible_stop = stop_index_for_start(entries, visible_start, offset, viewport_extent);

    RenderRange {
        render_start: visible_start.saturating_sub(OVERSCAN),
        render_stop: visible_stop.saturating_add(OVERSCAN).min(count - 1),
        visible_start,
        visible_stop,
        count,
    }
}
