//! Paging targets and control visibility for "previous"/"next" buttons.
//!
//! Targets are snapped to item boundaries: paging moves by roughly one viewport and lands on the
//! leading edge of the item found there. Applying a target (smoothly) is left to the host.

use crate::range::start_index_for_offset;
use crate::{MeasurementEntry, ScrollDirection, ScrollTo, ViewportState};

/// Where a paging action would scroll to, and whether the action currently makes sense.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigationTarget {
    pub target_offset: f64,
    pub is_meaningful: bool,
}

/// Show/hide flags for the paging controls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlVisibility {
    pub previous_visible: bool,
    pub next_visible: bool,
}

/// Item-aligned offset one viewport before `offset`. `None` when nothing is measured.
pub fn backward_target(
    entries: &[MeasurementEntry],
    offset: f64,
    viewport_extent: f64,
) -> Option<f64> {
    let index = start_index_for_offset(entries, offset - viewport_extent);
    entries.get(index).map(|e| e.offset)
}

/// Item-aligned offset one viewport after `offset`. `None` when nothing is measured.
pub fn forward_target(
    entries: &[MeasurementEntry],
    offset: f64,
    viewport_extent: f64,
) -> Option<f64> {
    let index = start_index_for_offset(entries, offset + viewport_extent);
    entries.get(index).map(|e| e.offset)
}

/// Paging backward makes sense anywhere but the very start.
pub fn backward_meaningful(offset: f64, always_visible: bool) -> bool {
    always_visible || offset > 0.0
}

/// Paging forward makes sense unless the content fits the viewport or the track is already
/// scrolled to its end.
pub fn forward_meaningful(
    entries: &[MeasurementEntry],
    offset: f64,
    viewport_extent: f64,
    always_visible: bool,
) -> bool {
    if always_visible {
        return true;
    }
    let Some(last) = entries.last() else {
        return false;
    };
    let end_offset = last.end() - viewport_extent;
    !(end_offset < 0.0 || offset == end_offset)
}

impl<K> ViewportState<K> {
    /// Computes the paging target for `direction` from the current offset and measurements.
    ///
    /// Returns `None` before the first initialize or while nothing is measured.
    pub fn navigation_target(&self, direction: ScrollDirection) -> Option<NavigationTarget> {
        if !self.is_initialized() {
            return None;
        }
        let entries = self.cache().entries();
        let offset = self.offset();
        let viewport = self.viewport_extent();
        let options = self.options();

        let (target_offset, is_meaningful) = match direction {
            ScrollDirection::Backward => (
                backward_target(entries, offset, viewport)?,
                backward_meaningful(offset, options.always_visible_prev),
            ),
            ScrollDirection::Forward => (
                forward_target(entries, offset, viewport)?,
                forward_meaningful(entries, offset, viewport, options.always_visible_next),
            ),
        };
        Some(NavigationTarget {
            target_offset,
            is_meaningful,
        })
    }

    /// The animated scroll instruction for a paging button press.
    pub fn scroll_to(&self, direction: ScrollDirection) -> Option<ScrollTo> {
        let target = self.navigation_target(direction)?;
        ctrace!(
            ?direction,
            target_offset = target.target_offset,
            "ViewportState::scroll_to"
        );
        Some(ScrollTo {
            target_offset: target.target_offset,
            animated: true,
        })
    }

    pub fn control_visibility(&self) -> ControlVisibility {
        let options = self.options();
        ControlVisibility {
            previous_visible: backward_meaningful(self.offset(), options.always_visible_prev),
            next_visible: forward_meaningful(
                self.cache().entries(),
                self.offset(),
                self.viewport_extent(),
                options.always_visible_next,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Measurement, MeasurementCache};

    fn cache(sizes: &[f64]) -> MeasurementCache {
        let mut cache = MeasurementCache::new();
        cache.extend(sizes.len(), |i| Some(Measurement::new(sizes[i], 1.0)));
        cache
    }

    #[test]
    fn backward_snaps_to_item_boundary() {
        let cache = cache(&[50.0, 30.0, 70.0, 20.0]);
        assert_eq!(backward_target(cache.entries(), 150.0, 100.0), Some(50.0));
        assert_eq!(backward_target(cache.entries(), 80.0, 100.0), Some(0.0));
    }

    #[test]
    fn forward_snaps_to_item_boundary() {
        let cache = cache(&[50.0, 30.0, 70.0, 20.0]);
        assert_eq!(forward_target(cache.entries(), 0.0, 100.0), Some(80.0));
        assert_eq!(forward_target(cache.entries(), 50.0, 100.0), Some(150.0));
    }

    #[test]
    fn targets_need_measurements() {
        assert_eq!(backward_target(&[], 10.0, 100.0), None);
        assert_eq!(forward_target(&[], 10.0, 100.0), None);
    }

    #[test]
    fn forward_visibility_boundary() {
        let cache = cache(&[50.0, 30.0, 70.0]);
        // Last entry {offset: 80, size: 70} → end offset 50.
        assert!(!forward_meaningful(cache.entries(), 50.0, 100.0, false));
        assert!(forward_meaningful(cache.entries(), 49.0, 100.0, false));
        assert!(forward_meaningful(cache.entries(), 50.0, 100.0, true));
    }

    #[test]
    fn forward_hidden_when_content_fits() {
        let cache = cache(&[20.0, 20.0]);
        assert!(!forward_meaningful(cache.entries(), 0.0, 100.0, false));
        assert!(!forward_meaningful(&[], 0.0, 100.0, false));
    }

    #[test]
    fn backward_visibility() {
        assert!(!backward_meaningful(0.0, false));
        assert!(backward_meaningful(0.5, false));
        assert!(backward_meaningful(0.0, true));
    }
}
