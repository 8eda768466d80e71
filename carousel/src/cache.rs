use alloc::vec::Vec;

use crate::{Extents, Measurement, MeasurementEntry};

/// Per-item `{size, offset}` table, grown incrementally by measurement passes.
///
/// Filled entries always form a contiguous prefix `0..len()` of the item set, and for every
/// `i >= 1`, `entries[i].offset == entries[i - 1].offset + entries[i - 1].size`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurementCache {
    entries: Vec<MeasurementEntry>,
    cross_extent: f64,
}

impl MeasurementCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one measurement pass over `0..item_count`.
    ///
    /// Already-measured indexes are reused as-is. For the rest, `measure(i)` is called once; a
    /// `None` means the item is not realized yet, and the pass stops there so no later item is
    /// given an offset that ignores it. The next pass retries from that index.
    ///
    /// The cache never shrinks and filled entries never change, so repeated passes with the
    /// same inputs are idempotent.
    pub fn extend(
        &mut self,
        item_count: usize,
        mut measure: impl FnMut(usize) -> Option<Measurement>,
    ) -> Extents {
        let mut cursor = self.track_extent();

        for i in self.entries.len()..item_count {
            let Some(m) = measure(i) else {
                ctrace!(index = i, "MeasurementCache::extend: item not realized");
                break;
            };
            self.entries.push(MeasurementEntry {
                size: m.size,
                offset: cursor,
            });
            cursor += m.size;
            if self.cross_extent < m.cross_size {
                self.cross_extent = m.cross_size;
            }
        }

        ctrace!(
            item_count,
            cached = self.entries.len(),
            "MeasurementCache::extend"
        );
        self.extents()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MeasurementEntry> {
        self.entries.get(index)
    }

    pub fn first(&self) -> Option<&MeasurementEntry> {
        self.entries.first()
    }

    pub fn last(&self) -> Option<&MeasurementEntry> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[MeasurementEntry] {
        &self.entries
    }

    pub fn offset_of(&self, index: usize) -> Option<f64> {
        self.entries.get(index).map(|e| e.offset)
    }

    pub fn is_measured(&self, index: usize) -> bool {
        index < self.entries.len()
    }

    /// End of the last measured item, or `0.0` when nothing is measured.
    pub fn track_extent(&self) -> f64 {
        self.entries.last().map_or(0.0, MeasurementEntry::end)
    }

    /// Largest cross-axis extent seen across all passes.
    pub fn cross_extent(&self) -> f64 {
        self.cross_extent
    }

    pub fn extents(&self) -> Extents {
        Extents {
            track_extent: self.track_extent(),
            cross_extent: self.cross_extent,
        }
    }

    /// Drops every entry from `len` on. The remaining prefix keeps its offsets.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.entries.truncate(len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe(sizes: &[f64]) -> impl FnMut(usize) -> Option<Measurement> + '_ {
        |i| sizes.get(i).map(|&s| Measurement::new(s, 10.0))
    }

    #[test]
    fn extend_assigns_cumulative_offsets() {
        let mut cache = MeasurementCache::new();
        let extents = cache.extend(4, probe(&[50.0, 30.0, 70.0, 20.0]));

        let offsets: Vec<f64> = cache.entries().iter().map(|e| e.offset).collect();
        assert_eq!(offsets, [0.0, 50.0, 80.0, 150.0]);
        assert_eq!(extents.track_extent, 170.0);
        assert_eq!(extents.cross_extent, 10.0);
    }

    #[test]
    fn extend_with_zero_items_is_a_no_op() {
        let mut cache = MeasurementCache::new();
        let extents = cache.extend(0, |_| panic!("no item should be probed"));
        assert!(cache.is_empty());
        assert_eq!(extents, Extents::default());
    }

    #[test]
    fn extend_stops_at_first_unrealized_item() {
        let mut cache = MeasurementCache::new();
        let extents = cache.extend(4, |i| (i != 2).then(|| Measurement::new(10.0, 5.0)));
        assert_eq!(cache.len(), 2);
        assert_eq!(extents.track_extent, 20.0);

        // The next pass picks up where the previous one stopped.
        let extents = cache.extend(4, |_| Some(Measurement::new(10.0, 5.0)));
        assert_eq!(cache.len(), 4);
        assert_eq!(cache.offset_of(2), Some(20.0));
        assert_eq!(extents.track_extent, 40.0);
    }

    #[test]
    fn extend_never_reprobes_measured_items() {
        let mut cache = MeasurementCache::new();
        cache.extend(2, |_| Some(Measurement::new(25.0, 1.0)));

        let mut probed = Vec::new();
        cache.extend(3, |i| {
            probed.push(i);
            Some(Measurement::new(99.0, 1.0))
        });
        assert_eq!(probed, [2]);
        assert_eq!(cache.get(0).map(|e| e.size), Some(25.0));
        assert_eq!(cache.offset_of(2), Some(50.0));
    }

    #[test]
    fn cross_extent_is_a_running_maximum() {
        let mut cache = MeasurementCache::new();
        cache.extend(3, |i| Some(Measurement::new(1.0, [4.0, 9.0, 2.0][i])));
        assert_eq!(cache.cross_extent(), 9.0);
    }

    #[test]
    fn truncate_keeps_prefix_offsets() {
        let mut cache = MeasurementCache::new();
        cache.extend(4, probe(&[50.0, 30.0, 70.0, 20.0]));
        cache.truncate(2);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.track_extent(), 80.0);
    }
}
