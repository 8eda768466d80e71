use alloc::vec::Vec;

use crate::error::{TransitionError, TransitionResult};
use crate::range::compute_render_range;
use crate::{
    CarouselOptions, ContainerGeometry, InitializePayload, ItemKey, Measurement, MeasurementCache,
    RenderRange, ScrollEvent, ScrollTo, VirtualItem,
};

/// A transition request, for hosts that prefer to drive the state through a single reducer-style
/// entry point (see [`ViewportState::apply`]).
#[derive(Clone, Debug, PartialEq)]
pub enum Action<K = ItemKey> {
    /// Records the host item set, one identity key per item.
    SetEntries(Vec<K>),
    /// Runs a measurement pass with freshly reported container geometry.
    Initialize(ContainerGeometry),
    /// Applies a (coalesced) scroll event.
    UpdateOffset(ScrollEvent),
    /// Recomputes the render range from the current cache/offset/viewport.
    FlushRenderRange,
}

/// The windowing state of one carousel instance.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects; the host reports geometry, measurements and scroll offsets.
/// - It is mutated only through four transitions: [`Self::set_entries`], [`Self::initialize`],
///   [`Self::update_offset`] and [`Self::flush_render_range`].
/// - Rendering is exposed via [`Self::for_each_virtual_item`], which visits the current render
///   range with cached positions.
///
/// Keys identify items across item-set changes. When the host replaces the item set and the keys
/// of already-measured items change, the measurements from the first changed index on are
/// dropped at the next initialize and re-measured.
#[derive(Clone, Debug)]
pub struct ViewportState<K = ItemKey> {
    options: CarouselOptions,
    keys: Vec<K>,
    stale_from: Option<usize>,

    cache: MeasurementCache,
    offset: f64,
    viewport_extent: f64,
    track_extent: f64,
    cross_extent: f64,
    range: Option<RenderRange>,

    initialized: bool,
    initial_jump_done: bool,
}

impl<K> Default for ViewportState<K> {
    fn default() -> Self {
        Self::new(CarouselOptions::default())
    }
}

impl<K> ViewportState<K> {
    pub fn new(options: CarouselOptions) -> Self {
        cdebug!(
            initial_index = ?options.initial_index,
            "ViewportState::new"
        );
        Self {
            options,
            keys: Vec::new(),
            stale_from: None,
            cache: MeasurementCache::new(),
            offset: 0.0,
            viewport_extent: 0.0,
            track_extent: 0.0,
            cross_extent: 0.0,
            range: None,
            initialized: false,
            initial_jump_done: false,
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: CarouselOptions) {
        self.options = options;
        ctrace!(
            initial_index = ?self.options.initial_index,
            always_visible_prev = self.options.always_visible_prev,
            always_visible_next = self.options.always_visible_next,
            "ViewportState::set_options"
        );
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn viewport_extent(&self) -> f64 {
        self.viewport_extent
    }

    pub fn track_extent(&self) -> f64 {
        self.track_extent
    }

    pub fn cross_extent(&self) -> f64 {
        self.cross_extent
    }

    pub fn cache(&self) -> &MeasurementCache {
        &self.cache
    }

    /// The render range as of the latest flush; `None` before the first initialize.
    pub fn range(&self) -> Option<RenderRange> {
        self.range
    }

    pub fn item_count(&self) -> usize {
        self.keys.len()
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Largest offset the track can scroll to with the current viewport.
    pub fn max_offset(&self) -> f64 {
        (self.track_extent - self.viewport_extent).max(0.0)
    }

    pub fn clamp_offset(&self, offset: f64) -> f64 {
        offset.min(self.track_extent - self.viewport_extent).max(0.0)
    }

    /// Runs a measurement pass and adopts the reported container geometry.
    ///
    /// Returns a non-animated [`ScrollTo`] the first time the configured `initial_index` is
    /// measured; the host should apply it before the first paint. Rejected geometry is logged
    /// and leaves the state untouched.
    pub fn initialize(
        &mut self,
        geometry: ContainerGeometry,
        measure: impl FnMut(usize) -> Option<Measurement>,
    ) -> Option<ScrollTo> {
        match self.try_initialize(geometry, measure) {
            Ok(scroll_to) => scroll_to,
            Err(_err) => {
                cwarn!(error = %_err, "ViewportState::initialize rejected");
                None
            }
        }
    }

    pub fn try_initialize(
        &mut self,
        geometry: ContainerGeometry,
        measure: impl FnMut(usize) -> Option<Measurement>,
    ) -> TransitionResult<Option<ScrollTo>> {
        let content_extent = geometry.content_extent;
        if !content_extent.is_finite() || content_extent < 0.0 {
            return Err(TransitionError::InvalidGeometry(content_extent));
        }

        if let Some(stale) = self.stale_from.take() {
            cdebug!(
                from = stale,
                cached = self.cache.len(),
                "ViewportState::initialize: invalidating measurements"
            );
            self.cache.truncate(stale);
        }

        let extents = self.cache.extend(self.keys.len(), measure);
        self.viewport_extent = content_extent;
        self.track_extent = extents.track_extent;
        self.cross_extent = extents.cross_extent;
        self.initialized = true;
        cdebug!(
            content_extent,
            track_extent = self.track_extent,
            cross_extent = self.cross_extent,
            measured = self.cache.len(),
            items = self.keys.len(),
            "ViewportState::initialize"
        );

        let scroll_to = self.take_initial_jump();

        if let Some(cb) = &self.options.on_initialize {
            cb(InitializePayload {
                content_extent,
                cross_extent: self.cross_extent,
            });
        }

        self.refresh_range();
        Ok(scroll_to)
    }

    fn take_initial_jump(&mut self) -> Option<ScrollTo> {
        if self.initial_jump_done {
            return None;
        }
        let index = self.options.initial_index?;
        let Some(target_offset) = self.cache.offset_of(index) else {
            cdebug!(
                index,
                measured = self.cache.len(),
                "initial index has no measurement; jump skipped"
            );
            return None;
        };
        self.initial_jump_done = true;
        cdebug!(index, target_offset, "initial jump");
        Some(ScrollTo {
            target_offset,
            animated: false,
        })
    }

    /// Applies a scroll event: clamps its raw offset into `[0, track - viewport]`, stores it and
    /// recomputes the render range.
    ///
    /// Returns the stored offset. A non-finite event is logged and ignored.
    pub fn update_offset(&mut self, event: ScrollEvent) -> f64 {
        match self.try_update_offset(event) {
            Ok(offset) => offset,
            Err(_err) => {
                cwarn!(error = %_err, "ViewportState::update_offset rejected");
                self.offset
            }
        }
    }

    pub fn try_update_offset(&mut self, event: ScrollEvent) -> TransitionResult<f64> {
        if !event.is_finite() {
            return Err(TransitionError::NonFiniteOffset(event.raw_offset));
        }
        let offset = event.clamped_offset();
        ctrace!(
            raw_offset = event.raw_offset,
            offset,
            viewport_extent = event.viewport_extent,
            track_extent = event.track_extent,
            "ViewportState::update_offset"
        );
        self.offset = offset;
        self.refresh_range();
        Ok(offset)
    }

    /// Same as [`Self::update_offset`], but clamps against the state's own measured track and
    /// viewport instead of host-reported values.
    pub fn set_offset_clamped(&mut self, offset: f64) -> f64 {
        let event = ScrollEvent::new(self.viewport_extent, offset, self.track_extent);
        self.update_offset(event)
    }

    /// Recomputes the render range. Before the first initialize this is logged and ignored.
    pub fn flush_render_range(&mut self) -> Option<RenderRange> {
        match self.try_flush_render_range() {
            Ok(range) => Some(range),
            Err(_err) => {
                cwarn!(error = %_err, "ViewportState::flush_render_range rejected");
                self.range
            }
        }
    }

    pub fn try_flush_render_range(&mut self) -> TransitionResult<RenderRange> {
        if !self.initialized {
            return Err(TransitionError::NotInitialized);
        }
        Ok(self.store_range())
    }

    fn store_range(&mut self) -> RenderRange {
        let range = compute_render_range(self.cache.entries(), self.offset, self.viewport_extent);
        ctrace!(
            render_start = range.render_start,
            render_stop = range.render_stop,
            visible_start = range.visible_start,
            visible_stop = range.visible_stop,
            "ViewportState::flush_render_range"
        );
        self.range = Some(range);
        range
    }

    fn refresh_range(&mut self) {
        if self.initialized {
            self.store_range();
        }
    }

    /// Visits every index of the current render range with its cached position.
    ///
    /// Indexes past the current item set are skipped, so a range left stale by a shrinking
    /// [`Self::set_entries`] never reports items that no longer exist.
    pub fn for_each_virtual_item(&self, mut f: impl FnMut(VirtualItem)) {
        let Some(range) = self.range else {
            return;
        };
        let count = self.keys.len();
        for index in range.indices() {
            if index >= count {
                return;
            }
            let Some(entry) = self.cache.get(index) else {
                return;
            };
            f(VirtualItem {
                index,
                offset: entry.offset,
                size: entry.size,
                first: index == 0,
                last: index + 1 == count,
            });
        }
    }

    /// Collects the current render window into `out` (clears `out` first).
    ///
    /// This is a convenience wrapper around [`Self::for_each_virtual_item`]. For maximum
    /// performance, prefer `for_each_virtual_item` and reuse a scratch buffer in your host.
    pub fn collect_virtual_items(&self, out: &mut Vec<VirtualItem>) {
        out.clear();
        self.for_each_virtual_item(|it| out.push(it));
    }
}

impl<K: PartialEq> ViewportState<K> {
    /// Records the latest host item set.
    ///
    /// This does not touch the cache or the render range. If an already-measured index now holds
    /// a different key, or the set shrank below the measured prefix, the cache is invalidated
    /// from that index on at the next [`Self::initialize`].
    pub fn set_entries(&mut self, keys: impl IntoIterator<Item = K>) {
        let keys: Vec<K> = keys.into_iter().collect();
        let measured = self.cache.len();

        let changed = self
            .keys
            .iter()
            .zip(keys.iter())
            .take(measured)
            .position(|(prev, next)| prev != next);
        let shrunk = (keys.len() < measured).then_some(keys.len());
        let stale = match (changed, shrunk) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };

        if let Some(stale) = stale {
            let stale = self.stale_from.map_or(stale, |prev| prev.min(stale));
            cdebug!(
                stale_from = stale,
                measured,
                items = keys.len(),
                "ViewportState::set_entries: item identity changed"
            );
            self.stale_from = Some(stale);
        }
        ctrace!(items = keys.len(), "ViewportState::set_entries");
        self.keys = keys;
    }

    /// Applies a transition request, returning why it was rejected.
    ///
    /// `Action::Initialize` runs without a measurement probe, so it only re-adopts the
    /// geometry and reuses existing measurements. Use [`Self::try_apply_with`] to supply one.
    pub fn try_apply(&mut self, action: Action<K>) -> TransitionResult<Option<ScrollTo>> {
        self.try_apply_with(action, |_| None)
    }

    pub fn try_apply_with(
        &mut self,
        action: Action<K>,
        measure: impl FnMut(usize) -> Option<Measurement>,
    ) -> TransitionResult<Option<ScrollTo>> {
        match action {
            Action::SetEntries(keys) => {
                self.set_entries(keys);
                Ok(None)
            }
            Action::Initialize(geometry) => self.try_initialize(geometry, measure),
            Action::UpdateOffset(event) => self.try_update_offset(event).map(|_| None),
            Action::FlushRenderRange => self.try_flush_render_range().map(|_| None),
        }
    }

    /// Applies a transition request. Rejected requests are logged and leave the state unchanged.
    pub fn apply(&mut self, action: Action<K>) -> Option<ScrollTo> {
        self.apply_with(action, |_| None)
    }

    pub fn apply_with(
        &mut self,
        action: Action<K>,
        measure: impl FnMut(usize) -> Option<Measurement>,
    ) -> Option<ScrollTo> {
        match self.try_apply_with(action, measure) {
            Ok(scroll_to) => scroll_to,
            Err(_err) => {
                cwarn!(error = %_err, "ViewportState::apply rejected");
                None
            }
        }
    }
}
