use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use carousel::{
    CarouselOptions, ContainerGeometry, ControlVisibility, ItemKey, Measurement, ScrollDirection,
    ScrollEvent, ScrollTo, ViewportState,
};

use crate::{Entry, FrameCoalescer};

type KeyFn<T, K> = Arc<dyn Fn(usize, &T) -> K + Send + Sync>;

/// A framework-neutral controller that owns the host item set and a `carousel::ViewportState`,
/// and provides the common host workflows (measurement, frame-coalesced scrolling, paging).
///
/// This type does not hold any UI objects. Hosts drive it by calling:
/// - `set_items` when the item list changes
/// - `on_resize` when layout geometry becomes available or changes
/// - `on_scroll` from the scroll handler, and `tick` once per frame
/// - `previous` / `next` when a paging control is activated
///
/// Scroll-to instructions are returned to the host, which applies them to the real scroll
/// container (animated ones with its own smooth-scroll primitive).
pub struct Controller<T, K = ItemKey> {
    state: ViewportState<K>,
    items: Vec<T>,
    key_for: KeyFn<T, K>,
    pending_scroll: FrameCoalescer<ScrollEvent>,
}

impl<T: 'static> Controller<T, ItemKey> {
    /// Creates a controller whose items are identified by their index.
    ///
    /// Measurements then survive any item-set change that keeps the count, which suits static
    /// lists. Use [`Controller::new_with_key`] when items can be reordered or replaced.
    pub fn new(options: CarouselOptions) -> Self {
        Self {
            state: ViewportState::new(options),
            items: Vec::new(),
            key_for: Arc::new(|i: usize, _: &T| i as u64),
            pending_scroll: FrameCoalescer::new(),
        }
    }
}

impl<T: 'static, K: PartialEq + 'static> Controller<T, K> {
    /// Creates a controller with a custom identity for items.
    ///
    /// When an already-measured index starts holding an item with a different key, its
    /// measurement (and every later one) is redone on the next `on_resize`.
    pub fn new_with_key(
        options: CarouselOptions,
        key_for: impl Fn(&T) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            state: ViewportState::new(options),
            items: Vec::new(),
            key_for: Arc::new(move |_: usize, item: &T| key_for(item)),
            pending_scroll: FrameCoalescer::new(),
        }
    }
}

impl<T, K: PartialEq> Controller<T, K> {
    pub fn state(&self) -> &ViewportState<K> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ViewportState<K> {
        &mut self.state
    }

    pub fn into_state(self) -> ViewportState<K> {
        self.state
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Replaces the item set.
    pub fn set_items(&mut self, items: Vec<T>) {
        let key_for = &self.key_for;
        self.state
            .set_entries(items.iter().enumerate().map(|(i, item)| key_for(i, item)));
        self.items = items;
    }

    /// Call this when layout geometry is available: on first layout and after every resize.
    ///
    /// `measure(i)` should report the realized size of item `i`, or `None` if it is not laid
    /// out yet. Returns the initial jump, if one is due, with its target clamped to the
    /// scrollable range. The controller has already adopted that offset; the host only needs to
    /// move the real scroll container (without animation).
    pub fn on_resize(
        &mut self,
        geometry: ContainerGeometry,
        measure: impl FnMut(usize) -> Option<Measurement>,
    ) -> Option<ScrollTo> {
        let jump = self.state.initialize(geometry, measure)?;
        let target_offset = self.state.set_offset_clamped(jump.target_offset);
        Some(ScrollTo {
            target_offset,
            ..jump
        })
    }

    /// Call this from the host scroll handler. The event is applied on the next [`Self::tick`].
    pub fn on_scroll(&mut self, event: ScrollEvent) {
        if let Some(_prev) = self.pending_scroll.schedule(event) {
            atrace!(
                superseded = _prev.raw_offset,
                raw_offset = event.raw_offset,
                "Controller::on_scroll: coalesced"
            );
        }
    }

    pub fn has_pending_scroll(&self) -> bool {
        self.pending_scroll.is_pending()
    }

    /// Advances the controller by one frame.
    ///
    /// Applies the most recent scroll event reported since the previous tick and returns the
    /// stored (clamped) offset, or `None` when nothing was pending.
    pub fn tick(&mut self) -> Option<f64> {
        let event = self.pending_scroll.take()?;
        Some(self.state.update_offset(event))
    }

    /// The animated scroll instruction for a paging control, if the track has measurements.
    pub fn navigate(&self, direction: ScrollDirection) -> Option<ScrollTo> {
        self.state.scroll_to(direction)
    }

    pub fn previous(&self) -> Option<ScrollTo> {
        self.navigate(ScrollDirection::Backward)
    }

    pub fn next(&self) -> Option<ScrollTo> {
        self.navigate(ScrollDirection::Forward)
    }

    pub fn controls(&self) -> ControlVisibility {
        self.state.control_visibility()
    }

    /// Visits every item of the current render window with its cached position.
    pub fn for_each_entry<'a>(&'a self, mut f: impl FnMut(Entry<'a, T>)) {
        self.state.for_each_virtual_item(|it| {
            let Some(item) = self.items.get(it.index) else {
                return;
            };
            f(Entry {
                item,
                index: it.index,
                offset: it.offset,
                size: it.size,
                first: it.first,
                last: it.last,
            });
        });
    }

    /// Collects the current render window into `out` (clears `out` first).
    pub fn collect_entries<'a>(&'a self, out: &mut Vec<Entry<'a, T>>) {
        out.clear();
        self.for_each_entry(|e| out.push(e));
    }
}

impl<T: Clone, K: Clone> Clone for Controller<T, K> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            items: self.items.clone(),
            key_for: Arc::clone(&self.key_for),
            pending_scroll: self.pending_scroll.clone(),
        }
    }
}

impl<T: fmt::Debug, K: fmt::Debug> fmt::Debug for Controller<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("state", &self.state)
            .field("items", &self.items)
            .field("pending_scroll", &self.pending_scroll)
            .finish_non_exhaustive()
    }
}
