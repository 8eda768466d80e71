use alloc::sync::Arc;

use crate::InitializePayload;

/// A callback fired every time an initialize transition completes.
///
/// Resizes re-run initialize, so implementations must tolerate repeated calls.
pub type OnInitializeCallback = Arc<dyn Fn(InitializePayload) + Send + Sync>;

/// Configuration for [`crate::ViewportState`].
///
/// This type is cheap to clone: the callback lives in an `Arc`, so hosts can tweak a flag and
/// call `ViewportState::set_options` without reallocating closures.
pub struct CarouselOptions {
    /// Index to jump to (without animation) once its measurement is known.
    ///
    /// The jump happens at most once per state. An index that never gets measured is ignored.
    pub initial_index: Option<usize>,

    /// Keeps the "previous" control visible even at the start of the track.
    pub always_visible_prev: bool,

    /// Keeps the "next" control visible even at the end of the track.
    pub always_visible_next: bool,

    /// Optional callback fired after each initialize with the container/track geometry.
    pub on_initialize: Option<OnInitializeCallback>,
}

impl Clone for CarouselOptions {
    fn clone(&self) -> Self {
        Self {
            initial_index: self.initial_index,
            always_visible_prev: self.always_visible_prev,
            always_visible_next: self.always_visible_next,
            on_initialize: self.on_initialize.clone(),
        }
    }
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self {
            initial_index: None,
            always_visible_prev: false,
            always_visible_next: false,
            on_initialize: None,
        }
    }

    pub fn with_initial_index(mut self, initial_index: Option<usize>) -> Self {
        self.initial_index = initial_index;
        self
    }

    pub fn with_always_visible_prev(mut self, always_visible: bool) -> Self {
        self.always_visible_prev = always_visible;
        self
    }

    pub fn with_always_visible_next(mut self, always_visible: bool) -> Self {
        self.always_visible_next = always_visible;
        self
    }

    pub fn with_on_initialize(
        mut self,
        on_initialize: Option<impl Fn(InitializePayload) + Send + Sync + 'static>,
    ) -> Self {
        self.on_initialize = on_initialize.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("initial_index", &self.initial_index)
            .field("always_visible_prev", &self.always_visible_prev)
            .field("always_visible_next", &self.always_visible_next)
            .finish_non_exhaustive()
    }
}
