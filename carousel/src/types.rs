use core::ops::RangeInclusive;

pub type ItemKey = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// A cached item measurement along the scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurementEntry {
    /// Extent of the item along the scroll axis.
    pub size: f64,
    /// Leading-edge position of the item along the scroll axis.
    pub offset: f64,
}

impl MeasurementEntry {
    pub fn end(&self) -> f64 {
        self.offset + self.size
    }
}

/// What the host's size probe reports for a realized item.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    /// Extent along the scroll axis (width for a horizontal carousel).
    pub size: f64,
    /// Extent along the cross axis (height for a horizontal carousel).
    pub cross_size: f64,
}

impl Measurement {
    pub fn new(size: f64, cross_size: f64) -> Self {
        Self { size, cross_size }
    }
}

/// Extents produced by a measurement pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extents {
    pub track_extent: f64,
    pub cross_extent: f64,
}

/// Container geometry reported once per resize/layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerGeometry {
    /// Visible extent of the scroll container along the scroll axis.
    pub content_extent: f64,
}

/// A raw scroll event as reported by the host scroll container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollEvent {
    pub viewport_extent: f64,
    /// Unclamped offset; may be negative or past the end during elastic scrolling.
    pub raw_offset: f64,
    pub track_extent: f64,
}

impl ScrollEvent {
    pub fn new(viewport_extent: f64, raw_offset: f64, track_extent: f64) -> Self {
        Self {
            viewport_extent,
            raw_offset,
            track_extent,
        }
    }

    /// `raw_offset` clamped into `[0, track_extent - viewport_extent]`.
    pub fn clamped_offset(&self) -> f64 {
        self.raw_offset
            .min(self.track_extent - self.viewport_extent)
            .max(0.0)
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.viewport_extent.is_finite()
            && self.raw_offset.is_finite()
            && self.track_extent.is_finite()
    }
}

/// An instruction for the host scroll primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollTo {
    pub target_offset: f64,
    /// `true` for smooth (host-animated) scrolling, `false` for an immediate jump.
    pub animated: bool,
}

/// Payload of the initialize notification.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InitializePayload {
    pub content_extent: f64,
    pub cross_extent: f64,
}

/// The window of items to materialize.
///
/// Stop indexes are inclusive. A range computed over an empty cache has `count == 0` and
/// yields no indexes even though its numeric fields are all zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderRange {
    pub render_start: usize,
    pub render_stop: usize,
    pub visible_start: usize,
    pub visible_stop: usize,
    /// Number of measured entries the range was computed over.
    pub count: usize,
}

impl RenderRange {
    pub const EMPTY: Self = Self {
        render_start: 0,
        render_stop: 0,
        visible_start: 0,
        visible_stop: 0,
        count: 0,
    };

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of indexes to render.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.render_stop - self.render_start + 1
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        !self.is_empty() && index >= self.render_start && index <= self.render_stop
    }

    pub fn is_visible(&self, index: usize) -> bool {
        !self.is_empty() && index >= self.visible_start && index <= self.visible_stop
    }

    /// Indexes to render, in ascending order.
    #[allow(clippy::reversed_empty_ranges)]
    pub fn indices(&self) -> RangeInclusive<usize> {
        if self.is_empty() {
            return 1..=0;
        }
        self.render_start..=self.render_stop
    }
}

/// A render-window slot: an item index with its cached position.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VirtualItem {
    pub index: usize,
    /// Leading-edge position along the scroll axis.
    pub offset: f64,
    pub size: f64,
    /// `true` for the first item of the item set.
    pub first: bool,
    /// `true` for the last item of the item set.
    pub last: bool,
}

impl VirtualItem {
    pub fn end(&self) -> f64 {
        self.offset + self.size
    }
}
