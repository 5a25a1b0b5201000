use crate::foundation::math::{at_least, clamp01};

pub use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Smallest item footprint accepted by the engine; smaller or non-finite sizes clamp to it.
pub const MIN_ITEM_SIZE_PX: f64 = 1.0;

/// Viewport snapshot in CSS pixels.
///
/// A non-positive or non-finite dimension means the host has not measured it yet.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Viewport width.
    pub width: f64,
    /// Viewport height.
    pub height: f64,
}

impl Viewport {
    /// Viewport before the first host measurement.
    pub const UNMEASURED: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Build a viewport snapshot.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width, if it has been measured.
    pub fn measured_width(self) -> Option<f64> {
        measured(self.width)
    }

    /// Height, if it has been measured.
    pub fn measured_height(self) -> Option<f64> {
        measured(self.height)
    }

    /// Whether both dimensions have been measured.
    pub fn is_measured(self) -> bool {
        self.measured_width().is_some() && self.measured_height().is_some()
    }

    /// Viewport size as a [`Size`]; unmeasured dimensions read as zero.
    pub fn size(self) -> Size {
        Size::new(
            self.measured_width().unwrap_or(0.0),
            self.measured_height().unwrap_or(0.0),
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::UNMEASURED
    }
}

fn measured(v: f64) -> Option<f64> {
    (v.is_finite() && v > 0.0).then_some(v)
}

/// Item footprint shared by every item of one engine instance.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ItemGeometry {
    /// Item width (and height, unless `height` is set).
    pub size: f64,
    /// Horizontal gap between items of one row.
    pub gap: f64,
    /// Item height when items are not square.
    #[serde(default)]
    pub height: Option<f64>,
}

impl ItemGeometry {
    /// Square items of `size` separated by `gap`.
    pub fn new(size: f64, gap: f64) -> Self {
        Self {
            size,
            gap,
            height: None,
        }
    }

    /// Use a distinct item height.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Rendered item height.
    pub fn item_height(self) -> f64 {
        self.height.unwrap_or(self.size)
    }

    /// Clamp invalid dimensions to safe minimums.
    ///
    /// Returns the sanitized geometry and whether anything was clamped.
    pub fn sanitized(self) -> (Self, bool) {
        let (size, size_fixed) = at_least(self.size, MIN_ITEM_SIZE_PX);
        let (gap, gap_fixed) = at_least(self.gap, 0.0);
        let (height, height_fixed) = match self.height {
            Some(h) => {
                let (h, fixed) = at_least(h, MIN_ITEM_SIZE_PX);
                (Some(h), fixed)
            }
            None => (None, false),
        };
        (
            Self { size, gap, height },
            size_fixed || gap_fixed || height_fixed,
        )
    }
}

/// Normalized scroll position in `[0, 1]` over a container's scrollable extent.
///
/// Deserialized values go through [`ScrollProgress::new`].
#[derive(
    Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize,
)]
#[serde(from = "f64")]
pub struct ScrollProgress(f64);

impl From<f64> for ScrollProgress {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl ScrollProgress {
    /// Progress at the container's start.
    pub const START: Self = Self(0.0);
    /// Progress at the container's end.
    pub const END: Self = Self(1.0);

    /// Build a progress value; out-of-range input is clamped and NaN maps to `0`.
    pub fn new(value: f64) -> Self {
        Self(clamp01(value))
    }

    /// Raw value in `[0, 1]`.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Progress for a page scroll offset.
    ///
    /// Progress `0` is reached when the container's top meets the viewport top, progress `1`
    /// when the container's bottom meets the viewport bottom. This is not a plain mapping of
    /// `[container top, container bottom]` onto `[0, 1]`: the last viewport height of the
    /// container is excluded, so the stack has settled while its end is still on screen.
    /// Returns `None` when the container cannot scroll past the viewport or any input is
    /// unmeasured.
    pub fn from_scroll(scroll_y: f64, extent: ScrollExtent, viewport_height: f64) -> Option<Self> {
        if !scroll_y.is_finite() || !extent.top.is_finite() || !extent.height.is_finite() {
            return None;
        }
        let viewport_height = measured(viewport_height)?;
        let travel = extent.height - viewport_height;
        if travel <= 0.0 {
            return None;
        }
        Some(Self::new((scroll_y - extent.top) / travel))
    }
}

/// Vertical placement of a scroll container inside the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollExtent {
    /// Page offset of the container's top edge.
    pub top: f64,
    /// Total rendered container height, trailing space included.
    pub height: f64,
}

/// Sub-interval of scroll progress over which one row animates.
///
/// Deserialized values go through [`ProgressRange::new`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "RawProgressRange")]
pub struct ProgressRange {
    /// Progress at which the row starts shrinking.
    pub start: f64,
    /// Progress at which the row reaches its target scale.
    pub end: f64,
}

#[derive(serde::Deserialize)]
struct RawProgressRange {
    start: f64,
    end: f64,
}

impl From<RawProgressRange> for ProgressRange {
    fn from(raw: RawProgressRange) -> Self {
        Self::new(raw.start, raw.end)
    }
}

impl ProgressRange {
    /// The whole progress interval.
    pub const FULL: Self = Self {
        start: 0.0,
        end: 1.0,
    };

    /// Build a range clamped into `[0, 1]` with `start <= end`.
    pub fn new(start: f64, end: f64) -> Self {
        let a = clamp01(start);
        let b = clamp01(end);
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Width of the range.
    pub fn len(self) -> f64 {
        self.end - self.start
    }

    /// Whether `p` lies inside the closed range.
    pub fn contains(self, p: ScrollProgress) -> bool {
        self.start <= p.value() && p.value() <= self.end
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
