//! Scroll-progress routing: per-row activation windows and scale targets.
//!
//! The static half ([`RangeStrategy`], [`ScaleStrategy`]) runs when the row count changes; the
//! per-frame half ([`sample_scale`], [`MotionRouter::sample`]) only interpolates.

use crate::{
    animation::ease::Ease,
    foundation::core::{ProgressRange, ScrollProgress},
    foundation::math::{lerp, unlerp_clamped},
};

/// Smallest target scale accepted from any strategy.
pub const MIN_TARGET_SCALE: f64 = 0.01;

/// Default scale of the rows furthest below the top of the stack.
pub const DEFAULT_MIN_SCALE: f64 = 0.5;

/// Default scale reduction per row of distance from the last row.
pub const DEFAULT_SCALE_STEP: f64 = 0.1;

/// Pacing of per-row activation windows.
///
/// Row `i` of `n` animates over
/// `[i * budget / n, min(head_start + (i + 1) * budget / n, 1)]`, which staggers rows while
/// letting consecutive windows overlap. The last row's window always ends at `1`, so the stack
/// settles exactly when scrolling reaches the end.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RangePacing {
    /// Share of the progress interval distributed across rows.
    pub budget: f64,
    /// Extra progress added to every window's end.
    pub head_start: f64,
}

impl Default for RangePacing {
    fn default() -> Self {
        Self {
            budget: 0.8,
            head_start: 0.2,
        }
    }
}

impl RangePacing {
    /// Activation window for one row.
    pub fn range_for(&self, row_index: usize, total_rows: usize) -> ProgressRange {
        if total_rows == 0 {
            return ProgressRange::FULL;
        }
        let per_row = self.budget / total_rows as f64;
        let start = row_index as f64 * per_row;
        let end = if row_index + 1 >= total_rows {
            1.0
        } else {
            (self.head_start + (row_index + 1) as f64 * per_row).min(1.0)
        };
        ProgressRange::new(start, end)
    }
}

/// Activation window with the default pacing.
pub fn range_for(row_index: usize, total_rows: usize) -> ProgressRange {
    RangePacing::default().range_for(row_index, total_rows)
}

/// `max(min_scale, 1 - (total_rows - row_index - 1) * scale_step)`.
///
/// The last row always targets `1`; each row further up the stack shrinks by `scale_step`
/// until `min_scale`.
pub fn target_scale_for(
    row_index: usize,
    total_rows: usize,
    min_scale: f64,
    scale_step: f64,
) -> f64 {
    let below = total_rows.saturating_sub(row_index + 1) as f64;
    clamp_target_scale((1.0 - below * scale_step).max(min_scale))
}

/// Force a target scale into `[MIN_TARGET_SCALE, 1]`; non-finite values rest at `1`.
pub fn clamp_target_scale(scale: f64) -> f64 {
    if scale.is_finite() {
        scale.clamp(MIN_TARGET_SCALE, 1.0)
    } else {
        1.0
    }
}

/// Live scale for `progress` inside `range`, moving from `1` to `target_scale`.
///
/// Progress before `range.start` yields `1`, after `range.end` yields `target_scale`.
pub fn sample_scale(
    progress: ScrollProgress,
    range: ProgressRange,
    target_scale: f64,
    ease: Ease,
) -> f64 {
    let t = unlerp_clamped(range.start, range.end, progress.value());
    lerp(1.0, target_scale, ease.apply(t))
}

/// Caller override for activation windows.
///
/// Closures `Fn(row_index, total_rows) -> (start, end)` implement this trait; their output is
/// normalized into `[0, 1]` with `start <= end`.
pub trait RangeStrategy {
    /// Activation window for one row.
    fn range_for(&self, row_index: usize, total_rows: usize) -> ProgressRange;
}

impl RangeStrategy for RangePacing {
    fn range_for(&self, row_index: usize, total_rows: usize) -> ProgressRange {
        Self::range_for(self, row_index, total_rows)
    }
}

impl<F> RangeStrategy for F
where
    F: Fn(usize, usize) -> (f64, f64),
{
    fn range_for(&self, row_index: usize, total_rows: usize) -> ProgressRange {
        let (start, end) = self(row_index, total_rows);
        ProgressRange::new(start, end)
    }
}

/// Caller override for resting scales.
///
/// Closures `Fn(row_index, total_rows) -> f64` implement this trait; their output is clamped
/// with [`clamp_target_scale`].
pub trait ScaleStrategy {
    /// Resting scale for one row.
    fn target_scale_for(&self, row_index: usize, total_rows: usize) -> f64;
}

/// Default pyramid: the last row on top at full size, earlier rows progressively smaller.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PyramidScale {
    /// Floor for every row's target scale.
    pub min_scale: f64,
    /// Reduction per row of distance from the last row.
    pub scale_step: f64,
}

impl Default for PyramidScale {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            scale_step: DEFAULT_SCALE_STEP,
        }
    }
}

impl ScaleStrategy for PyramidScale {
    fn target_scale_for(&self, row_index: usize, total_rows: usize) -> f64 {
        target_scale_for(row_index, total_rows, self.min_scale, self.scale_step)
    }
}

impl<F> ScaleStrategy for F
where
    F: Fn(usize, usize) -> f64,
{
    fn target_scale_for(&self, row_index: usize, total_rows: usize) -> f64 {
        clamp_target_scale(self(row_index, total_rows))
    }
}

/// Motion of one row for the latest scroll progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RowMotionState {
    /// Row index, top to bottom.
    pub row_index: usize,
    /// Activation window.
    pub range: ProgressRange,
    /// Resting scale after the window has passed.
    pub target_scale: f64,
    /// Scale for the current progress, within `[target_scale, 1]`.
    pub current_scale: f64,
}

impl RowMotionState {
    /// Row state before any progress has been sampled.
    pub fn at_rest(row_index: usize, range: ProgressRange, target_scale: f64) -> Self {
        Self {
            row_index,
            range,
            target_scale,
            current_scale: 1.0,
        }
    }

    /// Update `current_scale` for `progress`; `None` (unmeasurable scroll) rests at `1`.
    pub fn sample(&mut self, progress: Option<ScrollProgress>, ease: Ease) {
        self.current_scale = match progress {
            Some(p) => sample_scale(p, self.range, self.target_scale, ease),
            None => 1.0,
        };
    }
}

/// Range and scale strategies plus easing, applied to a whole stack.
pub struct MotionRouter {
    pub(crate) range: Box<dyn RangeStrategy>,
    pub(crate) scale: Box<dyn ScaleStrategy>,
    ease: Ease,
}

impl std::fmt::Debug for MotionRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MotionRouter")
            .field("ease", &self.ease)
            .finish_non_exhaustive()
    }
}

impl Default for MotionRouter {
    fn default() -> Self {
        Self::new(RangePacing::default(), PyramidScale::default(), Ease::Linear)
    }
}

impl MotionRouter {
    /// Build a router from explicit strategies.
    pub fn new(
        range: impl RangeStrategy + 'static,
        scale: impl ScaleStrategy + 'static,
        ease: Ease,
    ) -> Self {
        Self {
            range: Box::new(range),
            scale: Box::new(scale),
            ease,
        }
    }

    /// Replace the range strategy.
    pub fn with_range(mut self, range: impl RangeStrategy + 'static) -> Self {
        self.range = Box::new(range);
        self
    }

    /// Replace the scale strategy.
    pub fn with_scale(mut self, scale: impl ScaleStrategy + 'static) -> Self {
        self.scale = Box::new(scale);
        self
    }

    /// Easing applied to row-local progress.
    pub fn ease(&self) -> Ease {
        self.ease
    }

    /// Static per-row windows and targets, all rows at rest.
    pub fn plan(&self, total_rows: usize) -> Vec<RowMotionState> {
        (0..total_rows)
            .map(|i| {
                let range = self.range.range_for(i, total_rows);
                let target = clamp_target_scale(self.scale.target_scale_for(i, total_rows));
                RowMotionState::at_rest(i, range, target)
            })
            .collect()
    }

    /// Resample every row of `plan` for `progress` in place.
    pub fn sample(&self, plan: &mut [RowMotionState], progress: Option<ScrollProgress>) {
        for row in plan {
            row.sample(progress, self.ease);
        }
    }

    /// Plan and sample in one step.
    pub fn motion_for_rows(
        &self,
        total_rows: usize,
        progress: Option<ScrollProgress>,
    ) -> Vec<RowMotionState> {
        let mut plan = self.plan(total_rows);
        self.sample(&mut plan, progress);
        plan
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/router.rs"]
mod tests;
