//! The stack container: owns items, geometry and motion for one scroll section.

use crate::{
    config::model::StackConfig,
    engine::render::{StackFrame, render_rows},
    foundation::core::{ScrollExtent, ScrollProgress, Viewport},
    layout::anchor::TopOffsetStrategy,
    layout::geometry::{LayoutGeometry, compute_layout},
    layout::partition::{ItemsPerRowStrategy, ResponsiveItemsPerRow, Row, partition},
    motion::router::{MotionRouter, PyramidScale, RangeStrategy, RowMotionState, ScaleStrategy},
};

/// Container lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum LayoutPhase {
    /// No viewport measurement has arrived yet.
    Uninitialized,
    /// Geometry reflects the latest measured viewport and item list.
    LaidOut,
}

/// Host-side scroll sample: page scroll offset and the container's page top.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollSample {
    /// Page scroll offset (top of the viewport in page coordinates).
    pub scroll_y: f64,
    /// Page offset of the container's top edge.
    pub container_top: f64,
}

/// Builder for [`StackContainer`] with optional strategy overrides.
pub struct StackBuilder<T> {
    items: Vec<T>,
    config: StackConfig,
    items_per_row: Option<Box<dyn ItemsPerRowStrategy>>,
    top_offset: Option<Box<dyn TopOffsetStrategy>>,
    range: Option<Box<dyn RangeStrategy>>,
    scale: Option<Box<dyn ScaleStrategy>>,
}

impl<T> std::fmt::Debug for StackBuilder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StackBuilder")
            .field("items", &self.items.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<T> StackBuilder<T> {
    /// Start from `items` with the default config.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            config: StackConfig::default(),
            items_per_row: None,
            top_offset: None,
            range: None,
            scale: None,
        }
    }

    /// Use `config` (sanitized on build).
    pub fn config(mut self, config: StackConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the items-per-row computation.
    pub fn items_per_row(mut self, strategy: impl ItemsPerRowStrategy + 'static) -> Self {
        self.items_per_row = Some(Box::new(strategy));
        self
    }

    /// Override the first row's resting offset. A fixed `top_offset` in the config still wins.
    pub fn top_offset(mut self, strategy: impl TopOffsetStrategy + 'static) -> Self {
        self.top_offset = Some(Box::new(strategy));
        self
    }

    /// Override per-row activation windows.
    pub fn range(mut self, strategy: impl RangeStrategy + 'static) -> Self {
        self.range = Some(Box::new(strategy));
        self
    }

    /// Override per-row target scales.
    pub fn scale(mut self, strategy: impl ScaleStrategy + 'static) -> Self {
        self.scale = Some(Box::new(strategy));
        self
    }

    /// Build an uninitialized container.
    pub fn build(self) -> StackContainer<T> {
        let config = self.config.sanitized();
        let items_per_row = self.items_per_row.unwrap_or_else(|| {
            Box::new(ResponsiveItemsPerRow {
                horizontal_padding: config.horizontal_padding,
            })
        });
        let top_offset = self
            .top_offset
            .unwrap_or_else(|| Box::new(config.anchor_tiers));
        let mut router = MotionRouter::new(
            config.range_pacing,
            PyramidScale {
                min_scale: config.min_scale,
                scale_step: config.scale_reduction,
            },
            config.ease,
        );
        if let Some(range) = self.range {
            router.range = range;
        }
        if let Some(scale) = self.scale {
            router.scale = scale;
        }
        StackContainer {
            items: self.items,
            config,
            items_per_row,
            top_offset,
            router,
            viewport: Viewport::UNMEASURED,
            progress: None,
            scroll_sample: None,
            geometry: None,
            motion: Vec::new(),
        }
    }
}

/// Layout and motion state for one stacked scroll section.
///
/// Resize and item changes re-run partitioning, anchor and trailing space and replace the
/// geometry wholesale. Scroll changes only resample row scales. When progress came from a
/// [`ScrollSample`], a relayout re-derives it against the new content height.
pub struct StackContainer<T> {
    items: Vec<T>,
    config: StackConfig,
    items_per_row: Box<dyn ItemsPerRowStrategy>,
    top_offset: Box<dyn TopOffsetStrategy>,
    router: MotionRouter,
    viewport: Viewport,
    progress: Option<ScrollProgress>,
    scroll_sample: Option<ScrollSample>,
    geometry: Option<LayoutGeometry>,
    motion: Vec<RowMotionState>,
}

impl<T> std::fmt::Debug for StackContainer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StackContainer")
            .field("items", &self.items.len())
            .field("viewport", &self.viewport)
            .field("progress", &self.progress)
            .field("geometry", &self.geometry)
            .finish_non_exhaustive()
    }
}

impl<T> StackContainer<T> {
    /// Container over `items` with the default config and strategies.
    pub fn new(items: Vec<T>) -> Self {
        StackBuilder::new(items).build()
    }

    /// Builder for strategy overrides.
    pub fn builder(items: Vec<T>) -> StackBuilder<T> {
        StackBuilder::new(items)
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> LayoutPhase {
        if self.geometry.is_some() {
            LayoutPhase::LaidOut
        } else {
            LayoutPhase::Uninitialized
        }
    }

    /// Sanitized config in use.
    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Items in display order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Latest viewport snapshot.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Latest scroll progress; `None` while unmeasured.
    pub fn scroll_progress(&self) -> Option<ScrollProgress> {
        self.progress
    }

    /// Geometry once laid out.
    pub fn geometry(&self) -> Option<&LayoutGeometry> {
        self.geometry.as_ref()
    }

    /// Per-row motion for the latest progress. Empty until laid out.
    pub fn motion(&self) -> &[RowMotionState] {
        &self.motion
    }

    /// Geometry in effect: the laid-out one, or fallback geometry before measurement.
    pub fn effective_geometry(&self) -> LayoutGeometry {
        match self.geometry {
            Some(g) => g,
            None => self.layout_for(Viewport::UNMEASURED),
        }
    }

    /// Rows for the effective geometry.
    pub fn rows(&self) -> Vec<Row<'_, T>> {
        partition(&self.items, self.effective_geometry().items_per_row)
    }

    /// Apply a viewport measurement.
    ///
    /// A measured viewport lays the stack out (again). An unmeasured one is ignored: before
    /// the first measurement the fallback layout stays in effect, afterwards the last good
    /// geometry is kept.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if !viewport.is_measured() {
            tracing::debug!(?viewport, "ignoring unmeasured viewport");
            return;
        }
        self.viewport = viewport;
        self.relayout();
    }

    /// Replace the item list and re-run layout if already laid out.
    ///
    /// Progress from the last [`ScrollSample`] is re-derived, since the content height changes
    /// with the row count.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        if self.geometry.is_some() {
            self.relayout();
        }
    }

    /// Apply a normalized scroll progress; geometry is untouched.
    ///
    /// Explicit progress is kept as-is across later relayouts.
    pub fn set_scroll_progress(&mut self, progress: ScrollProgress) {
        self.scroll_sample = None;
        self.apply_progress(Some(progress));
    }

    /// Host cannot measure scroll: every row rests at scale `1`.
    pub fn set_scroll_unavailable(&mut self) {
        self.scroll_sample = None;
        self.apply_progress(None);
    }

    /// Convert a host scroll sample into progress over this container's extent and apply it.
    ///
    /// Before layout, or when the container does not scroll past the viewport, progress is
    /// unavailable and rows rest at scale `1`.
    pub fn set_scroll_sample(&mut self, sample: ScrollSample) {
        self.scroll_sample = Some(sample);
        let progress = self.progress_for(sample);
        self.apply_progress(progress);
    }

    /// Last host scroll sample, if progress is sample-driven.
    pub fn scroll_sample(&self) -> Option<ScrollSample> {
        self.scroll_sample
    }

    /// Progress for a host scroll sample, if measurable.
    pub fn progress_for(&self, sample: ScrollSample) -> Option<ScrollProgress> {
        let geometry = self.geometry?;
        let extent = ScrollExtent {
            top: sample.container_top,
            height: geometry.content_height(),
        };
        ScrollProgress::from_scroll(sample.scroll_y, extent, self.viewport.height)
    }

    /// Render every row, calling `render(item, global_index)` once per item in row-major order.
    ///
    /// Before layout this renders the fallback layout at scale `1`; with no items it renders
    /// no rows.
    pub fn render<N>(&self, render: impl FnMut(&T, usize) -> N) -> StackFrame<N> {
        let geometry = self.effective_geometry();
        let rows = partition(&self.items, geometry.items_per_row);
        let rows = render_rows(
            &rows,
            &geometry,
            &self.motion,
            self.config.item_geometry(),
            self.viewport.size().width,
            render,
        );
        StackFrame { geometry, rows }
    }

    fn layout_for(&self, viewport: Viewport) -> LayoutGeometry {
        compute_layout(
            &self.config,
            viewport,
            self.items.len(),
            self.items_per_row.as_ref(),
            self.top_offset.as_ref(),
        )
    }

    #[tracing::instrument(skip(self), fields(items = self.items.len(), viewport = ?self.viewport))]
    fn relayout(&mut self) {
        let geometry = self.layout_for(self.viewport);
        self.geometry = Some(geometry);
        if let Some(sample) = self.scroll_sample {
            self.progress = self.progress_for(sample);
        }
        self.motion = self.router.plan(geometry.total_rows);
        self.router.sample(&mut self.motion, self.progress);
        tracing::debug!(
            items_per_row = geometry.items_per_row,
            total_rows = geometry.total_rows,
            anchor = geometry.anchor_offset_px,
            trailing = geometry.trailing_space_px,
            progress = ?self.progress.map(ScrollProgress::value),
            "stack laid out"
        );
    }

    fn apply_progress(&mut self, progress: Option<ScrollProgress>) {
        self.progress = progress;
        self.router.sample(&mut self.motion, progress);
        tracing::trace!(progress = ?progress.map(ScrollProgress::value), "rows resampled");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/container.rs"]
mod tests;
