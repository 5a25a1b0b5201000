//! Static stack geometry, recomputed on resize and item-list changes only.

use crate::{
    config::model::StackConfig,
    foundation::core::Viewport,
    layout::anchor::TopOffsetStrategy,
    layout::partition::{ItemsPerRowStrategy, row_count},
};

/// Derived geometry of one laid-out stack. Replaced wholesale, never patched.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LayoutGeometry {
    /// Resting offset of the first row below the viewport top.
    pub anchor_offset_px: f64,
    /// Distance between consecutive rows' sticky tops.
    pub row_vertical_offset_px: f64,
    /// Scroll distance allotted to each row slot.
    pub row_scroll_height_px: f64,
    /// Extra scroll space after the last row slot.
    pub trailing_space_px: f64,
    /// Items on each full row.
    pub items_per_row: usize,
    /// Number of rows.
    pub total_rows: usize,
}

impl LayoutGeometry {
    /// Sticky offset of a row below the viewport top.
    pub fn sticky_top(&self, row_index: usize) -> f64 {
        self.anchor_offset_px + row_index as f64 * self.row_vertical_offset_px
    }

    /// Offset of a row's slot from the container top.
    pub fn slot_top(&self, row_index: usize) -> f64 {
        row_index as f64 * self.row_scroll_height_px
    }

    /// Total container height, trailing space included.
    pub fn content_height(&self) -> f64 {
        self.total_rows as f64 * self.row_scroll_height_px + self.trailing_space_px
    }
}

/// Run partition sizing, anchor, and trailing space for one viewport snapshot.
///
/// `config` must already be sanitized. A fixed `config.top_offset` bypasses `top_offset`.
/// Without a measured height, row slots shrink to one item plus the row offset.
pub fn compute_layout(
    config: &StackConfig,
    viewport: Viewport,
    item_count: usize,
    items_per_row: &dyn ItemsPerRowStrategy,
    top_offset: &dyn TopOffsetStrategy,
) -> LayoutGeometry {
    let item = config.item_geometry();
    let k = items_per_row
        .items_per_row(viewport.width, item, config.row_bounds)
        .max(1);
    let total_rows = row_count(item_count, k);

    let height = viewport.measured_height().unwrap_or(0.0);
    let anchor = match config.top_offset {
        Some(fixed) => fixed,
        None => top_offset.top_offset(height, item.size),
    };
    let anchor = if anchor.is_finite() { anchor } else { 0.0 };

    let row_scroll_height = config
        .row_scroll_height
        .or(viewport.measured_height())
        .unwrap_or(item.item_height() + config.row_vertical_offset);

    let trailing = config.trailing.trailing_space(
        total_rows,
        anchor,
        item.item_height(),
        config.row_vertical_offset,
        height,
    );

    LayoutGeometry {
        anchor_offset_px: anchor,
        row_vertical_offset_px: config.row_vertical_offset,
        row_scroll_height_px: row_scroll_height,
        trailing_space_px: trailing,
        items_per_row: k,
        total_rows,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/geometry.rs"]
mod tests;
