//! Row rendering: sticky slots, live scale transforms, and item placement.

use crate::{
    foundation::core::{Affine, ItemGeometry, Rect, Vec2},
    layout::geometry::LayoutGeometry,
    layout::partition::Row,
    motion::router::RowMotionState,
};

/// One rendered item.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedItem<N> {
    /// Row-major index into the caller's item list.
    pub global_index: usize,
    /// Item rectangle in row-local coordinates (origin at the row's sticky top-left).
    pub rect: Rect,
    /// Whatever the render callback produced for this item.
    pub node: N,
}

/// One rendered row.
#[derive(Clone, Debug, PartialEq)]
pub struct RowFrame<N> {
    /// Row index, top to bottom.
    pub row_index: usize,
    /// Row slot in container coordinates; the row sticks inside it.
    pub slot: Rect,
    /// Sticky offset below the viewport top.
    pub sticky_top: f64,
    /// Live scale for the current scroll progress.
    pub scale: f64,
    /// Scale about the row's top center, in row-local coordinates.
    pub transform: Affine,
    /// Items of the row, left to right.
    pub items: Vec<PlacedItem<N>>,
}

/// A full render pass over a stack.
#[derive(Clone, Debug, PartialEq)]
pub struct StackFrame<N> {
    /// Geometry the frame was rendered with.
    pub geometry: LayoutGeometry,
    /// Rendered rows, top to bottom. Empty when there are no items.
    pub rows: Vec<RowFrame<N>>,
}

impl<N> StackFrame<N> {
    /// Container height including trailing space.
    pub fn content_height(&self) -> f64 {
        self.geometry.content_height()
    }

    /// Number of rendered items.
    pub fn item_count(&self) -> usize {
        self.rows.iter().map(|r| r.items.len()).sum()
    }
}

/// Horizontal start and width of a row of `n` items centered in `viewport_width`.
///
/// An unmeasured viewport (width `0`) left-aligns the row.
pub(crate) fn row_span(n: usize, item: ItemGeometry, viewport_width: f64) -> (f64, f64) {
    let width = n as f64 * item.size + n.saturating_sub(1) as f64 * item.gap;
    let x0 = ((viewport_width - width) / 2.0).max(0.0);
    (x0, width)
}

/// Scale about `(center_x, 0)`.
pub(crate) fn row_transform(scale: f64, center_x: f64) -> Affine {
    let pivot = Vec2::new(center_x, 0.0);
    Affine::translate(pivot) * Affine::scale(scale) * Affine::translate(-pivot)
}

/// Render `rows`, calling `render` once per item in row-major order.
///
/// `motion` is indexed by row; rows without a motion entry render at scale `1`.
pub(crate) fn render_rows<T, N>(
    rows: &[Row<'_, T>],
    geometry: &LayoutGeometry,
    motion: &[RowMotionState],
    item: ItemGeometry,
    viewport_width: f64,
    mut render: impl FnMut(&T, usize) -> N,
) -> Vec<RowFrame<N>> {
    let item_height = item.item_height();
    rows.iter()
        .map(|row| {
            let scale = motion
                .get(row.row_index)
                .map_or(1.0, |m| m.current_scale);
            let (x0, width) = row_span(row.len(), item, viewport_width);
            let items = row
                .iter()
                .enumerate()
                .map(|(col, (global_index, value))| {
                    let x = x0 + col as f64 * (item.size + item.gap);
                    PlacedItem {
                        global_index,
                        rect: Rect::new(x, 0.0, x + item.size, item_height),
                        node: render(value, global_index),
                    }
                })
                .collect();
            let slot_top = geometry.slot_top(row.row_index);
            RowFrame {
                row_index: row.row_index,
                slot: Rect::new(
                    0.0,
                    slot_top,
                    viewport_width.max(x0 + width),
                    slot_top + geometry.row_scroll_height_px,
                ),
                sticky_top: geometry.sticky_top(row.row_index),
                scale,
                transform: row_transform(scale, x0 + width / 2.0),
                items,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/engine/render.rs"]
mod tests;
