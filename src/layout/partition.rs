//! Responsive row partitioning.
//!
//! Decides how many items fit on one row for a viewport width and regroups a flat item slice
//! into consecutive rows. Everything here is pure; callers re-run it on resize.

use crate::foundation::core::ItemGeometry;

/// Items per row used until the host reports a real viewport width.
pub const FALLBACK_ITEMS_PER_ROW: usize = 2;

/// Horizontal space reserved for page gutters before fitting items.
pub const DEFAULT_HORIZONTAL_PADDING_PX: f64 = 40.0;

/// Inclusive bounds on the number of items per row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RowBounds {
    /// Lower bound (at least 1 after sanitizing).
    pub min: usize,
    /// Upper bound (at least `min` after sanitizing).
    pub max: usize,
}

impl Default for RowBounds {
    fn default() -> Self {
        Self { min: 1, max: 4 }
    }
}

impl RowBounds {
    /// Build bounds; see [`RowBounds::sanitized`].
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Force `1 <= min <= max`.
    pub fn sanitized(self) -> Self {
        let min = self.min.max(1);
        Self {
            min,
            max: self.max.max(min),
        }
    }

    /// Clamp `n` into the (sanitized) bounds.
    pub fn clamp(self, n: usize) -> usize {
        let b = self.sanitized();
        n.clamp(b.min, b.max)
    }
}

/// Number of items that fit on one row.
///
/// `floor((width - padding + gap) / (size + gap))`, clamped into `bounds`. An unmeasured width
/// (non-positive or non-finite) yields [`FALLBACK_ITEMS_PER_ROW`] clamped into `bounds`.
pub fn items_per_row(
    item: ItemGeometry,
    viewport_width: f64,
    bounds: RowBounds,
    horizontal_padding: f64,
) -> usize {
    if !viewport_width.is_finite() || viewport_width <= 0.0 {
        return bounds.clamp(FALLBACK_ITEMS_PER_ROW);
    }
    let (item, _) = item.sanitized();
    let padding = if horizontal_padding.is_finite() {
        horizontal_padding.max(0.0)
    } else {
        0.0
    };
    let available = viewport_width - padding;
    let possible = ((available + item.gap) / (item.size + item.gap)).floor();
    // Finite because size >= 1. Narrow viewports go negative and clamp up to the lower bound.
    let possible = possible.max(0.0) as usize;
    bounds.clamp(possible)
}

/// Number of rows produced by partitioning `len` items with `items_per_row` per row.
pub fn row_count(len: usize, items_per_row: usize) -> usize {
    len.div_ceil(items_per_row.max(1))
}

/// One row of a partition, borrowing the caller's items.
#[derive(Debug)]
pub struct Row<'a, T> {
    /// Zero-based row index, top to bottom.
    pub row_index: usize,
    /// Global index of the row's first item.
    pub start: usize,
    /// Items of this row in display order.
    pub items: &'a [T],
}

impl<T> Clone for Row<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Row<'_, T> {}

impl<'a, T> Row<'a, T> {
    /// Number of items on this row.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the row holds no items. Partitions never produce empty rows.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items paired with their global (row-major) index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &'a T)> + 'a {
        let start = self.start;
        self.items
            .iter()
            .enumerate()
            .map(move |(i, item)| (start + i, item))
    }
}

/// Split `items` into consecutive rows of `items_per_row` (the last row may be shorter).
///
/// `items_per_row` below 1 is treated as 1. An empty slice yields no rows.
pub fn partition<T>(items: &[T], items_per_row: usize) -> Vec<Row<'_, T>> {
    let k = items_per_row.max(1);
    items
        .chunks(k)
        .enumerate()
        .map(|(row_index, chunk)| Row {
            row_index,
            start: row_index * k,
            items: chunk,
        })
        .collect()
}

/// Caller override for the number of items per row.
///
/// Closures `Fn(viewport_width) -> usize` implement this trait. Results below 1 are raised to 1
/// by the engine.
pub trait ItemsPerRowStrategy {
    /// Items per row for the given viewport width (which may be unmeasured).
    fn items_per_row(&self, viewport_width: f64, item: ItemGeometry, bounds: RowBounds) -> usize;
}

/// Default strategy: fit as many items as the width allows, see [`items_per_row`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResponsiveItemsPerRow {
    /// Horizontal gutter budget subtracted from the viewport width.
    pub horizontal_padding: f64,
}

impl Default for ResponsiveItemsPerRow {
    fn default() -> Self {
        Self {
            horizontal_padding: DEFAULT_HORIZONTAL_PADDING_PX,
        }
    }
}

impl ItemsPerRowStrategy for ResponsiveItemsPerRow {
    fn items_per_row(&self, viewport_width: f64, item: ItemGeometry, bounds: RowBounds) -> usize {
        items_per_row(item, viewport_width, bounds, self.horizontal_padding)
    }
}

impl<F> ItemsPerRowStrategy for F
where
    F: Fn(f64) -> usize,
{
    fn items_per_row(&self, viewport_width: f64, _item: ItemGeometry, _bounds: RowBounds) -> usize {
        self(viewport_width)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/partition.rs"]
mod tests;
