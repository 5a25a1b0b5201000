//! Scroll space reserved below the stack so the last row can settle.

use crate::foundation::math::at_least;

/// Margin and reserve parameters for one viewport class.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrailingTier {
    /// Minimum safety margin in pixels.
    pub margin_min_px: f64,
    /// Safety margin as a fraction of viewport height (the larger of the two wins).
    pub margin_fraction: f64,
    /// Minimum total reserve as a fraction of viewport height.
    pub reserve_fraction: f64,
}

/// Trailing space parameters for short and regular viewports.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrailingPolicy {
    /// Viewports shorter than this use the `short` tier.
    pub short_below_px: f64,
    /// Tier for short viewports.
    pub short: TrailingTier,
    /// Tier for all other viewports.
    pub regular: TrailingTier,
}

impl Default for TrailingPolicy {
    fn default() -> Self {
        Self {
            short_below_px: 900.0,
            short: TrailingTier {
                margin_min_px: 200.0,
                margin_fraction: 0.2,
                reserve_fraction: 0.3,
            },
            regular: TrailingTier {
                margin_min_px: 150.0,
                margin_fraction: 0.15,
                reserve_fraction: 0.25,
            },
        }
    }
}

impl TrailingPolicy {
    /// Extra scroll distance after the stack.
    ///
    /// The bottom edge of the last row sits at
    /// `anchor + (total_rows - 1) * row_vertical_offset + item_height`; whatever protrudes past
    /// the viewport bottom is reserved plus a safety margin, and the result never drops below
    /// the tier's proportional reserve. No rows need no space.
    pub fn trailing_space(
        &self,
        total_rows: usize,
        anchor_offset: f64,
        item_height: f64,
        row_vertical_offset: f64,
        viewport_height: f64,
    ) -> f64 {
        if total_rows == 0 {
            return 0.0;
        }
        let (h, _) = at_least(viewport_height, 0.0);
        let (anchor, _) = at_least(anchor_offset, 0.0);
        let (item_height, _) = at_least(item_height, 0.0);
        let (row_offset, _) = at_least(row_vertical_offset, 0.0);

        let tier = if h < self.short_below_px {
            self.short
        } else {
            self.regular
        };
        let last_bottom = anchor + (total_rows - 1) as f64 * row_offset + item_height;
        let protrusion = (last_bottom - h).max(0.0);
        let margin = tier.margin_min_px.max(h * tier.margin_fraction);
        let reserve = h * tier.reserve_fraction;
        (protrusion + margin).max(reserve)
    }
}

/// Trailing space with the default policy.
pub fn trailing_space(
    total_rows: usize,
    anchor_offset: f64,
    item_height: f64,
    row_vertical_offset: f64,
    viewport_height: f64,
) -> f64 {
    TrailingPolicy::default().trailing_space(
        total_rows,
        anchor_offset,
        item_height,
        row_vertical_offset,
        viewport_height,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/layout/trailing.rs"]
mod tests;
