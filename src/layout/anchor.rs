//! Resting position of the first row.

use crate::foundation::math::at_least;

/// Lowest resting offset of the first row, in pixels from the viewport top.
pub const MIN_ANCHOR_OFFSET_PX: f64 = 20.0;

/// Height-dependent fractions of the viewport used to place the first row.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnchorTiers {
    /// Viewports shorter than this use `short_fraction`.
    pub short_below_px: f64,
    /// Fraction for short viewports.
    pub short_fraction: f64,
    /// Viewports shorter than this (but not short) use `medium_fraction`.
    pub medium_below_px: f64,
    /// Fraction for medium viewports.
    pub medium_fraction: f64,
    /// Fraction for tall viewports.
    pub tall_fraction: f64,
    /// Floor applied to the computed offset.
    pub min_offset_px: f64,
}

impl Default for AnchorTiers {
    fn default() -> Self {
        Self {
            short_below_px: 900.0,
            short_fraction: 0.15,
            medium_below_px: 1100.0,
            medium_fraction: 0.18,
            tall_fraction: 0.25,
            min_offset_px: MIN_ANCHOR_OFFSET_PX,
        }
    }
}

impl AnchorTiers {
    /// Fraction of the viewport height for this tier.
    pub fn fraction_for(&self, viewport_height: f64) -> f64 {
        if viewport_height < self.short_below_px {
            self.short_fraction
        } else if viewport_height < self.medium_below_px {
            self.medium_fraction
        } else {
            self.tall_fraction
        }
    }

    /// Whether `viewport_height` counts as a short viewport.
    pub fn is_short(&self, viewport_height: f64) -> bool {
        viewport_height < self.short_below_px
    }

    /// `max(viewport_height * fraction - item_size / 2, min_offset_px)`.
    pub fn anchor_offset(&self, viewport_height: f64, item_size: f64) -> f64 {
        let (h, _) = at_least(viewport_height, 0.0);
        let (size, _) = at_least(item_size, 0.0);
        let raw = h * self.fraction_for(h) - size / 2.0;
        raw.max(self.min_offset_px)
    }
}

/// Anchor offset with the default tiers.
pub fn anchor_offset(viewport_height: f64, item_size: f64) -> f64 {
    AnchorTiers::default().anchor_offset(viewport_height, item_size)
}

/// Caller override for the first row's resting offset.
///
/// Closures `Fn(viewport_height, item_size) -> f64` implement this trait.
pub trait TopOffsetStrategy {
    /// Resting offset for the first row.
    fn top_offset(&self, viewport_height: f64, item_size: f64) -> f64;
}

impl TopOffsetStrategy for AnchorTiers {
    fn top_offset(&self, viewport_height: f64, item_size: f64) -> f64 {
        self.anchor_offset(viewport_height, item_size)
    }
}

impl<F> TopOffsetStrategy for F
where
    F: Fn(f64, f64) -> f64,
{
    fn top_offset(&self, viewport_height: f64, item_size: f64) -> f64 {
        self(viewport_height, item_size)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/anchor.rs"]
mod tests;
