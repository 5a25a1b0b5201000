use crate::{
    animation::ease::Ease,
    foundation::core::ItemGeometry,
    foundation::error::{StackError, StackResult},
    foundation::math::at_least,
    layout::anchor::AnchorTiers,
    layout::partition::{DEFAULT_HORIZONTAL_PADDING_PX, RowBounds},
    layout::trailing::TrailingPolicy,
    motion::router::{DEFAULT_MIN_SCALE, DEFAULT_SCALE_STEP, MIN_TARGET_SCALE, RangePacing},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Geometry and pacing parameters for one stacked scroll section.
///
/// Every field has a default, so `{}` is a valid JSON config. The engine never rejects a config:
/// it runs on [`StackConfig::sanitized`]. [`StackConfig::validate`] is for callers that want to
/// surface mistakes instead.
pub struct StackConfig {
    /// Item width (and height unless `item_height` is set), in pixels.
    pub item_size: f64,
    /// Horizontal gap between items of one row.
    pub item_gap: f64,
    /// Item height for non-square items.
    pub item_height: Option<f64>,
    /// Vertical distance between consecutive rows' sticky tops.
    pub row_vertical_offset: f64,
    /// Scroll distance allotted to each row; defaults to the viewport height.
    pub row_scroll_height: Option<f64>,
    /// Fixed resting offset of the first row, bypassing the anchor tiers.
    pub top_offset: Option<f64>,
    /// Floor for every row's target scale.
    pub min_scale: f64,
    /// Scale reduction per row of distance from the last row.
    pub scale_reduction: f64,
    /// Bounds on items per row.
    pub row_bounds: RowBounds,
    /// Horizontal gutter budget subtracted from the viewport width.
    pub horizontal_padding: f64,
    /// Pacing of per-row activation windows.
    pub range_pacing: RangePacing,
    /// Viewport-height tiers for the first row's resting offset.
    pub anchor_tiers: AnchorTiers,
    /// Trailing space margins and reserves.
    pub trailing: TrailingPolicy,
    /// Easing applied to row-local progress.
    pub ease: Ease,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            item_size: 450.0,
            item_gap: 24.0,
            item_height: None,
            row_vertical_offset: 60.0,
            row_scroll_height: None,
            top_offset: None,
            min_scale: DEFAULT_MIN_SCALE,
            scale_reduction: DEFAULT_SCALE_STEP,
            row_bounds: RowBounds::default(),
            horizontal_padding: DEFAULT_HORIZONTAL_PADDING_PX,
            range_pacing: RangePacing::default(),
            anchor_tiers: AnchorTiers::default(),
            trailing: TrailingPolicy::default(),
            ease: Ease::Linear,
        }
    }
}

impl StackConfig {
    /// Parse a JSON config.
    pub fn from_json_str(s: &str) -> StackResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Item footprint described by this config.
    pub fn item_geometry(&self) -> ItemGeometry {
        ItemGeometry {
            size: self.item_size,
            gap: self.item_gap,
            height: self.item_height,
        }
    }

    /// Report the first invalid field.
    pub fn validate(&self) -> StackResult<()> {
        for (name, value) in [
            ("item_size", self.item_size),
            ("row_vertical_offset", self.row_vertical_offset),
            ("min_scale", self.min_scale),
            ("scale_reduction", self.scale_reduction),
            ("horizontal_padding", self.horizontal_padding),
            ("range_pacing.budget", self.range_pacing.budget),
            ("range_pacing.head_start", self.range_pacing.head_start),
        ] {
            if !value.is_finite() {
                return Err(StackError::validation(format!("{name} must be finite")));
            }
        }
        if self.item_size <= 0.0 {
            return Err(StackError::validation("item_size must be > 0"));
        }
        if !self.item_gap.is_finite() || self.item_gap < 0.0 {
            return Err(StackError::validation("item_gap must be finite and >= 0"));
        }
        for (name, value) in [
            ("item_height", self.item_height),
            ("row_scroll_height", self.row_scroll_height),
        ] {
            if let Some(v) = value
                && (!v.is_finite() || v <= 0.0)
            {
                return Err(StackError::validation(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if let Some(top) = self.top_offset
            && !top.is_finite()
        {
            return Err(StackError::validation("top_offset must be finite"));
        }
        if self.row_vertical_offset < 0.0 {
            return Err(StackError::validation("row_vertical_offset must be >= 0"));
        }
        if self.min_scale <= 0.0 || self.min_scale > 1.0 {
            return Err(StackError::validation("min_scale must be in (0, 1]"));
        }
        if self.scale_reduction < 0.0 {
            return Err(StackError::validation("scale_reduction must be >= 0"));
        }
        if self.row_bounds.min == 0 || self.row_bounds.min > self.row_bounds.max {
            return Err(StackError::validation(
                "row_bounds must satisfy 1 <= min <= max",
            ));
        }
        if self.range_pacing.budget <= 0.0 || self.range_pacing.budget > 1.0 {
            return Err(StackError::validation("range_pacing.budget must be in (0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.range_pacing.head_start) {
            return Err(StackError::validation(
                "range_pacing.head_start must be in [0, 1]",
            ));
        }
        Ok(())
    }

    /// Copy with every invalid value clamped to a safe one.
    pub fn sanitized(&self) -> Self {
        let mut out = self.clone();
        let (geometry, clamped) = self.item_geometry().sanitized();
        if clamped {
            tracing::warn!(
                size = self.item_size,
                gap = self.item_gap,
                "invalid item geometry clamped"
            );
        }
        out.item_size = geometry.size;
        out.item_gap = geometry.gap;
        out.item_height = geometry.height;

        out.row_vertical_offset = clamp_logged("row_vertical_offset", self.row_vertical_offset, 0.0);
        out.row_scroll_height = self
            .row_scroll_height
            .map(|v| clamp_logged("row_scroll_height", v, 1.0));
        out.top_offset = self.top_offset.filter(|v| v.is_finite());
        out.min_scale = if self.min_scale.is_finite() {
            self.min_scale.clamp(MIN_TARGET_SCALE, 1.0)
        } else {
            DEFAULT_MIN_SCALE
        };
        out.scale_reduction = clamp_logged("scale_reduction", self.scale_reduction, 0.0);
        out.horizontal_padding = clamp_logged("horizontal_padding", self.horizontal_padding, 0.0);
        out.row_bounds = self.row_bounds.sanitized();
        out.range_pacing = RangePacing {
            budget: finite_in(self.range_pacing.budget, 0.0, 1.0, 0.8),
            head_start: finite_in(self.range_pacing.head_start, 0.0, 1.0, 0.2),
        };
        out
    }
}

fn clamp_logged(name: &str, value: f64, min: f64) -> f64 {
    let (v, clamped) = at_least(value, min);
    if clamped {
        tracing::warn!(field = name, value, min, "invalid config value clamped");
    }
    v
}

fn finite_in(value: f64, lo: f64, hi: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(lo, hi)
    } else {
        fallback
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
