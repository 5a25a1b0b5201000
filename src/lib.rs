//! stackscroll is the layout and motion engine behind "stacked, shrinking cards" scroll
//! sections.
//!
//! A flat list of items is split into rows that fit the viewport width. Each row sticks at a
//! fixed offset below the previous one, and one continuous scroll-progress value drives a
//! per-row scale so earlier rows shrink into a pyramid underneath later ones.
//!
//! # Pipeline overview
//!
//! 1. **Partition**: `viewport width -> items per row -> rows` ([`items_per_row`], [`partition`])
//! 2. **Geometry**: `viewport height + item size -> anchor, trailing space` ([`compute_layout`])
//! 3. **Route**: `scroll progress -> per-row window and scale` ([`MotionRouter`])
//! 4. **Render**: `rows + geometry + scales -> positioned, scaled row frames` ([`StackContainer::render`])
//!
//! Steps 1 and 2 run on resize and item changes only; step 3 runs on every scroll tick.
//!
//! The numeric core is pure and takes explicit viewport and scroll snapshots. Host integration
//! (resize and scroll notifications, per-frame coalescing, teardown) lives in
//! [`MountedStack`] on top of [`Signal`].
//!
//! Nothing in the engine fails on bad input: invalid geometry is clamped, missing
//! measurements fall back to static defaults, and an empty item list renders no rows.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod animation;
mod config;
mod engine;
mod foundation;
mod layout;
mod motion;

pub use animation::ease::Ease;
pub use config::model::StackConfig;
pub use engine::container::{LayoutPhase, ScrollSample, StackBuilder, StackContainer};
pub use engine::mount::{FrameUpdate, MountedStack};
pub use engine::render::{PlacedItem, RowFrame, StackFrame};
pub use engine::signal::{Signal, Subscription};
pub use foundation::core::{
    Affine, ItemGeometry, MIN_ITEM_SIZE_PX, Point, ProgressRange, Rect, ScrollExtent,
    ScrollProgress, Size, Vec2, Viewport,
};
pub use foundation::error::{StackError, StackResult};
pub use layout::anchor::{AnchorTiers, MIN_ANCHOR_OFFSET_PX, TopOffsetStrategy, anchor_offset};
pub use layout::geometry::{LayoutGeometry, compute_layout};
pub use layout::partition::{
    DEFAULT_HORIZONTAL_PADDING_PX, FALLBACK_ITEMS_PER_ROW, ItemsPerRowStrategy,
    ResponsiveItemsPerRow, Row, RowBounds, items_per_row, partition, row_count,
};
pub use layout::trailing::{TrailingPolicy, TrailingTier, trailing_space};
pub use motion::router::{
    DEFAULT_MIN_SCALE, DEFAULT_SCALE_STEP, MIN_TARGET_SCALE, MotionRouter, PyramidScale,
    RangePacing, RangeStrategy, RowMotionState, ScaleStrategy, clamp_target_scale, range_for,
    sample_scale, target_scale_for,
};
