use super::*;
use crate::layout::anchor::AnchorTiers;
use crate::layout::partition::ResponsiveItemsPerRow;

fn layout(config: &StackConfig, viewport: Viewport, items: usize) -> LayoutGeometry {
    compute_layout(
        config,
        viewport,
        items,
        &ResponsiveItemsPerRow {
            horizontal_padding: config.horizontal_padding,
        },
        &config.anchor_tiers,
    )
}

#[test]
fn desktop_layout_for_seventeen_cards() {
    let cfg = StackConfig::default();
    let g = layout(&cfg, Viewport::new(1440.0, 800.0), 17);
    assert_eq!(g.items_per_row, 3);
    assert_eq!(g.total_rows, 6);
    assert_eq!(g.anchor_offset_px, 20.0);
    assert_eq!(g.row_vertical_offset_px, 60.0);
    assert_eq!(g.row_scroll_height_px, 800.0);
    // Bottom of row 6 = 20 + 5 * 60 + 450 = 770 < 800 -> reserve 240 wins over margin 200.
    assert_eq!(g.trailing_space_px, 240.0);
    assert_eq!(g.content_height(), 6.0 * 800.0 + 240.0);
}

#[test]
fn sticky_tops_keep_constant_overlap() {
    let g = layout(&StackConfig::default(), Viewport::new(1440.0, 1600.0), 12);
    for i in 1..g.total_rows {
        assert_eq!(g.sticky_top(i) - g.sticky_top(i - 1), 60.0);
        assert_eq!(g.slot_top(i) - g.slot_top(i - 1), 1600.0);
    }
    assert_eq!(g.sticky_top(0), 1600.0 * 0.25 - 225.0);
}

#[test]
fn empty_list_has_no_rows_or_trailing_space() {
    let g = layout(&StackConfig::default(), Viewport::new(1440.0, 900.0), 0);
    assert_eq!(g.total_rows, 0);
    assert_eq!(g.trailing_space_px, 0.0);
    assert_eq!(g.content_height(), 0.0);
}

#[test]
fn unmeasured_viewport_uses_fallbacks() {
    let cfg = StackConfig::default();
    let g = layout(&cfg, Viewport::UNMEASURED, 5);
    assert_eq!(g.items_per_row, 2);
    assert_eq!(g.total_rows, 3);
    assert_eq!(g.anchor_offset_px, 20.0);
    assert_eq!(g.row_scroll_height_px, 450.0 + 60.0);
}

#[test]
fn fixed_overrides_win() {
    let cfg = StackConfig {
        top_offset: Some(96.0),
        row_scroll_height: Some(500.0),
        ..StackConfig::default()
    };
    let g = compute_layout(
        &cfg,
        Viewport::new(1440.0, 1000.0),
        10,
        &|_w: f64| 0usize,
        &AnchorTiers::default(),
    );
    assert_eq!(g.items_per_row, 1);
    assert_eq!(g.total_rows, 10);
    assert_eq!(g.anchor_offset_px, 96.0);
    assert_eq!(g.row_scroll_height_px, 500.0);
}

#[test]
fn top_offset_strategy_is_used_without_fixed_offset() {
    let cfg = StackConfig::default();
    let g = compute_layout(
        &cfg,
        Viewport::new(1440.0, 1000.0),
        3,
        &ResponsiveItemsPerRow::default(),
        &|h: f64, _s: f64| h / 10.0,
    );
    assert_eq!(g.anchor_offset_px, 100.0);
}
