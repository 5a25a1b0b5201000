use super::*;
use crate::foundation::core::{Point, ProgressRange};
use crate::layout::partition::partition;

fn geometry(total_rows: usize, items_per_row: usize) -> LayoutGeometry {
    LayoutGeometry {
        anchor_offset_px: 20.0,
        row_vertical_offset_px: 60.0,
        row_scroll_height_px: 800.0,
        trailing_space_px: 240.0,
        items_per_row,
        total_rows,
    }
}

#[test]
fn rows_are_centered_in_the_viewport() {
    let (x0, width) = row_span(3, ItemGeometry::new(450.0, 24.0), 1440.0);
    assert_eq!(width, 3.0 * 450.0 + 2.0 * 24.0);
    assert_eq!(x0, (1440.0 - 1398.0) / 2.0);
    let (x0, _) = row_span(4, ItemGeometry::new(450.0, 24.0), 0.0);
    assert_eq!(x0, 0.0);
}

#[test]
fn transform_pins_the_top_center() {
    let t = row_transform(0.5, 100.0);
    assert_eq!(t * Point::new(100.0, 0.0), Point::new(100.0, 0.0));
    assert_eq!(t * Point::new(200.0, 100.0), Point::new(150.0, 50.0));
    assert_eq!(row_transform(1.0, 42.0), Affine::IDENTITY);
}

#[test]
fn render_visits_items_in_row_major_order() {
    let items: Vec<char> = "abcdefg".chars().collect();
    let rows = partition(&items, 3);
    let g = geometry(rows.len(), 3);
    let mut order = Vec::new();
    let frames = render_rows(
        &rows,
        &g,
        &[],
        ItemGeometry::new(100.0, 10.0),
        1000.0,
        |c, i| {
            order.push(i);
            c.to_ascii_uppercase()
        },
    );
    assert_eq!(order, (0..7).collect::<Vec<_>>());
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[2].items.len(), 1);
    assert_eq!(frames[2].items[0].node, 'G');
    assert_eq!(frames[2].items[0].global_index, 6);
    assert!(frames.iter().all(|f| f.scale == 1.0));
}

#[test]
fn row_frames_carry_slots_sticky_tops_and_scales() {
    let items = [0u8; 6];
    let rows = partition(&items, 2);
    let g = geometry(3, 2);
    let motion = vec![
        RowMotionState {
            row_index: 0,
            range: ProgressRange::new(0.0, 0.5),
            target_scale: 0.8,
            current_scale: 0.8,
        },
        RowMotionState::at_rest(1, ProgressRange::new(0.2, 0.8), 0.9),
    ];
    let frames = render_rows(
        &rows,
        &g,
        &motion,
        ItemGeometry::new(100.0, 20.0).with_height(150.0),
        400.0,
        |_, i| i,
    );
    assert_eq!(frames[0].scale, 0.8);
    assert_eq!(frames[1].scale, 1.0);
    assert_eq!(frames[2].scale, 1.0);
    assert_eq!(frames[1].sticky_top, 80.0);
    assert_eq!(frames[2].slot, Rect::new(0.0, 1600.0, 400.0, 2400.0));
    // Two items of 100 with a 20 gap centered in 400: x0 = 90.
    assert_eq!(frames[0].items[0].rect, Rect::new(90.0, 0.0, 190.0, 150.0));
    assert_eq!(frames[0].items[1].rect, Rect::new(210.0, 0.0, 310.0, 150.0));
}
