use super::*;

fn cards() -> ItemGeometry {
    ItemGeometry::new(450.0, 24.0)
}

#[test]
fn wide_desktop_fits_three_cards() {
    // floor((1440 - 40 + 24) / (450 + 24)) = floor(1424 / 474) = 3
    let k = items_per_row(
        cards(),
        1440.0,
        RowBounds::default(),
        DEFAULT_HORIZONTAL_PADDING_PX,
    );
    assert_eq!(k, 3);
}

#[test]
fn result_is_clamped_to_bounds() {
    let bounds = RowBounds::default();
    assert_eq!(items_per_row(cards(), 200.0, bounds, 40.0), 1);
    assert_eq!(items_per_row(cards(), 10_000.0, bounds, 40.0), 4);
    assert_eq!(
        items_per_row(cards(), 10_000.0, RowBounds::new(1, 6), 40.0),
        6
    );
}

#[test]
fn unmeasured_width_falls_back_to_two() {
    let bounds = RowBounds::default();
    assert_eq!(items_per_row(cards(), 0.0, bounds, 40.0), FALLBACK_ITEMS_PER_ROW);
    assert_eq!(items_per_row(cards(), -5.0, bounds, 40.0), FALLBACK_ITEMS_PER_ROW);
    assert_eq!(
        items_per_row(cards(), f64::NAN, bounds, 40.0),
        FALLBACK_ITEMS_PER_ROW
    );
    assert_eq!(items_per_row(cards(), 0.0, RowBounds::new(1, 1), 40.0), 1);
}

#[test]
fn invalid_geometry_never_divides_by_zero() {
    let k = items_per_row(ItemGeometry::new(0.0, 0.0), 100.0, RowBounds::default(), 0.0);
    assert_eq!(k, 4);
    let k = items_per_row(
        ItemGeometry::new(-3.0, f64::NAN),
        800.0,
        RowBounds::default(),
        f64::INFINITY,
    );
    assert_eq!(k, 4);
}

#[test]
fn items_per_row_is_monotonic_in_width_and_bounded() {
    let bounds = RowBounds::default();
    let mut prev = 0;
    let mut w = 1.0;
    while w <= 4000.0 {
        let k = items_per_row(cards(), w, bounds, DEFAULT_HORIZONTAL_PADDING_PX);
        assert!((1..=4).contains(&k), "width {w} gave {k}");
        assert!(k >= prev, "width {w} decreased from {prev} to {k}");
        prev = k;
        w += 7.0;
    }
}

#[test]
fn bounds_are_sanitized() {
    assert_eq!(RowBounds::new(0, 0).sanitized(), RowBounds::new(1, 1));
    assert_eq!(RowBounds::new(3, 2).sanitized(), RowBounds::new(3, 3));
    assert_eq!(RowBounds::new(3, 2).clamp(1), 3);
}

#[test]
fn partition_round_trips_and_sizes_rows() {
    let items: Vec<u32> = (0..17).collect();
    let rows = partition(&items, 3);
    assert_eq!(rows.len(), row_count(items.len(), 3));
    assert_eq!(
        rows.iter().map(Row::len).collect::<Vec<_>>(),
        vec![3, 3, 3, 3, 3, 2]
    );
    let flat: Vec<u32> = rows.iter().flat_map(|r| r.items.iter().copied()).collect();
    assert_eq!(flat, items);
}

#[test]
fn partition_law_holds_for_many_shapes() {
    for n in 0..40usize {
        let items: Vec<usize> = (0..n).collect();
        for k in 1..=6usize {
            let rows = partition(&items, k);
            assert_eq!(rows.len(), n.div_ceil(k));
            for (i, row) in rows.iter().enumerate() {
                assert_eq!(row.row_index, i);
                assert!(!row.is_empty());
                if i + 1 < rows.len() {
                    assert_eq!(row.len(), k);
                }
                for (global, item) in row.iter() {
                    assert_eq!(global, *item);
                }
            }
        }
    }
}

#[test]
fn partition_is_idempotent() {
    let items = ["a", "b", "c", "d", "e"];
    let a: Vec<_> = partition(&items, 2).iter().map(|r| r.items.to_vec()).collect();
    let b: Vec<_> = partition(&items, 2).iter().map(|r| r.items.to_vec()).collect();
    assert_eq!(a, b);
}

#[test]
fn empty_list_has_no_rows_and_zero_k_acts_as_one() {
    let empty: [u8; 0] = [];
    assert!(partition(&empty, 3).is_empty());
    assert_eq!(row_count(0, 3), 0);
    assert_eq!(partition(&[1, 2], 0).len(), 2);
}

#[test]
fn closures_act_as_strategies() {
    let fixed = |_w: f64| 5usize;
    assert_eq!(
        fixed.items_per_row(100.0, cards(), RowBounds::default()),
        5
    );
    let responsive = ResponsiveItemsPerRow::default();
    assert_eq!(
        responsive.items_per_row(1440.0, cards(), RowBounds::default()),
        3
    );
}
