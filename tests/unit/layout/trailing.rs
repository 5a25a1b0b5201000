use super::*;

#[test]
fn no_rows_need_no_space() {
    assert_eq!(trailing_space(0, 20.0, 450.0, 60.0, 800.0), 0.0);
}

#[test]
fn single_row_keeps_proportional_reserve() {
    // Tall viewport, tiny item: bottom edge at 20 + 10 = 30, nothing protrudes.
    // margin = max(150, 2000 * 0.15) = 300, reserve = 2000 * 0.25 = 500.
    let space = trailing_space(1, 20.0, 10.0, 60.0, 2000.0);
    assert_eq!(space, 500.0);
    assert!(space >= 2000.0 * 0.25);
}

#[test]
fn short_viewport_uses_larger_margin() {
    // 6 rows, anchor 20, offset 60, item 450, h = 800:
    // bottom = 20 + 5 * 60 + 450 = 770, protrusion 0,
    // margin = max(200, 160) = 200, reserve = 240.
    assert_eq!(trailing_space(6, 20.0, 450.0, 60.0, 800.0), 240.0);
    // 20 rows push the bottom to 20 + 19 * 60 + 450 = 1610 -> protrudes 810 -> 1010.
    assert_eq!(trailing_space(20, 20.0, 450.0, 60.0, 800.0), 1010.0);
}

#[test]
fn regular_viewport_margin() {
    // h = 1000: bottom = 130 + 9 * 80 + 450 = 1300, protrusion 300,
    // margin = max(150, 150) = 150, reserve 250 -> 450.
    assert_eq!(trailing_space(10, 130.0, 450.0, 80.0, 1000.0), 450.0);
}

#[test]
fn reserve_holds_for_any_row_count() {
    for rows in 1..30 {
        for h in [400.0, 899.0, 900.0, 1400.0] {
            let reserve = if h < 900.0 { h * 0.3 } else { h * 0.25 };
            let space = trailing_space(rows, 20.0, 300.0, 40.0, h);
            assert!(space >= reserve, "rows {rows} h {h}: {space} < {reserve}");
        }
    }
}

#[test]
fn space_grows_with_row_count() {
    let mut prev = 0.0;
    for rows in 1..30 {
        let space = trailing_space(rows, 20.0, 450.0, 60.0, 900.0);
        assert!(space >= prev);
        prev = space;
    }
}

#[test]
fn invalid_inputs_are_clamped() {
    let space = trailing_space(3, f64::NAN, -5.0, f64::INFINITY, 1000.0);
    assert!(space.is_finite());
    assert!(space >= 250.0);
}
