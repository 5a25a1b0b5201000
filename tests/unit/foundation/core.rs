use super::*;

#[test]
fn viewport_measurement_requires_positive_finite_dimensions() {
    assert!(!Viewport::UNMEASURED.is_measured());
    assert!(!Viewport::new(1440.0, f64::NAN).is_measured());
    assert_eq!(Viewport::new(-1.0, 800.0).measured_width(), None);
    assert_eq!(Viewport::new(1440.0, 800.0).measured_height(), Some(800.0));
    assert_eq!(Viewport::new(0.0, 800.0).size(), Size::new(0.0, 800.0));
}

#[test]
fn item_geometry_clamps_invalid_values() {
    let (g, fixed) = ItemGeometry::new(-10.0, -4.0).with_height(0.0).sanitized();
    assert!(fixed);
    assert_eq!(g.size, MIN_ITEM_SIZE_PX);
    assert_eq!(g.gap, 0.0);
    assert_eq!(g.item_height(), MIN_ITEM_SIZE_PX);

    let (g, fixed) = ItemGeometry::new(450.0, 24.0).sanitized();
    assert!(!fixed);
    assert_eq!(g.item_height(), 450.0);
}

#[test]
fn scroll_progress_is_clamped() {
    assert_eq!(ScrollProgress::new(-0.5).value(), 0.0);
    assert_eq!(ScrollProgress::new(1.5).value(), 1.0);
    assert_eq!(ScrollProgress::new(f64::NAN).value(), 0.0);
}

#[test]
fn scroll_progress_from_page_offset() {
    let extent = ScrollExtent {
        top: 1000.0,
        height: 3000.0,
    };
    assert_eq!(
        ScrollProgress::from_scroll(1000.0, extent, 1000.0),
        Some(ScrollProgress::START)
    );
    assert_eq!(
        ScrollProgress::from_scroll(2000.0, extent, 1000.0),
        Some(ScrollProgress::new(0.5))
    );
    assert_eq!(
        ScrollProgress::from_scroll(9000.0, extent, 1000.0),
        Some(ScrollProgress::END)
    );
}

#[test]
fn scroll_progress_is_unavailable_without_travel() {
    let short = ScrollExtent {
        top: 0.0,
        height: 500.0,
    };
    assert_eq!(ScrollProgress::from_scroll(10.0, short, 800.0), None);
    let tall = ScrollExtent {
        top: 0.0,
        height: 5000.0,
    };
    assert_eq!(ScrollProgress::from_scroll(10.0, tall, 0.0), None);
    assert_eq!(ScrollProgress::from_scroll(f64::NAN, tall, 800.0), None);
}

#[test]
fn progress_range_is_ordered_and_clamped() {
    let r = ProgressRange::new(0.9, -0.2);
    assert_eq!(r, ProgressRange::new(0.0, 0.9));
    assert!(r.contains(ScrollProgress::new(0.5)));
    assert!(!ProgressRange::new(0.3, 0.6).contains(ScrollProgress::new(0.1)));
    assert_eq!(ProgressRange::FULL.len(), 1.0);
}

#[test]
fn deserialized_progress_and_ranges_are_normalized() {
    let p: ScrollProgress = serde_json::from_str("5.0").unwrap();
    assert_eq!(p, ScrollProgress::END);
    let p: ScrollProgress = serde_json::from_str("-1").unwrap();
    assert_eq!(p, ScrollProgress::START);
    assert_eq!(serde_json::to_string(&ScrollProgress::new(0.5)).unwrap(), "0.5");

    let r: ProgressRange = serde_json::from_str(r#"{"start": 0.8, "end": 0.2}"#).unwrap();
    assert_eq!(r, ProgressRange::new(0.2, 0.8));
    let r: ProgressRange = serde_json::from_str(r#"{"start": -3, "end": 7}"#).unwrap();
    assert_eq!(r, ProgressRange::FULL);
}
