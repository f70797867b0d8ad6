use gpui_chart_cursor::data_types::AxisRange;
use gpui_chart_cursor::view_controller::ViewController;

#[test]
fn test_pan_axis_x() {
    let mut range = AxisRange::new(0.0, 100.0);
    // 10px to the right over 100px: the domain moves 10 units left
    ViewController::pan_axis(&mut range, 10.0, 100.0, false);
    assert_eq!(range.min, -10.0);
    assert_eq!(range.max, 90.0);
}

#[test]
fn test_pan_axis_y() {
    let mut range = AxisRange::new(0.0, 100.0);
    // 10px down (positive in GPUI) moves the values up
    ViewController::pan_axis(&mut range, 10.0, 100.0, true);
    assert_eq!(range.min, 10.0);
    assert_eq!(range.max, 110.0);
}

#[test]
fn test_pan_axis_ignores_empty_viewport() {
    let mut range = AxisRange::new(0.0, 100.0);
    ViewController::pan_axis(&mut range, 10.0, 0.0, false);
    assert_eq!(range, AxisRange::new(0.0, 100.0));
}

#[test]
fn test_zoom_axis_at() {
    let mut range = AxisRange::new(0.0, 100.0);
    // x2 zoom (factor 0.5) at the centre
    ViewController::zoom_axis_at(&mut range, 0.5, 0.5);
    assert_eq!(range.min, 25.0);
    assert_eq!(range.max, 75.0);
}

#[test]
fn test_compute_zoom_factor() {
    assert_eq!(ViewController::compute_zoom_factor(100.0, 100.0), 0.5);
    assert_eq!(ViewController::compute_zoom_factor(-100.0, 100.0), 2.0);
}

#[test]
fn test_compute_auto_fit() {
    let (min, max) = ViewController::compute_auto_fit(10.0, 20.0, 0.1);
    assert_eq!(min, 9.0);
    assert_eq!(max, 21.0);
}

#[test]
fn test_compute_auto_fit_without_data() {
    let (min, max) = ViewController::compute_auto_fit(f64::INFINITY, f64::NEG_INFINITY, 0.1);
    assert_eq!((min, max), (0.0, 100.0));
}

#[test]
fn test_map_to_pct() {
    assert_eq!(ViewController::map_to_pct(50.0, 200.0), 0.25);
    assert_eq!(ViewController::map_to_pct(-10.0, 200.0), 0.0);
    assert_eq!(ViewController::map_to_pct(300.0, 200.0), 1.0);
    assert_eq!(ViewController::map_to_pct(10.0, 0.0), 0.0);
}
