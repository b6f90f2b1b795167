use parallax_core::color::Rgb;
use parallax_core::interpolate::{interpolate, interpolate_rgb};

#[test]
fn interpolate_maps_linearly_inside_range() {
    assert_eq!(interpolate(0.0, &[0.0, 150.0], &[1.0, 0.0]), 1.0);
    assert_eq!(interpolate(75.0, &[0.0, 150.0], &[1.0, 0.0]), 0.5);
    assert_eq!(interpolate(150.0, &[0.0, 150.0], &[1.0, 0.0]), 0.0);
}

#[test]
fn interpolate_clamps_outside_range() {
    assert_eq!(interpolate(-10.0, &[0.0, 500.0], &[0.0, 1.0]), 0.0);
    assert_eq!(interpolate(10_000.0, &[0.0, 500.0], &[0.0, 1.0]), 1.0);
}

#[test]
fn interpolate_picks_the_right_segment() {
    let stops = [0.0, 10.0, 20.0, 40.0];
    let outputs = [0.0, 100.0, 50.0, 150.0];
    assert_eq!(interpolate(5.0, &stops, &outputs), 50.0);
    assert_eq!(interpolate(10.0, &stops, &outputs), 100.0);
    assert_eq!(interpolate(15.0, &stops, &outputs), 75.0);
    assert_eq!(interpolate(30.0, &stops, &outputs), 100.0);
}

#[test]
fn degenerate_stops_do_not_divide_by_zero() {
    let v = interpolate(0.0, &[0.0, 0.0], &[3.0, 7.0]);
    assert!(v.is_finite());
}

#[test]
fn color_curve_hits_stops_exactly() {
    let stops = [0.0, 1.0];
    let colors = [Rgb::BLACK, Rgb::WHITE];
    assert_eq!(interpolate_rgb(0.0, &stops, &colors), Rgb::BLACK);
    assert_eq!(interpolate_rgb(1.0, &stops, &colors), Rgb::WHITE);
    let mid = interpolate_rgb(0.5, &stops, &colors);
    assert!((mid.r - 0.5).abs() < 1e-6);
    assert!((mid.g - 0.5).abs() < 1e-6);
    assert!((mid.b - 0.5).abs() < 1e-6);
}

#[test]
fn color_curve_clamps_outside_range() {
    let stops = [10.0, 20.0, 30.0];
    let colors = [Rgb::BLACK, Rgb::new(0.5, 0.0, 1.0), Rgb::WHITE];
    assert_eq!(interpolate_rgb(-5.0, &stops, &colors), Rgb::BLACK);
    assert_eq!(interpolate_rgb(99.0, &stops, &colors), Rgb::WHITE);
}
