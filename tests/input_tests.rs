// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn centered_offset_is_zero_at_window_middle() {
    let m = centered_offset(Vec2::new(640.0, 360.0), 1280.0, 720.0);
    assert_eq!(m, Vec2::ZERO);
}

#[test]
fn centered_offset_keeps_screen_orientation() {
    // Top-left corner: left of and above the center, y grows downward
    let m = centered_offset(Vec2::new(0.0, 0.0), 1280.0, 720.0);
    assert_eq!(m, Vec2::new(-640.0, -360.0));

    let m = centered_offset(Vec2::new(1280.0, 720.0), 1280.0, 720.0);
    assert_eq!(m, Vec2::new(640.0, 360.0));
}

#[test]
fn canvas_relative_subtracts_origin() {
    let p = canvas_relative(Vec2::new(110.0, 60.0), Vec2::new(10.0, 20.0));
    assert_eq!(p, Vec2::new(100.0, 40.0));
}

#[test]
fn sanitize_scroll_top_passes_finite_values() {
    assert_eq!(sanitize_scroll_top(0.0), 0.0);
    assert_eq!(sanitize_scroll_top(1234.5), 1234.5);
    // Elastic overscroll is forwarded as-is; the curves clamp it
    assert_eq!(sanitize_scroll_top(-12.0), -12.0);
}

#[test]
fn sanitize_scroll_top_rejects_non_finite() {
    assert_eq!(sanitize_scroll_top(f64::NAN), 0.0);
    assert_eq!(sanitize_scroll_top(f64::INFINITY), 0.0);
}
