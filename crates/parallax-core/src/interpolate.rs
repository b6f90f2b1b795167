//! Piecewise-linear curves mapping an input range onto scalar or color outputs.
//!
//! Inputs outside the first/last stop clamp to the nearest endpoint.

use crate::color::Rgb;

/// Locate `input` within ascending `stops`, returning the segment index and the
/// normalized position inside it. `stops` must hold at least two entries.
fn segment(input: f32, stops: &[f32]) -> (usize, f32) {
    debug_assert!(stops.len() >= 2);
    let last = stops.len() - 1;
    if input <= stops[0] {
        return (0, 0.0);
    }
    if input >= stops[last] {
        return (last - 1, 1.0);
    }
    let i = stops
        .windows(2)
        .position(|w| input < w[1])
        .unwrap_or(last - 1);
    let span = stops[i + 1] - stops[i];
    let t = if span > 0.0 {
        (input - stops[i]) / span
    } else {
        1.0
    };
    (i, t)
}

/// Map `input` through the curve `stops → outputs`.
#[inline]
pub fn interpolate(input: f32, stops: &[f32], outputs: &[f32]) -> f32 {
    debug_assert_eq!(stops.len(), outputs.len());
    let (i, t) = segment(input, stops);
    outputs[i] + (outputs[i + 1] - outputs[i]) * t
}

/// Map `input` through a multi-stop color curve, channel by channel.
pub fn interpolate_rgb(input: f32, stops: &[f32], colors: &[Rgb]) -> Rgb {
    debug_assert_eq!(stops.len(), colors.len());
    let (i, t) = segment(input, stops);
    colors[i].lerp(colors[i + 1], t)
}
