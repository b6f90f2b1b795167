// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use parallax_core::constants as core;

#[test]
#[allow(clippy::assertions_on_constants)]
fn quad_budget_covers_the_scene() {
    // background + every image + both texts
    let needed = 1 + parallax_core::data::IMAGES.len() + 2;
    assert!(MAX_QUADS >= needed, "MAX_QUADS={} needed={}", MAX_QUADS, needed);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn uniform_slots_fit_and_are_aligned() {
    // QuadUniforms: two mat4 + three vec4
    let quad_uniform_bytes = (16 * 2 + 4 * 3) * 4;
    assert!(quad_uniform_bytes as u64 <= UNIFORM_SLOT_BYTES);
    assert_eq!(UNIFORM_SLOT_BYTES % 256, 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn spot_cone_is_a_proper_half_angle() {
    assert!(SPOT_ANGLE > 0.0 && SPOT_ANGLE < std::f32::consts::FRAC_PI_2);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn core_constants_have_logical_relationships() {
    // The glitch is gone before the title has faded, which is gone before images are opaque
    assert!(core::GLITCH_FADE_END < core::TEXT_FADE_OUT_END);
    assert!(core::TEXT_FADE_OUT_END < core::IMAGE_FADE_IN_END);

    assert!(core::HOVER_SCALE > 1.0);
    assert!(core::CAMERA_NEAR > 0.0 && core::CAMERA_NEAR < core::CAMERA_FAR);
    // Stars must stay inside the far plane from the camera
    assert!(core::STAR_EXTENT * 3f32.sqrt() + core::CAMERA_Z < core::CAMERA_FAR);
    assert!(core::BACKGROUND_STOPS.windows(2).all(|w| w[0] < w[1]));
    assert!(MAX_FRAME_DT_SEC > 0.0);
}
