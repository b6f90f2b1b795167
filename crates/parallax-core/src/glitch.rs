//! Parameters for the screen-space glitch pass.
//!
//! The pass is driven by a single intensity `factor` in \[0, 1\]. Every frame a
//! fresh set of random distortion parameters is drawn and scaled by the factor;
//! at zero the pass degenerates to a straight copy.

use crate::constants::{GLITCH_COLUMN_WIDTH, GLITCH_FADE_END};
use crate::interpolate::interpolate;
use rand::Rng;
use std::f32::consts::PI;

/// Glitch intensity for a scroll offset: full at the top, gone after `GLITCH_FADE_END`.
#[inline]
pub fn glitch_factor(top: f32) -> f32 {
    interpolate(top, &[0.0, GLITCH_FADE_END], &[1.0, 0.0])
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlitchParams {
    pub bypass: bool,
    pub seed: f32,
    pub amount: f32,
    pub angle: f32,
    pub distortion_x: f32,
    pub distortion_y: f32,
    pub seed_x: f32,
    pub seed_y: f32,
    pub column_width: f32,
}

impl GlitchParams {
    pub fn sample(factor: f32, rng: &mut impl Rng) -> Self {
        let factor = factor.max(0.0);
        let seed = rng.gen::<f32>() * factor;
        if factor <= 0.0 {
            return Self {
                bypass: true,
                seed,
                column_width: GLITCH_COLUMN_WIDTH,
                ..Self::default()
            };
        }
        Self {
            bypass: false,
            seed,
            amount: rng.gen::<f32>() / 90.0 * factor,
            angle: rng.gen_range(-PI..PI) * factor,
            distortion_x: rng.gen_range(0.0..1.0) * factor,
            distortion_y: rng.gen_range(0.0..1.0) * factor,
            seed_x: rng.gen_range(-0.3..0.3) * factor,
            seed_y: rng.gen_range(-0.3..0.3) * factor,
            column_width: GLITCH_COLUMN_WIDTH,
        }
    }
}

/// Square RGBA8 noise texture sampled by the glitch shader for block displacement.
pub fn displacement_map(size: usize, rng: &mut impl Rng) -> Vec<u8> {
    let mut data = vec![0u8; size * size * 4];
    for texel in data.chunks_exact_mut(4) {
        let v: u8 = rng.gen();
        texel[0] = v;
        texel[1] = v;
        texel[2] = v;
        texel[3] = 255;
    }
    data
}
