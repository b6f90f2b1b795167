// Scene tuning constants shared by the composer, the controller and the web frontend.

use crate::color::Rgb;

macro_rules! rgb8 {
    ($r:expr, $g:expr, $b:expr) => {
        Rgb::new($r as f32 / 255.0, $g as f32 / 255.0, $b as f32 / 255.0)
    };
}

// Camera (fixed perspective looking down -Z at the origin)
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Scroll range as a multiple of the viewport height in CSS px
pub const SCROLL_MAX_FACTOR: f32 = 4.5;

// Background ramp: stop positions as fractions of scroll max, and colors
pub const BACKGROUND_STOPS: [f32; 4] = [0.0, 0.25, 0.5, 1.0];
pub const BACKGROUND_COLORS: [Rgb; 4] = [
    rgb8!(0x27, 0x28, 0x2f),
    rgb8!(0x24, 0x7b, 0xa0),
    rgb8!(0x70, 0xc1, 0xb3),
    rgb8!(0xe8, 0xf3, 0xf1),
];

// Images
pub const IMAGE_PLANE_SIZE: f32 = 5.0; // world-space side of an unscaled image plane
pub const IMAGE_FADE_IN_END: f32 = 500.0; // top at which images are fully opaque
pub const IMAGE_PARALLAX_DIVISOR: f32 = 50_000.0;
pub const IMAGE_Y_STRETCH: f32 = 1.15;
pub const IMAGE_Z_SCROLL_DIVISOR: f32 = 2_000.0;
pub const HOVER_SCALE: f32 = 1.25;

// Spot light following the mouse
pub const LIGHT_MOUSE_DIVISOR: f32 = 100.0;
pub const LIGHT_Z: f32 = 6.5;
pub const LIGHT_INTENSITY: f32 = 1.2;

// Text sprites
pub const TEXT_CANVAS_SIZE: u32 = 2048;
pub const TEXT_BASELINE_FONT_PX: f32 = 410.0; // vertical offset reference used for every text
pub const TEXT_FADE_OUT_END: f32 = 200.0;

// Star field
pub const STAR_COUNT: usize = 1000;
pub const STAR_EXTENT: f32 = 400.0; // coordinates are uniform in [-extent, extent]
pub const STAR_ANGLE_STEP: f64 = 0.01; // degrees per rendered frame
pub const STAR_RADIUS: f32 = 1.0;
pub const STAR_SEGMENTS: u32 = 10;
pub const STAR_COLOR: &str = "#ffdab9"; // peachpuff
pub const STAR_SCROLL_DIVISOR: f32 = 20.0;

// Glitch pass
pub const GLITCH_FADE_END: f32 = 150.0; // top at which the glitch is fully off
pub const GLITCH_COLUMN_WIDTH: f32 = 0.05;
pub const GLITCH_DISPLACEMENT_SIZE: usize = 64;
