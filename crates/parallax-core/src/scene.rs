//! Per-frame scene composition.
//!
//! [`compose`] maps the two animated inputs onto every layer's visual
//! parameters with fixed, hand-authored curves. It holds no state: the same
//! inputs always produce the same [`SceneFrame`].

use crate::camera::Viewport;
use crate::color::Rgb;
use crate::constants::*;
use crate::data::{ImageDescriptor, TextDescriptor, FOOTER, TITLE};
use crate::glitch::glitch_factor;
use crate::interpolate::{interpolate, interpolate_rgb};
use crate::stars::StarsParams;
use glam::{Vec2, Vec3};
use smallvec::SmallVec;

/// Current values of the two animated inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneInputs {
    pub top: f32,
    /// Pointer offset from the viewport center, CSS px (y grows downward).
    pub mouse: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotLight {
    pub position: Vec3,
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageParams {
    /// Index into the descriptor list the frame was composed from.
    pub index: usize,
    pub position: Vec3,
    /// Descriptor scale multiplied by the hover factor.
    pub scale: f32,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextParams {
    pub text: TextDescriptor,
    pub position: Vec3,
    pub opacity: f32,
    /// Side of the square sprite in world units.
    pub sprite_size: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneFrame {
    pub viewport: Viewport,
    pub background: Rgb,
    /// World-space size of the background plane (covers the whole view).
    pub background_size: Vec2,
    pub light: SpotLight,
    pub glitch_factor: f32,
    pub stars: StarsParams,
    pub images: SmallVec<[ImageParams; 16]>,
    pub texts: [TextParams; 2],
}

pub fn background_color(top: f32, scroll_max: f32) -> Rgb {
    let stops = BACKGROUND_STOPS.map(|s| s * scroll_max);
    interpolate_rgb(top, &stops, &BACKGROUND_COLORS)
}

#[inline]
pub fn image_opacity(top: f32) -> f32 {
    interpolate(top, &[0.0, IMAGE_FADE_IN_END], &[0.0, 1.0])
}

pub fn image_position(img: &ImageDescriptor, inputs: &SceneInputs, scroll_max: f32) -> Vec3 {
    let f = img.depth_factor;
    let SceneInputs { top, mouse } = *inputs;
    Vec3::new(
        (-mouse.x * f) / IMAGE_PARALLAX_DIVISOR + img.x,
        (mouse.y * f) / IMAGE_PARALLAX_DIVISOR
            + img.y * IMAGE_Y_STRETCH
            + ((top * f) / scroll_max) * 2.0,
        img.z + top / IMAGE_Z_SCROLL_DIVISOR,
    )
}

#[inline]
pub fn title_opacity(top: f32) -> f32 {
    interpolate(top, &[0.0, TEXT_FADE_OUT_END], &[1.0, 0.0])
}

pub fn light_for_mouse(mouse: Vec2) -> SpotLight {
    SpotLight {
        position: Vec3::new(
            mouse.x / LIGHT_MOUSE_DIVISOR,
            -mouse.y / LIGHT_MOUSE_DIVISOR,
            LIGHT_Z,
        ),
        intensity: LIGHT_INTENSITY,
    }
}

/// Derive every layer's parameters for one frame.
///
/// `hover_factors[i]` multiplies the scale of `images[i]`; missing entries count as 1.
pub fn compose(
    inputs: &SceneInputs,
    viewport: &Viewport,
    images: &[ImageDescriptor],
    hover_factors: &[f32],
    star_angle: f64,
) -> SceneFrame {
    let top = inputs.top;
    let scroll_max = viewport.scroll_max();
    let world = viewport.world_size();
    let sprite_size = world.x.max(world.y);

    let opacity = image_opacity(top);
    let images = images
        .iter()
        .enumerate()
        .map(|(index, img)| ImageParams {
            index,
            position: image_position(img, inputs, scroll_max),
            scale: img.scale * hover_factors.get(index).copied().unwrap_or(1.0),
            opacity,
        })
        .collect();

    let texts = [
        TextParams {
            text: TITLE,
            position: Vec3::new(0.0, -1.0 + top / 200.0, 0.0),
            opacity: title_opacity(top),
            sprite_size,
        },
        TextParams {
            text: FOOTER,
            position: Vec3::new(0.0, -20.0 + ((top * 10.0) / scroll_max) * 2.0, 0.0),
            opacity: 1.0,
            sprite_size,
        },
    ];

    SceneFrame {
        viewport: *viewport,
        background: background_color(top, scroll_max),
        background_size: world,
        light: light_for_mouse(inputs.mouse),
        glitch_factor: glitch_factor(top),
        stars: StarsParams::from_angle(
            star_angle,
            Vec3::new(0.0, -1.0 + top / STAR_SCROLL_DIVISOR, 0.0),
        ),
        images,
        texts,
    }
}
