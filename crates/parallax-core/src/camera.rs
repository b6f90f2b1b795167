//! Fixed perspective camera and the viewport it projects onto.
//!
//! These types avoid platform-specific APIs; the web frontend fills a
//! [`Viewport`] from the canvas' CSS size every frame.

use crate::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_Z, SCROLL_MAX_FACTOR};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The scene camera for a viewport of the given aspect ratio.
    pub fn scene(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Canvas size in CSS pixels, never smaller than 1x1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width_px: f32,
    height_px: f32,
}

impl Viewport {
    pub fn new(width_px: f32, height_px: f32) -> Self {
        Self {
            width_px: width_px.max(1.0),
            height_px: height_px.max(1.0),
        }
    }

    pub fn width_px(&self) -> f32 {
        self.width_px
    }

    pub fn height_px(&self) -> f32 {
        self.height_px
    }

    pub fn aspect(&self) -> f32 {
        self.width_px / self.height_px
    }

    /// Scroll offset at which the scene reaches its final state.
    pub fn scroll_max(&self) -> f32 {
        self.height_px * SCROLL_MAX_FACTOR
    }

    pub fn camera(&self) -> Camera {
        Camera::scene(self.aspect())
    }

    /// Visible world-space extent of the z = 0 plane.
    pub fn world_size(&self) -> Vec2 {
        let height = 2.0 * (CAMERA_FOV_DEG.to_radians() / 2.0).tan() * CAMERA_Z;
        Vec2::new(height * self.aspect(), height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// World-space ray through a point given in CSS pixels from the canvas' top-left corner.
pub fn screen_to_world_ray(viewport: &Viewport, px: Vec2) -> Ray {
    let ndc_x = (2.0 * px.x / viewport.width_px) - 1.0;
    let ndc_y = 1.0 - (2.0 * px.y / viewport.height_px);
    let camera = viewport.camera();
    let inv = camera.view_projection().inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = camera.eye;
    Ray {
        origin: ro,
        dir: (p1 - ro).normalize(),
    }
}
