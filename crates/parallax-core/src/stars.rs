use crate::constants::{STAR_ANGLE_STEP, STAR_COUNT, STAR_EXTENT};
use glam::{Mat4, Quat, Vec3};
use rand::Rng;

/// A cluster of spheres that slowly tumbles and breathes, independent of input.
///
/// The angle grows by a fixed step per rendered frame and is never wrapped.
/// It is derived from a frame counter, so it stays exact however long the page runs.
#[derive(Clone, Debug)]
pub struct StarField {
    coords: Vec<Vec3>,
    frames: u64,
}

impl StarField {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self::with_count(rng, STAR_COUNT)
    }

    pub fn with_count(rng: &mut impl Rng, count: usize) -> Self {
        let mut axis = || rng.gen_range(-STAR_EXTENT..=STAR_EXTENT);
        let coords = (0..count)
            .map(|_| Vec3::new(axis(), axis(), axis()))
            .collect();
        Self { coords, frames: 0 }
    }

    pub fn coords(&self) -> &[Vec3] {
        &self.coords
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Accumulated angle in degrees.
    pub fn angle(&self) -> f64 {
        STAR_ANGLE_STEP * self.frames as f64
    }

    pub fn advance(&mut self) {
        self.frames += 1;
    }
}

/// Group transform of the star field for a given accumulated angle (degrees).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarsParams {
    pub position: Vec3,
    /// Euler XYZ rotation in radians; all three axes share one value.
    pub rotation: Vec3,
    pub scale: f32,
}

impl StarsParams {
    pub fn from_angle(angle: f64, position: Vec3) -> Self {
        let r = angle.to_radians().sin() as f32;
        let s = (angle * 2.0).to_radians().cos() as f32;
        Self {
            position,
            rotation: Vec3::splat(r),
            scale: s,
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            glam::EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), rotation, self.position)
    }
}
