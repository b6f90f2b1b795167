use crate::camera::Ray;
use crate::constants::IMAGE_PLANE_SIZE;
use crate::scene::ImageParams;
use glam::{Vec2, Vec3};

/// Distance along `ray` to an axis-aligned quad facing +Z, if it is hit in front of the origin.
#[inline]
pub fn ray_quad(ray: &Ray, center: Vec3, half_extent: Vec2) -> Option<f32> {
    if ray.dir.z.abs() < 1e-6 {
        return None;
    }
    let t = (center.z - ray.origin.z) / ray.dir.z;
    if t < 0.0 {
        return None;
    }
    let hit = ray.origin + ray.dir * t;
    let inside = (hit.x - center.x).abs() <= half_extent.x && (hit.y - center.y).abs() <= half_extent.y;
    inside.then_some(t)
}

/// Index (into `images`) of the nearest image plane under the ray.
pub fn pick_image(ray: &Ray, images: &[ImageParams]) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, img) in images.iter().enumerate() {
        let half = Vec2::splat(IMAGE_PLANE_SIZE * img.scale * 0.5);
        if let Some(t) = ray_quad(ray, img.position, half) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}
