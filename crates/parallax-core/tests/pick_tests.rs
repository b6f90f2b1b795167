use glam::{Vec2, Vec3};
use parallax_core::camera::screen_to_world_ray;
use parallax_core::pick::{pick_image, ray_quad};
use parallax_core::{ImageParams, Ray, Viewport};

fn plane(index: usize, position: Vec3, scale: f32) -> ImageParams {
    ImageParams {
        index,
        position,
        scale,
        opacity: 1.0,
    }
}

fn straight_down_z(x: f32, y: f32) -> Ray {
    Ray {
        origin: Vec3::new(x, y, 5.0),
        dir: Vec3::NEG_Z,
    }
}

#[test]
fn center_ray_looks_down_negative_z() {
    let vp = Viewport::new(800.0, 600.0);
    let ray = screen_to_world_ray(&vp, Vec2::new(400.0, 300.0));
    assert_eq!(ray.origin, Vec3::new(0.0, 0.0, 5.0));
    assert!((ray.dir - Vec3::NEG_Z).length() < 1e-4);
}

#[test]
fn edge_ray_meets_the_edge_of_the_visible_plane() {
    let vp = Viewport::new(800.0, 600.0);
    let world = vp.world_size();
    let ray = screen_to_world_ray(&vp, Vec2::new(0.0, 0.0));
    let t = -ray.origin.z / ray.dir.z;
    let hit = ray.origin + ray.dir * t;
    assert!((hit.x - -world.x / 2.0).abs() < 1e-3);
    assert!((hit.y - world.y / 2.0).abs() < 1e-3);
}

#[test]
fn ray_quad_hits_inside_and_misses_outside() {
    let half = Vec2::splat(1.0);
    assert_eq!(ray_quad(&straight_down_z(0.5, -0.5), Vec3::ZERO, half), Some(5.0));
    assert_eq!(ray_quad(&straight_down_z(1.5, 0.0), Vec3::ZERO, half), None);
}

#[test]
fn ray_quad_ignores_planes_behind_the_origin() {
    let half = Vec2::splat(1.0);
    assert_eq!(ray_quad(&straight_down_z(0.0, 0.0), Vec3::new(0.0, 0.0, 6.0), half), None);
}

#[test]
fn ray_parallel_to_the_plane_misses() {
    let ray = Ray {
        origin: Vec3::ZERO,
        dir: Vec3::X,
    };
    assert_eq!(ray_quad(&ray, Vec3::ZERO, Vec2::splat(10.0)), None);
}

#[test]
fn pick_prefers_the_nearest_plane() {
    let images = [
        plane(0, Vec3::new(0.0, 0.0, -2.0), 1.0),
        plane(1, Vec3::new(0.0, 0.0, 1.0), 1.0),
        plane(2, Vec3::new(0.0, 0.0, 0.0), 1.0),
    ];
    assert_eq!(pick_image(&straight_down_z(0.0, 0.0), &images), Some(1));
}

#[test]
fn pick_uses_scaled_extent() {
    let small = [plane(0, Vec3::ZERO, 0.2)];
    let large = [plane(0, Vec3::ZERO, 1.0)];
    // unscaled half extent is 2.5
    let ray = straight_down_z(2.0, 0.0);
    assert_eq!(pick_image(&ray, &small), None);
    assert_eq!(pick_image(&ray, &large), Some(0));
}

#[test]
fn pick_on_empty_scene_is_none() {
    assert_eq!(pick_image(&straight_down_z(0.0, 0.0), &[]), None);
}
