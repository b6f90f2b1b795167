use glam::{Vec2, Vec3};
use parallax_core::data::{ImageDescriptor, IMAGES};
use parallax_core::{background_color, compose, glitch, SceneInputs, Viewport};

fn viewport() -> Viewport {
    Viewport::new(1280.0, 800.0)
}

fn inputs(top: f32, mouse: Vec2) -> SceneInputs {
    SceneInputs { top, mouse }
}

#[test]
fn scroll_max_is_four_and_a_half_viewports() {
    assert_eq!(viewport().scroll_max(), 3600.0);
}

#[test]
fn initial_frame_matches_the_opening_state() {
    let vp = viewport();
    let f = compose(&inputs(0.0, Vec2::ZERO), &vp, IMAGES, &[], 0.0);
    assert_eq!(f.background.to_hex(), "#27282F".to_lowercase());
    assert_eq!(f.texts[0].opacity, 1.0);
    assert!(f.images.iter().all(|i| i.opacity == 0.0));
    assert_eq!(f.glitch_factor, 1.0);
    assert_eq!(f.images.len(), IMAGES.len());
}

#[test]
fn final_frame_reaches_the_last_background_stop() {
    let vp = viewport();
    let f = compose(&inputs(vp.scroll_max(), Vec2::ZERO), &vp, IMAGES, &[], 0.0);
    assert_eq!(f.background.to_hex(), "#e8f3f1");
    assert_eq!(f.glitch_factor, 0.0);
    assert_eq!(f.texts[0].opacity, 0.0);
    assert!(f.images.iter().all(|i| i.opacity == 1.0));
}

#[test]
fn background_hits_intermediate_stops() {
    let max = viewport().scroll_max();
    assert_eq!(background_color(max * 0.25, max).to_hex(), "#247ba0");
    assert_eq!(background_color(max * 0.5, max).to_hex(), "#70c1b3");
}

#[test]
fn background_clamps_outside_scroll_range() {
    let max = viewport().scroll_max();
    assert_eq!(background_color(-500.0, max).to_hex(), "#27282f");
    assert_eq!(background_color(max * 3.0, max).to_hex(), "#e8f3f1");
}

#[test]
fn background_is_piecewise_linear_between_stops() {
    let max = viewport().scroll_max();
    let stops = [0.0, 0.25, 0.5, 1.0].map(|s| s * max);
    for w in stops.windows(2) {
        let a = background_color(w[0], max);
        let b = background_color(w[1], max);
        let mut prev = a;
        for k in 1..=20 {
            let top = w[0] + (w[1] - w[0]) * k as f32 / 20.0;
            let c = background_color(top, max);
            // every channel moves in one direction only inside a segment
            for (p, n, from, to) in [
                (prev.r, c.r, a.r, b.r),
                (prev.g, c.g, a.g, b.g),
                (prev.b, c.b, a.b, b.b),
            ] {
                if to >= from {
                    assert!(n >= p - 1e-6);
                } else {
                    assert!(n <= p + 1e-6);
                }
            }
            prev = c;
        }
        // midpoint is the average of the two stop colors
        let mid = background_color((w[0] + w[1]) / 2.0, max);
        assert!((mid.r - (a.r + b.r) / 2.0).abs() < 1e-4);
        assert!((mid.g - (a.g + b.g) / 2.0).abs() < 1e-4);
        assert!((mid.b - (a.b + b.b) / 2.0).abs() < 1e-4);
    }
}

#[test]
fn glitch_factor_fades_out_by_150() {
    assert_eq!(glitch::glitch_factor(0.0), 1.0);
    assert_eq!(glitch::glitch_factor(75.0), 0.5);
    assert_eq!(glitch::glitch_factor(150.0), 0.0);
    assert_eq!(glitch::glitch_factor(151.0), 0.0);
    assert_eq!(glitch::glitch_factor(10_000.0), 0.0);
}

#[test]
fn image_rests_at_descriptor_position_without_input() {
    let img = ImageDescriptor {
        url: "a.jpg",
        x: 2.0,
        y: -4.0,
        depth_factor: 20.0,
        z: -1.0,
        scale: 0.5,
    };
    let vp = viewport();
    let f = compose(&inputs(0.0, Vec2::ZERO), &vp, &[img], &[], 0.0);
    let p = f.images[0].position;
    assert!((p - Vec3::new(2.0, -4.6, -1.0)).length() < 1e-5);
    assert_eq!(f.images[0].scale, 0.5);
}

#[test]
fn image_parallax_follows_mouse_and_scroll() {
    let img = ImageDescriptor {
        url: "a.jpg",
        x: 0.0,
        y: 0.0,
        depth_factor: 50.0,
        z: 0.0,
        scale: 1.0,
    };
    let vp = viewport();
    let max = vp.scroll_max();
    let f = compose(&inputs(max, Vec2::new(1000.0, 500.0)), &vp, &[img], &[], 0.0);
    let p = f.images[0].position;
    // x moves against the mouse, y with it; scrolling to the end lifts by 2 * factor
    assert!((p.x - -1.0).abs() < 1e-5);
    assert!((p.y - (0.5 + 100.0)).abs() < 1e-3);
    assert!((p.z - max / 2000.0).abs() < 1e-5);
}

#[test]
fn hover_factor_multiplies_scale() {
    let vp = viewport();
    let f = compose(&inputs(0.0, Vec2::ZERO), &vp, &IMAGES[..2], &[1.25], 0.0);
    assert!((f.images[0].scale - IMAGES[0].scale * 1.25).abs() < 1e-6);
    // missing entries count as idle
    assert_eq!(f.images[1].scale, IMAGES[1].scale);
}

#[test]
fn texts_follow_their_curves() {
    let vp = viewport();
    let max = vp.scroll_max();
    let f = compose(&inputs(100.0, Vec2::ZERO), &vp, IMAGES, &[], 0.0);
    assert_eq!(f.texts[0].opacity, 0.5);
    assert!((f.texts[0].position.y - -0.5).abs() < 1e-6);
    let end = compose(&inputs(max, Vec2::ZERO), &vp, IMAGES, &[], 0.0);
    assert!(end.texts[1].position.y.abs() < 1e-4);
    assert_eq!(end.texts[1].opacity, 1.0);
}

#[test]
fn sprites_and_background_cover_the_view() {
    let vp = viewport();
    let f = compose(&inputs(0.0, Vec2::ZERO), &vp, IMAGES, &[], 0.0);
    let world = vp.world_size();
    assert_eq!(f.background_size, world);
    assert!((world.x / world.y - vp.aspect()).abs() < 1e-5);
    assert_eq!(f.texts[0].sprite_size, world.x.max(world.y));
}

#[test]
fn light_tracks_mouse() {
    let vp = viewport();
    let f = compose(&inputs(0.0, Vec2::new(200.0, -300.0)), &vp, IMAGES, &[], 0.0);
    assert_eq!(f.light.position, Vec3::new(2.0, 3.0, 6.5));
    assert_eq!(f.light.intensity, 1.2);
}

#[test]
fn composition_is_idempotent() {
    let vp = viewport();
    let i = inputs(1234.5, Vec2::new(-87.0, 42.0));
    let a = compose(&i, &vp, IMAGES, &[1.1, 1.0, 1.25], 17.3);
    let b = compose(&i, &vp, IMAGES, &[1.1, 1.0, 1.25], 17.3);
    assert_eq!(a, b);
}

#[test]
fn degenerate_viewport_is_clamped() {
    let vp = Viewport::new(0.0, 0.0);
    assert_eq!((vp.width_px(), vp.height_px()), (1.0, 1.0));
    assert!(vp.scroll_max() > 0.0);
    let vp = Viewport::new(f32::NAN, -20.0);
    assert_eq!((vp.width_px(), vp.height_px()), (1.0, 1.0));

    let f = compose(&inputs(50.0, Vec2::new(3.0, 4.0)), &vp, IMAGES, &[], 0.0);
    assert!(f.images.iter().all(|i| i.position.is_finite()));
    assert!(f.texts.iter().all(|t| t.position.is_finite()));
}
