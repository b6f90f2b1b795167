use parallax_core::constants::GLITCH_COLUMN_WIDTH;
use parallax_core::glitch::{displacement_map, GlitchParams};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::PI;

#[test]
fn zero_factor_bypasses() {
    let mut rng = StdRng::seed_from_u64(9);
    let p = GlitchParams::sample(0.0, &mut rng);
    assert!(p.bypass);
    assert_eq!(p.amount, 0.0);
    assert_eq!(p.seed, 0.0);
}

#[test]
fn negative_factor_is_treated_as_zero() {
    let mut rng = StdRng::seed_from_u64(9);
    let p = GlitchParams::sample(-3.0, &mut rng);
    assert!(p.bypass);
    assert_eq!(p.seed, 0.0);
}

#[test]
fn full_factor_stays_in_documented_ranges() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        let p = GlitchParams::sample(1.0, &mut rng);
        assert!(!p.bypass);
        assert!((0.0..1.0).contains(&p.seed));
        assert!((0.0..=1.0 / 90.0).contains(&p.amount));
        assert!((-PI..PI).contains(&p.angle));
        assert!((0.0..1.0).contains(&p.distortion_x));
        assert!((0.0..1.0).contains(&p.distortion_y));
        assert!((-0.3..0.3).contains(&p.seed_x));
        assert!((-0.3..0.3).contains(&p.seed_y));
        assert_eq!(p.column_width, GLITCH_COLUMN_WIDTH);
    }
}

#[test]
fn half_factor_halves_the_ranges() {
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..500 {
        let p = GlitchParams::sample(0.5, &mut rng);
        assert!(p.seed < 0.5);
        assert!(p.amount <= 0.5 / 90.0);
        assert!(p.angle.abs() <= PI * 0.5);
        assert!(p.seed_x.abs() <= 0.15);
    }
}

#[test]
fn displacement_map_is_opaque_grey_noise() {
    let mut rng = StdRng::seed_from_u64(5);
    let map = displacement_map(64, &mut rng);
    assert_eq!(map.len(), 64 * 64 * 4);
    for texel in map.chunks_exact(4) {
        assert_eq!(texel[0], texel[1]);
        assert_eq!(texel[1], texel[2]);
        assert_eq!(texel[3], 255);
    }
    assert!(map.chunks_exact(4).any(|t| t[0] != map[0]));
}
