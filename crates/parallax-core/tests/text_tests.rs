use glam::Vec2;
use parallax_core::data::{FOOTER, IMAGES, TITLE};
use parallax_core::text::{font_css, text_anchor, RasterFailures, TextKey};
use parallax_core::{compose, SceneInputs, Viewport};

fn keys(viewport: Viewport, top: f32) -> Vec<TextKey> {
    let inputs = SceneInputs {
        top,
        mouse: Vec2::ZERO,
    };
    let frame = compose(&inputs, &viewport, IMAGES, &[], 0.0);
    frame
        .texts
        .iter()
        .map(|t| TextKey::for_text(t, &frame.viewport))
        .collect()
}

#[test]
fn font_is_bold_with_rounded_size() {
    let css = font_css(409.6);
    assert!(css.starts_with("bold 410px "));
    assert!(css.ends_with("sans-serif"));
}

#[test]
fn texts_share_one_anchor_above_center() {
    assert_eq!(text_anchor(), (1024.0, 1024.0 - 205.0));
}

#[test]
fn scene_content_is_fixed() {
    assert_eq!(TITLE.content, "lorem");
    assert_eq!(FOOTER.content, "ipsum");
    assert_eq!(IMAGES.len(), 10);
    // deeper images react more strongly
    assert!(IMAGES.windows(2).all(|w| w[0].depth_factor <= w[1].depth_factor));
    assert!(IMAGES.iter().all(|i| i.url.starts_with("https://")));
}

#[test]
fn text_key_is_stable_for_an_identical_frame() {
    let vp = Viewport::new(1280.0, 800.0);
    assert_eq!(keys(vp, 0.0), keys(vp, 0.0));
    // scrolling moves and fades sprites but does not need a redraw
    assert_eq!(keys(vp, 0.0), keys(vp, 900.0));
}

#[test]
fn text_key_changes_with_viewport_size() {
    let a = keys(Viewport::new(1280.0, 800.0), 0.0);
    let b = keys(Viewport::new(1024.0, 800.0), 0.0);
    let c = keys(Viewport::new(1280.0, 600.0), 0.0);
    assert_ne!(a[0], b[0]);
    assert_ne!(a[0], c[0]);
    assert_eq!(a[0].viewport_px, (1280, 800));
}

#[test]
fn text_key_changes_with_content() {
    let k = keys(Viewport::new(1280.0, 800.0), 0.0);
    assert_eq!(k[0].content, "lorem");
    assert_eq!(k[1].content, "ipsum");
    assert_ne!(k[0], k[1]);
    assert_eq!(k[0].font_size_px, 410);
    assert_eq!(k[1].color, "#000000");
}

#[test]
fn failed_raster_is_not_retried_until_the_key_changes() {
    let small = keys(Viewport::new(800.0, 600.0), 0.0);
    let large = keys(Viewport::new(1600.0, 900.0), 0.0);
    let mut failures = RasterFailures::default();
    assert!(!failures.has_failed(0, &small[0]));

    failures.record(0, small[0].clone());
    assert!(failures.has_failed(0, &small[0]));
    // other slots and other keys are unaffected
    assert!(!failures.has_failed(1, &small[1]));
    assert!(!failures.has_failed(0, &large[0]));

    failures.clear(0);
    assert!(!failures.has_failed(0, &small[0]));
}

#[test]
fn recording_a_high_slot_leaves_lower_slots_clear() {
    let k = keys(Viewport::new(800.0, 600.0), 0.0);
    let mut failures = RasterFailures::default();
    failures.record(1, k[1].clone());
    assert!(failures.has_failed(1, &k[1]));
    assert!(!failures.has_failed(0, &k[0]));
    failures.clear(5);
}
