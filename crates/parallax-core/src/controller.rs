use crate::camera::{screen_to_world_ray, Viewport};
use crate::data::ImageDescriptor;
use crate::hover::HoverScale;
use crate::pick::pick_image;
use crate::scene::{compose, SceneFrame, SceneInputs};
use crate::spring::Spring;
use crate::stars::StarField;
use glam::Vec2;
use smallvec::SmallVec;

/// Owns the animated inputs and everything that evolves from frame to frame.
///
/// Event handlers only move spring targets; [`Controller::tick`] does the
/// per-frame work in a fixed order: springs, star field, composition, then
/// hover picking (which takes effect on the following frame).
pub struct Controller {
    top: Spring<f32>,
    mouse: Spring<Vec2>,
    images: Vec<ImageDescriptor>,
    hovers: Vec<HoverScale>,
    stars: StarField,
    viewport: Viewport,
    pointer_px: Option<Vec2>,
}

impl Controller {
    pub fn new(images: Vec<ImageDescriptor>, stars: StarField, viewport: Viewport) -> Self {
        let hovers = vec![HoverScale::default(); images.len()];
        Self {
            top: Spring::new(0.0),
            mouse: Spring::new(Vec2::ZERO),
            images,
            hovers,
            stars,
            viewport,
            pointer_px: None,
        }
    }

    pub fn images(&self) -> &[ImageDescriptor] {
        &self.images
    }

    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            log::debug!(
                "[controller] viewport {}x{}",
                viewport.width_px(),
                viewport.height_px()
            );
            self.viewport = viewport;
        }
    }

    /// Scroll container moved to `scroll_top` CSS px.
    pub fn on_scroll(&mut self, scroll_top: f32) {
        self.top.set_target(scroll_top);
    }

    /// Pointer moved. `mouse` is its offset from the window center and
    /// `canvas_px` the same point relative to the canvas, both in CSS px.
    pub fn on_pointer_move(&mut self, mouse: Vec2, canvas_px: Vec2) {
        self.mouse.set_target(mouse);
        self.pointer_px = Some(canvas_px);
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer_px = None;
        for h in &mut self.hovers {
            h.set_hovered(false);
        }
    }

    pub fn inputs(&self) -> SceneInputs {
        SceneInputs {
            top: self.top.value(),
            mouse: self.mouse.value(),
        }
    }

    pub fn hover(&self, index: usize) -> Option<&HoverScale> {
        self.hovers.get(index)
    }

    pub fn tick(&mut self, dt_sec: f32) -> SceneFrame {
        self.top.step(dt_sec);
        self.mouse.step(dt_sec);
        for h in &mut self.hovers {
            h.step(dt_sec);
        }

        self.stars.advance();

        let factors: SmallVec<[f32; 16]> = self.hovers.iter().map(HoverScale::factor).collect();
        let frame = compose(
            &self.inputs(),
            &self.viewport,
            &self.images,
            &factors,
            self.stars.angle(),
        );

        self.update_hover(&frame);
        frame
    }

    fn update_hover(&mut self, frame: &SceneFrame) {
        let hit = self.pointer_px.and_then(|px| {
            let ray = screen_to_world_ray(&self.viewport, px);
            pick_image(&ray, &frame.images).map(|i| frame.images[i].index)
        });
        for (i, h) in self.hovers.iter_mut().enumerate() {
            if h.set_hovered(hit == Some(i)) {
                log::debug!("[hover] image {} {}", i, if h.is_hovered() { "over" } else { "out" });
            }
        }
    }
}
