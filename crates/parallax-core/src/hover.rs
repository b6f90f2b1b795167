use crate::constants::HOVER_SCALE;
use crate::spring::Spring;

/// Per-image hover flag and the scale spring it drives (1.0 idle, 1.25 hovered).
#[derive(Clone, Debug)]
pub struct HoverScale {
    hovered: bool,
    factor: Spring<f32>,
}

impl Default for HoverScale {
    fn default() -> Self {
        Self {
            hovered: false,
            factor: Spring::new(1.0),
        }
    }
}

impl HoverScale {
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Returns `true` when the flag actually changed.
    pub fn set_hovered(&mut self, hovered: bool) -> bool {
        if self.hovered == hovered {
            return false;
        }
        self.hovered = hovered;
        self.factor
            .set_target(if hovered { HOVER_SCALE } else { 1.0 });
        true
    }

    pub fn target(&self) -> f32 {
        self.factor.target()
    }

    pub fn factor(&self) -> f32 {
        self.factor.value()
    }

    pub fn step(&mut self, dt_sec: f32) {
        self.factor.step(dt_sec);
    }
}
