use crate::camera::Viewport;
use crate::constants::{TEXT_BASELINE_FONT_PX, TEXT_CANVAS_SIZE};
use crate::scene::TextParams;
use smallvec::SmallVec;

const FONT_STACK: &str = "-apple-system, BlinkMacSystemFont, avenir next, avenir, helvetica neue, helvetica, ubuntu, roboto, noto, segoe ui, arial, sans-serif";

/// CSS `font` shorthand used when rasterizing a text sprite.
pub fn font_css(size_px: f32) -> String {
    format!("bold {}px {}", size_px.round() as u32, FONT_STACK)
}

/// Canvas point the text is centered on. Every text shares the same anchor,
/// nudged up by half the title's font size.
pub fn text_anchor() -> (f64, f64) {
    let half = TEXT_CANVAS_SIZE as f64 / 2.0;
    (half, half - TEXT_BASELINE_FONT_PX as f64 / 2.0)
}

/// Cache key for a rasterized sprite: it must be redrawn when the content or
/// the viewport size changes.
#[derive(Clone, Debug, PartialEq)]
pub struct TextKey {
    pub content: &'static str,
    pub color: &'static str,
    pub font_size_px: u32,
    pub viewport_px: (u32, u32),
}

impl TextKey {
    pub fn for_text(text: &TextParams, viewport: &Viewport) -> Self {
        Self {
            content: text.text.content,
            color: text.text.color,
            font_size_px: text.text.font_size_px.round() as u32,
            viewport_px: (
                viewport.width_px().round() as u32,
                viewport.height_px().round() as u32,
            ),
        }
    }
}

/// Per-slot record of the last key that failed to rasterize. A failed key is
/// skipped until the slot's key changes (new content or a resize).
#[derive(Clone, Debug, Default)]
pub struct RasterFailures {
    failed: SmallVec<[Option<TextKey>; 2]>,
}

impl RasterFailures {
    pub fn has_failed(&self, slot: usize, key: &TextKey) -> bool {
        matches!(self.failed.get(slot), Some(Some(k)) if k == key)
    }

    pub fn record(&mut self, slot: usize, key: TextKey) {
        if self.failed.len() <= slot {
            self.failed.resize(slot + 1, None);
        }
        self.failed[slot] = Some(key);
    }

    pub fn clear(&mut self, slot: usize) {
        if let Some(entry) = self.failed.get_mut(slot) {
            *entry = None;
        }
    }
}
