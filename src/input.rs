use glam::Vec2;
use web_sys as web;

/// Pointer position relative to the canvas' top-left corner, CSS px.
#[inline]
pub fn pointer_canvas_css(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    canvas_relative(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
    )
}

#[inline]
pub fn pointer_client(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
pub fn canvas_relative(client: Vec2, canvas_origin: Vec2) -> Vec2 {
    client - canvas_origin
}

/// Offset of `client` from the middle of a `width` x `height` window.
#[inline]
pub fn centered_offset(client: Vec2, width: f32, height: f32) -> Vec2 {
    client - Vec2::new(width, height) * 0.5
}

/// Scroll offsets arrive as f64 and may be fractional or, on elastic-scroll
/// platforms, briefly negative or past the end.
#[inline]
pub fn sanitize_scroll_top(scroll_top: f64) -> f32 {
    if scroll_top.is_finite() {
        scroll_top as f32
    } else {
        0.0
    }
}
