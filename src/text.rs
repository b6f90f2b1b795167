use parallax_core::constants::TEXT_CANVAS_SIZE;
use parallax_core::data::TextDescriptor;
use parallax_core::text::{font_css, text_anchor};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Draw `text` centered into a fresh square 2D canvas and read back its RGBA pixels.
pub fn rasterize(document: &web::Document, text: &TextDescriptor) -> anyhow::Result<Vec<u8>> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("not a canvas: {:?}", e))?;
    canvas.set_width(TEXT_CANVAS_SIZE);
    canvas.set_height(TEXT_CANVAS_SIZE);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("get_context: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("not a 2d context: {:?}", e))?;

    ctx.set_font(&font_css(text.font_size_px));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str(text.color);
    let (x, y) = text_anchor();
    ctx.fill_text(text.content, x, y)
        .map_err(|e| anyhow::anyhow!("fill_text: {:?}", e))?;

    let size = TEXT_CANVAS_SIZE as f64;
    let data = ctx
        .get_image_data(0.0, 0.0, size, size)
        .map_err(|e| anyhow::anyhow!("get_image_data: {:?}", e))?;
    Ok(data.data().0)
}
