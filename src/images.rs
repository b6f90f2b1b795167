use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Pixels of a decoded image waiting to be uploaded by the frame loop.
pub struct DecodedImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

pub type UploadQueue = Rc<RefCell<Vec<DecodedImage>>>;

/// Start decoding every distinct url. Failures are logged and the image keeps
/// its fallback texture.
pub fn load_all<'a>(urls: impl IntoIterator<Item = &'a str>, queue: UploadQueue) {
    let mut seen = fnv::FnvHashSet::default();
    for url in urls {
        if !seen.insert(url) {
            continue;
        }
        let url = url.to_string();
        let queue = queue.clone();
        spawn_local(async move {
            match decode(&url).await {
                Ok(img) => queue.borrow_mut().push(img),
                Err(e) => log::warn!("[texture] {} failed: {:?}", url, e),
            }
        });
    }
}

async fn decode(url: &str) -> anyhow::Result<DecodedImage> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_cross_origin(Some("anonymous"));
    img.set_src(url);
    JsFuture::from(img.decode())
        .await
        .map_err(|e| anyhow::anyhow!("decode: {:?}", e))?;

    let width = img.natural_width().max(1);
    let height = img.natural_height().max(1);
    let document = crate::dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    ctx.draw_image_with_html_image_element(&img, 0.0, 0.0)
        .map_err(|e| anyhow::anyhow!("draw_image: {:?}", e))?;
    let data = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(|e| anyhow::anyhow!("get_image_data: {:?}", e))?;

    Ok(DecodedImage {
        url: url.to_string(),
        width,
        height,
        rgba: data.data().0,
    })
}
