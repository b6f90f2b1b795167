#![cfg(target_arch = "wasm32")]
use instant::Instant;
use parallax_core::data::IMAGES;
use parallax_core::{Controller, StarField, Viewport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::AtomicBool;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod images;
mod input;
mod render;
mod startup;
mod text;

fn seeded_rng() -> StdRng {
    StdRng::from_rng(rand::thread_rng()).unwrap_or_else(|e| {
        log::warn!("[rng] entropy unavailable ({e}); using fixed seed");
        StdRng::seed_from_u64(constants::FALLBACK_SEED)
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("parallax-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if !startup::claim_start(&STARTED) {
        log::warn!("[init] already started");
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let container: web::HtmlElement = document
        .get_element_by_id(constants::SCROLL_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::SCROLL_CONTAINER_ID))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Avoid grabbing a 2D context here to allow WebGPU to acquire the canvas

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    let mut rng = seeded_rng();
    let stars = StarField::new(&mut rng);
    let (css_w, css_h) = dom::css_size(&canvas);
    let controller = Rc::new(RefCell::new(Controller::new(
        IMAGES.to_vec(),
        stars,
        Viewport::new(css_w, css_h),
    )));
    log::info!(
        "[scene] images={} stars={} viewport={}x{}",
        IMAGES.len(),
        controller.borrow().stars().coords().len(),
        css_w,
        css_h
    );

    events::wire_scroll(&container, controller.clone());
    events::wire_pointer_handlers(events::pointer::PointerWiring {
        target: container.clone(),
        canvas: canvas.clone(),
        controller: controller.clone(),
    });

    let gpu = {
        let coords = controller.borrow().stars().coords().to_vec();
        frame::init_gpu(&canvas, &coords, StdRng::from_rng(&mut rng)?).await
    };

    // Textures stream in after the GPU is ready; until then images use the fallback
    let uploads: images::UploadQueue = Rc::new(RefCell::new(Vec::new()));
    images::load_all(IMAGES.iter().map(|d| d.url), uploads.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        controller,
        canvas,
        document,
        gpu,
        uploads,
        text_failures: Default::default(),
        last_instant: Instant::now(),
    }));
    // Start RAF loop
    frame::start_loop(frame_ctx);

    Ok(())
}
