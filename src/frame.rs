use crate::constants::MAX_FRAME_DT_SEC;
use crate::dom;
use crate::images::UploadQueue;
use crate::render;
use crate::text;
use instant::Instant;
use parallax_core::constants::TEXT_CANVAS_SIZE;
use parallax_core::text::{RasterFailures, TextKey};
use parallax_core::{Controller, Viewport};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub controller: Rc<RefCell<Controller>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub gpu: Option<render::GpuState<'a>>,
    pub uploads: UploadQueue,
    pub text_failures: RasterFailures,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        // Springs, star field, composition and picking, in that order
        let (css_w, css_h) = dom::css_size(&self.canvas);
        let scene = {
            let mut controller = self.controller.borrow_mut();
            controller.set_viewport(Viewport::new(css_w, css_h));
            controller.tick(dt_sec)
        };

        let Some(g) = &mut self.gpu else {
            return;
        };
        for img in self.uploads.borrow_mut().drain(..) {
            g.upload_image(img);
        }
        g.resize_if_needed(self.canvas.width(), self.canvas.height());

        let keys: SmallVec<[TextKey; 2]> = scene
            .texts
            .iter()
            .map(|t| TextKey::for_text(t, &scene.viewport))
            .collect();
        for (slot, (key, params)) in keys.iter().zip(scene.texts.iter()).enumerate() {
            if g.has_text(slot, key) || self.text_failures.has_failed(slot, key) {
                continue;
            }
            match text::rasterize(&self.document, &params.text) {
                Ok(rgba) => {
                    g.upload_text(slot, key.clone(), TEXT_CANVAS_SIZE, &rgba);
                    self.text_failures.clear(slot);
                }
                Err(e) => {
                    log::warn!("[text] {:?} failed: {:?}", params.text.content, e);
                    self.text_failures.record(slot, key.clone());
                }
            }
        }

        let controller = self.controller.borrow();
        if let Err(e) = g.render(&scene, controller.images(), &keys) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    star_coords: &[glam::Vec3],
    rng: rand::rngs::StdRng,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, star_coords, rng).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
