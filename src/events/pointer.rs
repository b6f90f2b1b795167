use crate::input;
use parallax_core::Controller;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    /// Element receiving the events (the scroll overlay sits above the canvas).
    pub target: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub controller: Rc<RefCell<Controller>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointermove(&w);
    wire_pointerleave(&w);
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();
    let target = w.target.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(window) = web::window() else {
            return;
        };
        let inner_w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        let inner_h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        let mouse = input::centered_offset(input::pointer_client(&ev), inner_w, inner_h);
        let canvas_px = input::pointer_canvas_css(&ev, &w.canvas);
        w.controller.borrow_mut().on_pointer_move(mouse, canvas_px);
    }) as Box<dyn FnMut(_)>);

    _ = target.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerleave(w: &PointerWiring) {
    let w = w.clone();
    let target = w.target.clone();

    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.controller.borrow_mut().on_pointer_leave();
        log::debug!("[input] pointer left");
    }) as Box<dyn FnMut(_)>);

    _ = target.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}
