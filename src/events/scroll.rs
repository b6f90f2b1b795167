use crate::input;
use parallax_core::Controller;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed the container's scroll offset into the `top` spring.
pub fn wire_scroll(container: &web::HtmlElement, controller: Rc<RefCell<Controller>>) {
    let el = container.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let top = input::sanitize_scroll_top(el.scroll_top() as f64);
        controller.borrow_mut().on_scroll(top);
    }) as Box<dyn FnMut(_)>);
    _ = container.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}
