use crate::city::{AppEvent, CityApp};
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Forward window pointer moves to the app as canvas backing-store pixels.
pub fn wire_pointermove(canvas: &web::HtmlCanvasElement, app: Rc<RefCell<CityApp>>) {
    let canvas = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !canvas.is_connected() {
            return;
        }
        let pos = input::pointer_canvas_px(&ev, &canvas);
        if !pos.is_finite() {
            return;
        }
        app.borrow_mut()
            .dispatch(AppEvent::PointerMove { x: pos.x, y: pos.y });
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
