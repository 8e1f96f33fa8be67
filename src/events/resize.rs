use crate::city::{AppEvent, CityApp};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the canvas backing size at CSS size * devicePixelRatio and report it to the app.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, app: Rc<RefCell<CityApp>>) {
    sync_and_dispatch(canvas, &app);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        sync_and_dispatch(&canvas_resize, &app);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn sync_and_dispatch(canvas: &web::HtmlCanvasElement, app: &Rc<RefCell<CityApp>>) {
    dom::sync_canvas_backing_size(canvas);
    app.borrow_mut().dispatch(AppEvent::Resize {
        width: canvas.width(),
        height: canvas.height(),
    });
}
