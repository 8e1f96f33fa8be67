#![cfg(target_arch = "wasm32")]
use city::{CityApp, Viewport};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod city;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod ui;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("neon-city starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let app = Rc::new(RefCell::new(CityApp::new(Viewport::default())));

    // Size the canvas before the surface is configured against it
    events::wire_canvas_resize(&canvas, app.clone());
    events::wire_pointermove(&canvas, app.clone());
    ui::mount_toggle_buttons(&document, &app)?;

    // Input handlers are already live; no RefCell borrow may span the await
    let stars = app.borrow().scene.stars.clone();
    let gpu = frame::init_gpu(&canvas, &stars).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        app,
        canvas,
        gpu,
        started: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
