use crate::city::{AppEvent, CityApp};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const UI_CONTAINER_ID: &str = "ui";

/// Toggle buttons in on-screen order.
const BUTTONS: [(&str, AppEvent); 2] = [
    ("Toggle Camera Rotation", AppEvent::ToggleRotation),
    ("Toggle Day/Night", AppEvent::ToggleDayNight),
];

/// Append the toggle buttons to `#ui`, creating the container when the page has none.
pub fn mount_toggle_buttons(
    document: &web::Document,
    app: &Rc<RefCell<CityApp>>,
) -> anyhow::Result<()> {
    let container = ui_container(document)?;
    for (label, event) in BUTTONS {
        let button = document
            .create_element("button")
            .map_err(|e| anyhow::anyhow!("create button: {:?}", e))?
            .dyn_into::<web::HtmlButtonElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        button.set_type("button");
        button.set_text_content(Some(label));
        container
            .append_child(&button)
            .map_err(|e| anyhow::anyhow!("append button: {:?}", e))?;

        let app = app.clone();
        dom::add_click_listener(&button, move || app.borrow_mut().dispatch(event));
    }
    Ok(())
}

fn ui_container(document: &web::Document) -> anyhow::Result<web::Element> {
    if let Some(el) = document.get_element_by_id(UI_CONTAINER_ID) {
        return Ok(el);
    }
    log::warn!("missing #{}; adding a fallback container", UI_CONTAINER_ID);
    let div = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create div: {:?}", e))?;
    div.set_id(UI_CONTAINER_ID);
    _ = div.set_attribute("style", "position:absolute;top:10px;left:10px;");
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    body.append_child(&div)
        .map_err(|e| anyhow::anyhow!("append #ui: {:?}", e))?;
    Ok(div)
}
