use crate::overlay::PanelWiring;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Escape closes the info panel; anything else passes through untouched.
pub fn wire_panel_keys(document: &web::Document, panel: PanelWiring) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if panel.handle_key(&ev.key()) {
            log::debug!("[keys] panel closed");
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
