use crate::core::TourError;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Resolve once the document has been parsed. Returns immediately if it
/// already has.
pub async fn document_ready(document: &web::Document) {
    if document.ready_state() != "loading" {
        return;
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &opts,
        );
    });
    _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[inline]
pub fn add_click_listener(target: &web::EventTarget, mut handler: impl FnMut(web::MouseEvent) + 'static) {
    let closure = wasm_bindgen::closure::Closure::wrap(
        Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>,
    );
    _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Swallow an event so ancestors never see it (hotspots vs. the pan container).
pub fn stop_propagation_on(target: &web::EventTarget, event: &str) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        ev.stop_propagation();
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn require_by_id(document: &web::Document, id: &'static str) -> Result<web::HtmlElement, TourError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .ok_or(TourError::MissingElement(id))
}

pub fn require_query(
    document: &web::Document,
    selector: &'static str,
) -> Result<web::HtmlElement, TourError> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .ok_or(TourError::MissingElement(selector))
}

/// Collect the HTML elements of a node list, skipping anything else.
pub fn html_elements(list: Result<web::NodeList, wasm_bindgen::JsValue>) -> Vec<web::HtmlElement> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    if on {
        _ = cl.add_1(class);
    } else {
        _ = cl.remove_1(class);
    }
}
