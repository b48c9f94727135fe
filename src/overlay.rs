use crate::core::constants::{
    ACTIVE_CLASS, CLOSE_BUTTON_ID, HOTSPOT_SELECTOR, INFO_CONTENT_ID, INFO_PANEL_ID, NOTICE_CLASS,
    OVERLAY_CLASS, RESOURCE_ATTR, RESOURCE_BUTTON_SELECTOR, RESOURCE_TARGET,
    RESOURCE_UNAVAILABLE_TEXT, TARGET_ATTR,
};
use crate::core::panel::Shown;
use crate::core::{resolve_resource, ContentSource, InfoPanel, TourError};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Content blocks are ordinary elements addressed by id.
impl ContentSource for web::Document {
    fn content_for(&self, target_id: &str) -> Option<String> {
        self.get_element_by_id(target_id).map(|el| el.inner_html())
    }
}

#[derive(Clone)]
pub struct PanelView {
    pub panel: web::HtmlElement,
    pub content: web::HtmlElement,
    pub close_button: Option<web::HtmlElement>,
    pub overlay: web::Element,
}

impl PanelView {
    pub fn mount(document: &web::Document) -> Result<Self, TourError> {
        let panel = dom::require_by_id(document, INFO_PANEL_ID)?;
        let content = dom::require_by_id(document, INFO_CONTENT_ID)?;
        let close_button = match dom::require_by_id(document, CLOSE_BUTTON_ID) {
            Ok(b) => Some(b),
            Err(e) => {
                log::warn!("[panel] {}; close via overlay or Escape only", e);
                None
            }
        };
        let overlay = mount_overlay(document)?;
        Ok(Self {
            panel,
            content,
            close_button,
            overlay,
        })
    }

    pub fn show(&self, shown: &Shown) {
        self.content.set_inner_html(&shown.html);
        dom::set_class(&self.panel, ACTIVE_CLASS, true);
        dom::set_class(&self.overlay, ACTIVE_CLASS, true);
    }

    pub fn hide(&self) {
        dom::set_class(&self.panel, ACTIVE_CLASS, false);
        dom::set_class(&self.overlay, ACTIVE_CLASS, false);
    }

    /// Inline notice inside the panel; reused if one is already showing.
    fn show_notice(&self, document: &web::Document) {
        let selector = format!(".{}", NOTICE_CLASS);
        let existing = self.content.query_selector(&selector).ok().flatten();
        let notice = match existing {
            Some(el) => el,
            None => {
                let Ok(el) = document.create_element("p") else {
                    return;
                };
                el.set_class_name(NOTICE_CLASS);
                _ = self.content.append_child(&el);
                el
            }
        };
        notice.set_text_content(Some(RESOURCE_UNAVAILABLE_TEXT));
    }
}

/// Reuse the page's backdrop if it ships one, otherwise create it.
fn mount_overlay(document: &web::Document) -> Result<web::Element, TourError> {
    let selector = format!(".{}", OVERLAY_CLASS);
    if let Some(el) = document.query_selector(&selector).ok().flatten() {
        return Ok(el);
    }
    let body = document.body().ok_or(TourError::MissingElement("body"))?;
    let el = document
        .create_element("div")
        .map_err(|_| TourError::MissingElement("overlay"))?;
    el.set_class_name(OVERLAY_CLASS);
    _ = body.append_child(&el);
    Ok(el)
}

#[derive(Clone)]
pub struct PanelWiring {
    pub document: web::Document,
    pub view: PanelView,
    pub panel: Rc<RefCell<InfoPanel>>,
}

impl PanelWiring {
    pub fn open(&self, target_id: &str) {
        let mut panel = self.panel.borrow_mut();
        match panel.open(target_id, &self.document) {
            Ok(shown) => {
                self.view.show(shown);
                log::info!("[panel] showing `{}`", target_id);
            }
            Err(e) => log::warn!("[panel] {}", e),
        }
    }

    pub fn close(&self) {
        {
            let mut panel = self.panel.borrow_mut();
            if let Some(shown) = panel.shown() {
                log::debug!("[panel] closing `{}`", shown.target_id);
            }
            panel.close();
        }
        self.view.hide();
    }

    /// Route a key press; returns true if it closed the panel.
    pub fn handle_key(&self, key: &str) -> bool {
        let closed = self.panel.borrow_mut().handle_key(key);
        if closed {
            self.view.hide();
        }
        closed
    }

    fn open_resource(&self, button: &web::Element) {
        let reference = button.get_attribute(RESOURCE_ATTR);
        match resolve_resource(reference.as_deref()) {
            Ok(url) => {
                if let Some(window) = web::window() {
                    _ = window.open_with_url_and_target(url, RESOURCE_TARGET);
                }
            }
            Err(e) => {
                log::warn!("[panel] {}", e);
                self.view.show_notice(&self.document);
            }
        }
    }
}

pub fn wire_panel(w: PanelWiring) {
    wire_hotspots(&w);

    if let Some(button) = &w.view.close_button {
        let wc = w.clone();
        dom::add_click_listener(button, move |_ev| wc.close());
    }

    let wo = w.clone();
    dom::add_click_listener(&w.view.overlay, move |_ev| wo.close());

    dom::stop_propagation_on(&w.view.panel, "click");

    // document buttons arrive with every content swap; delegate from the
    // content root instead of rebinding each time
    let wr = w.clone();
    dom::add_click_listener(&w.view.content, move |ev| {
        let button = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(RESOURCE_BUTTON_SELECTOR).ok().flatten());
        if let Some(button) = button {
            wr.open_resource(&button);
        }
    });
}

fn wire_hotspots(w: &PanelWiring) {
    let hotspots = dom::html_elements(w.document.query_selector_all(HOTSPOT_SELECTOR));
    for hotspot in hotspots {
        // a press on a hotspot must never start a pan
        dom::stop_propagation_on(&hotspot, "mousedown");
        dom::stop_propagation_on(&hotspot, "touchstart");

        let target = hotspot.get_attribute(TARGET_ATTR);
        let wh = w.clone();
        dom::add_click_listener(&hotspot, move |ev| {
            ev.stop_propagation();
            match target.as_deref() {
                Some(id) => wh.open(id),
                None => log::warn!("[panel] hotspot without `{}`", TARGET_ATTR),
            }
        });
    }
}
