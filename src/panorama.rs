use crate::core::constants::{
    CONTAINER_SELECTOR, CURSOR_GRAB, HOTSPOT_SELECTOR, IMAGE_UNAVAILABLE_TEXT, PANORAMA_ID,
    PLACEHOLDER_CLASS, PLACEHOLDER_STYLE, TRANSFORM_MIN_WIDTH,
};
use crate::core::hotspot::format_percent;
use crate::core::{
    HotspotLayout, ImageStatus, LoadOutcome, PanMode, Panner, Surface, TourError, TourParams,
};
use crate::dom;
use crate::frame::{FrameScheduler, PanFrame};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM handles for the pannable part of the page.
#[derive(Clone)]
pub struct PanoramaView {
    pub container: web::HtmlElement,
    pub image: web::HtmlElement,
    pub hotspots: Rc<Vec<web::HtmlElement>>,
    pub layout: Rc<HotspotLayout>,
    pub params: TourParams,
}

impl PanoramaView {
    pub fn mount(document: &web::Document) -> Result<Self, TourError> {
        let container = dom::require_query(document, CONTAINER_SELECTOR)?;
        let image = dom::require_by_id(document, PANORAMA_ID)?;

        let params = TourParams::from_attributes(
            |key| container.get_attribute(key),
            |e| log::warn!("[init] {}; using default", e),
        );

        let hotspots = dom::html_elements(document.query_selector_all(HOTSPOT_SELECTOR));
        let layout = HotspotLayout::from_styles(
            hotspots
                .iter()
                .map(|h| h.style().get_property_value("left").unwrap_or_default()),
        );
        if params.wrap_hotspots && layout.wrappable() < layout.len() {
            log::warn!(
                "[init] {} of {} hotspots are not positioned in percent and will not wrap",
                layout.len() - layout.wrappable(),
                layout.len()
            );
        }
        log::info!(
            "[init] pan mode {:?}, sensitivity {}, {} hotspots",
            params.pan_mode,
            params.sensitivity,
            hotspots.len()
        );

        Ok(Self {
            container,
            image,
            hotspots: Rc::new(hotspots),
            layout: Rc::new(layout),
            params,
        })
    }

    /// One-time styling the pan mode relies on.
    pub fn prepare(&self) {
        if self.params.pan_mode == PanMode::Transform {
            dom::set_style(&self.image, "min-width", TRANSFORM_MIN_WIDTH);
        }
        self.set_cursor(CURSOR_GRAB);
    }

    pub fn measure(&self) -> Surface {
        match self.params.pan_mode {
            PanMode::Transform => Surface::new(
                self.image.scroll_width() as f64,
                self.container.offset_width() as f64,
            ),
            PanMode::Scroll => Surface::new(
                self.container.scroll_width() as f64,
                self.container.client_width() as f64,
            ),
        }
    }

    #[inline]
    pub fn container_left(&self) -> f64 {
        self.container.offset_left() as f64
    }

    /// Offset the browser is actually showing, when it can move without us.
    pub fn live_offset(&self) -> Option<f64> {
        match self.params.pan_mode {
            PanMode::Scroll => Some(self.container.scroll_left() as f64),
            PanMode::Transform => None,
        }
    }

    #[inline]
    pub fn set_cursor(&self, cursor: &str) {
        dom::set_style(&self.container, "cursor", cursor);
    }

    pub fn render(&self, frame: PanFrame) {
        match self.params.pan_mode {
            PanMode::Transform => dom::set_style(
                &self.image,
                "transform",
                &format!("translateX(-{}px)", frame.offset),
            ),
            PanMode::Scroll => self.container.set_scroll_left(frame.offset.round() as i32),
        }
        if self.params.wrap_hotspots && !self.layout.is_empty() {
            let positions = self.layout.displayed(frame.scroll_pct);
            for (el, pos) in self.hotspots.iter().zip(positions) {
                if let Some(left) = pos {
                    dom::set_style(el, "left", &format_percent(left));
                }
            }
        }
    }

    /// Swap the broken image for a visible placeholder block.
    fn show_placeholder(&self, document: &web::Document) {
        let Ok(block) = document.create_element("div") else {
            return;
        };
        block.set_class_name(PLACEHOLDER_CLASS);
        _ = block.set_attribute("style", PLACEHOLDER_STYLE);
        block.set_text_content(Some(IMAGE_UNAVAILABLE_TEXT));
        _ = self.image.replace_with_with_node_1(&block);
    }
}

#[derive(Clone)]
pub struct SurfaceWiring {
    pub document: web::Document,
    pub view: PanoramaView,
    pub panner: Rc<RefCell<Panner>>,
    pub frames: Rc<FrameScheduler>,
}

impl SurfaceWiring {
    fn remeasure(&self) -> PanFrame {
        let mut p = self.panner.borrow_mut();
        if let Some(live) = self.view.live_offset() {
            p.sync_offset(live);
        }
        let offset = p.set_surface(self.view.measure());
        PanFrame {
            offset,
            scroll_pct: p.scroll_percentage(),
        }
    }

    fn on_loaded(&self) {
        let frame = {
            let mut p = self.panner.borrow_mut();
            p.set_surface(self.view.measure());
            let offset = p.jump_to(self.view.params.start);
            let surface = p.surface();
            log::info!(
                "[image] loaded, surface {}px over {}px viewport",
                surface.total_width,
                surface.viewport_width
            );
            PanFrame {
                offset,
                scroll_pct: p.scroll_percentage(),
            }
        };
        self.frames.request(frame);
    }

    fn on_failed(&self) {
        log::warn!("[image] {}", TourError::ImageFailed);
        self.view.show_placeholder(&self.document);
        let mut p = self.panner.borrow_mut();
        p.end_drag(crate::core::DragEnd::Cancel);
        p.set_surface(Surface::new(0.0, 0.0));
    }
}

/// Track the panorama image through load or failure. Images that settled
/// before we got here are handled on the spot.
pub fn wire_image_lifecycle(w: &SurfaceWiring) {
    let status = match w.view.image.dyn_ref::<web::HtmlImageElement>() {
        Some(img) => ImageStatus::classify(img.complete(), img.natural_width()),
        // background-image strips have nothing to wait for
        None => ImageStatus::Loaded,
    };
    match status {
        ImageStatus::Loaded => w.on_loaded(),
        ImageStatus::Failed => w.on_failed(),
        ImageStatus::Pending => {}
    }
    let status = Rc::new(Cell::new(status));

    let wl = w.clone();
    let status_load = status.clone();
    let on_load = Closure::wrap(Box::new(move |_ev: web::Event| {
        let mut s = status_load.get();
        let outcome = s.on_load();
        status_load.set(s);
        match outcome {
            LoadOutcome::First => wl.on_loaded(),
            LoadOutcome::Repeat => {
                log::debug!("[image] reloaded, re-measuring");
                let frame = wl.remeasure();
                wl.frames.request(frame);
            }
            LoadOutcome::Ignored => {}
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .view
        .image
        .add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
    on_load.forget();

    let we = w.clone();
    let on_error = Closure::wrap(Box::new(move |_ev: web::Event| {
        let mut s = status.get();
        if s.on_error() {
            we.on_failed();
        }
        status.set(s);
    }) as Box<dyn FnMut(_)>);
    _ = w
        .view
        .image
        .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
    on_error.forget();
}

/// Re-measure on window resize so the offset stays inside the new bounds.
pub fn wire_resize(w: &SurfaceWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        let frame = w.remeasure();
        w.frames.request(frame);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
