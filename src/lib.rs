#![cfg(target_arch = "wasm32")]
use crate::core::{InfoPanel, Panner};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod panorama;

/// Session state shared by every handler. Built once per page; closures
/// hold clones of the `Rc`s rather than reaching for globals.
///
/// `panner` is absent when the panorama markup is missing.
struct Tour {
    panner: Option<Rc<RefCell<Panner>>>,
    panel: Rc<RefCell<InfoPanel>>,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tour-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::document_ready(&document).await;

    // Each feature degrades on its own: a missing panel must not stop panning.
    let surface_view = match panorama::PanoramaView::mount(&document) {
        Ok(view) => Some(view),
        Err(e) => {
            log::error!("[init] panning disabled: {}", e);
            None
        }
    };
    let tour = Tour {
        panner: surface_view.as_ref().map(|view| {
            view.prepare();
            Rc::new(RefCell::new(Panner::new(view.measure(), view.params.sensitivity)))
        }),
        panel: Rc::new(RefCell::new(InfoPanel::new())),
    };

    match overlay::PanelView::mount(&document) {
        Ok(view) => wire_info_panel(&document, view, &tour),
        Err(e) => log::error!("[init] info panel disabled: {}", e),
    }
    if let (Some(view), Some(panner)) = (surface_view, tour.panner.as_ref()) {
        wire_panning(&document, view, panner);
    }

    log::info!("[init] virtual tour ready");
    log::info!("[init] click the hotspots to explore");
    Ok(())
}

fn wire_info_panel(document: &web::Document, view: overlay::PanelView, tour: &Tour) {
    let wiring = overlay::PanelWiring {
        document: document.clone(),
        view,
        panel: tour.panel.clone(),
    };
    events::keyboard::wire_panel_keys(document, wiring.clone());
    overlay::wire_panel(wiring);
}

fn wire_panning(
    document: &web::Document,
    view: panorama::PanoramaView,
    panner: &Rc<RefCell<Panner>>,
) {
    let view_render = view.clone();
    let frames = Rc::new(frame::FrameScheduler::new(move |f| view_render.render(f)));

    let surface = panorama::SurfaceWiring {
        document: document.clone(),
        view: view.clone(),
        panner: panner.clone(),
        frames: frames.clone(),
    };
    panorama::wire_image_lifecycle(&surface);
    panorama::wire_resize(&surface);

    events::pointer::wire_pan_handlers(events::pointer::PanWiring {
        view,
        panner: panner.clone(),
        frames,
    });
}
