use crate::core::{DragEnd, Panner, PointerInput};
use crate::frame::{FrameScheduler, PanFrame};
use crate::panorama::PanoramaView;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PanWiring {
    pub view: PanoramaView,
    pub panner: Rc<RefCell<Panner>>,
    pub frames: Rc<FrameScheduler>,
}

#[inline]
fn mouse_input(ev: &web::MouseEvent) -> PointerInput {
    PointerInput::Mouse {
        page_x: ev.page_x() as f64,
    }
}

#[inline]
fn touch_input(ev: &web::TouchEvent) -> Option<PointerInput> {
    ev.touches().get(0).map(|t| PointerInput::Touch {
        page_x: t.page_x() as f64,
    })
}

impl PanWiring {
    fn begin(&self, input: PointerInput) {
        let x = input.container_x(self.view.container_left());
        let mut p = self.panner.borrow_mut();
        if let Some(live) = self.view.live_offset() {
            // wheel, scrollbar or keys may have scrolled since the last drag
            p.sync_offset(live);
        }
        if p.begin_drag(x) {
            log::debug!("[pan] stale session replaced");
        }
        self.view.set_cursor(p.cursor());
    }

    /// Returns true if a drag consumed the move.
    fn advance(&self, input: PointerInput) -> bool {
        let x = input.container_x(self.view.container_left());
        let frame = {
            let mut p = self.panner.borrow_mut();
            match p.continue_drag(x) {
                Some(offset) => PanFrame {
                    offset,
                    scroll_pct: p.scroll_percentage(),
                },
                None => return false,
            }
        };
        self.frames.request(frame);
        true
    }

    fn finish(&self, reason: DragEnd) {
        let mut p = self.panner.borrow_mut();
        if p.end_drag(reason).is_some() {
            log::debug!(
                "[pan] drag ended ({:?}) at offset {:.1}, {} frames coalesced so far",
                reason,
                p.offset(),
                self.frames.superseded()
            );
        }
        self.view.set_cursor(p.cursor());
    }
}

pub fn wire_pan_handlers(w: PanWiring) {
    wire_mouse(&w);
    wire_touch(&w);
}

fn on_container(w: &PanWiring, event: &str, callback: &js_sys::Function) {
    _ = w.view.container.add_event_listener_with_callback(event, callback);
}

fn wire_mouse(w: &PanWiring) {
    let wd = w.clone();
    let on_mouse_down = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        wd.begin(mouse_input(&ev));
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    on_container(w, "mousedown", on_mouse_down.as_ref().unchecked_ref());
    on_mouse_down.forget();

    let wm = w.clone();
    let on_mouse_move = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if wm.advance(mouse_input(&ev)) {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    on_container(w, "mousemove", on_mouse_move.as_ref().unchecked_ref());
    on_mouse_move.forget();

    let wu = w.clone();
    let on_mouse_up = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        wu.finish(DragEnd::Release);
    }) as Box<dyn FnMut(_)>);
    on_container(w, "mouseup", on_mouse_up.as_ref().unchecked_ref());
    on_mouse_up.forget();

    let wl = w.clone();
    let on_mouse_leave = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        wl.finish(DragEnd::Leave);
    }) as Box<dyn FnMut(_)>);
    on_container(w, "mouseleave", on_mouse_leave.as_ref().unchecked_ref());
    on_mouse_leave.forget();
}

fn wire_touch(w: &PanWiring) {
    // touch listeners must be non-passive for preventDefault to stop scrolling
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);

    let ws = w.clone();
    let start = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(input) = touch_input(&ev) {
            ws.begin(input);
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .view
        .container
        .add_event_listener_with_callback_and_add_event_listener_options(
            "touchstart",
            start.as_ref().unchecked_ref(),
            &opts,
        );
    start.forget();

    let wm = w.clone();
    let moved = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(input) = touch_input(&ev) {
            if wm.advance(input) {
                ev.prevent_default();
            }
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .view
        .container
        .add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            moved.as_ref().unchecked_ref(),
            &opts,
        );
    moved.forget();

    let we = w.clone();
    let on_touch_end = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
        we.finish(DragEnd::Release);
    }) as Box<dyn FnMut(_)>);
    on_container(w, "touchend", on_touch_end.as_ref().unchecked_ref());
    on_touch_end.forget();

    let wc = w.clone();
    let on_touch_cancel = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
        wc.finish(DragEnd::Cancel);
    }) as Box<dyn FnMut(_)>);
    on_container(w, "touchcancel", on_touch_cancel.as_ref().unchecked_ref());
    on_touch_cancel.forget();
}
