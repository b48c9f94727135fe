use crate::core::FrameSlot;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One visual pan update: the offset to render and the matching scroll
/// percentage for hotspot wrapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanFrame {
    pub offset: f64,
    pub scroll_pct: f64,
}

/// Applies pan updates at most once per display refresh via
/// `requestAnimationFrame`.
///
/// A request made while an earlier one is still waiting cancels that frame
/// and takes its place, so only the newest offset is ever rendered.
pub struct FrameScheduler {
    inner: Rc<Inner>,
}

struct Inner {
    window: Option<web::Window>,
    slot: RefCell<FrameSlot<PanFrame>>,
    raf_id: Cell<Option<i32>>,
    apply: Box<dyn Fn(PanFrame)>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl Inner {
    fn flush(&self) {
        let next = self.slot.borrow_mut().take();
        if let Some(frame) = next {
            (self.apply)(frame);
        }
    }
}

impl FrameScheduler {
    pub fn new(apply: impl Fn(PanFrame) + 'static) -> Self {
        let inner = Rc::new(Inner {
            window: web::window(),
            slot: RefCell::new(FrameSlot::new()),
            raf_id: Cell::new(None),
            apply: Box::new(apply),
            callback: RefCell::new(None),
        });

        let inner_cb = inner.clone();
        let cb = Closure::wrap(Box::new(move || {
            inner_cb.raf_id.set(None);
            inner_cb.flush();
        }) as Box<dyn FnMut()>);
        *inner.callback.borrow_mut() = Some(cb);

        Self { inner }
    }

    pub fn request(&self, frame: PanFrame) {
        if let Some(id) = self.inner.raf_id.take() {
            if let Some(window) = self.inner.window.as_ref() {
                _ = window.cancel_animation_frame(id);
            }
        }
        self.inner.slot.borrow_mut().schedule(frame);

        let scheduled = {
            let cb_ref = self.inner.callback.borrow();
            match (cb_ref.as_ref(), self.inner.window.as_ref()) {
                (Some(cb), Some(window)) => window
                    .request_animation_frame(cb.as_ref().unchecked_ref())
                    .ok(),
                _ => None,
            }
        };
        match scheduled {
            Some(id) => self.inner.raf_id.set(Some(id)),
            // no frame source; render synchronously rather than never
            None => self.inner.flush(),
        }
    }

    /// Updates dropped so far because a newer one superseded them.
    pub fn superseded(&self) -> u64 {
        self.inner.slot.borrow().superseded()
    }
}

impl Drop for FrameScheduler {
    fn drop(&mut self) {
        if let Some(id) = self.inner.raf_id.take() {
            if let Some(window) = self.inner.window.as_ref() {
                _ = window.cancel_animation_frame(id);
            }
        }
        self.inner.slot.borrow_mut().cancel();
        // Break the callback->inner reference cycle on teardown.
        self.inner.callback.borrow_mut().take();
    }
}
