//! Frame clock: a thin wrapper over `requestAnimationFrame`.
//!
//! Every stateful visual derives its elapsed time from the timestamps this
//! clock delivers, never from wall-clock polling, so tab backgrounding or
//! dropped frames simply resume the animation from wherever elapsed time
//! lands. `cancel()` is idempotent and makes any in-flight callback a
//! no-op.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct FrameInner {
    alive: Cell<bool>,
    raf_id: Cell<Option<i32>>,
    last_ts: Cell<f64>,
    // True while the trampoline is executing; cancel() must not drop a
    // closure that is currently on the stack.
    in_tick: Cell<bool>,
    // Kept so the trampoline stays valid for the handle's lifetime.
    closure: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

/// Cancellation handle for one scheduled frame chain.
#[derive(Clone)]
pub struct FrameHandle {
    inner: Rc<FrameInner>,
}

impl FrameHandle {
    pub fn cancel(&self) {
        if !self.inner.alive.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.inner.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        if !self.inner.in_tick.get() {
            self.inner.closure.borrow_mut().take();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        !self.inner.alive.get()
    }
}

/// Schedule `callback(timestamp_ms)` on every animation frame until the
/// returned handle is cancelled. Timestamps are clamped monotonically
/// non-decreasing before they reach the callback.
pub fn schedule(mut callback: impl FnMut(f64) + 'static) -> FrameHandle {
    let inner = Rc::new(FrameInner {
        alive: Cell::new(true),
        raf_id: Cell::new(None),
        last_ts: Cell::new(0.0),
        in_tick: Cell::new(false),
        closure: RefCell::new(None),
    });

    let tick_inner = inner.clone();
    let trampoline = Closure::wrap(Box::new(move |raw_ts: f64| {
        if !tick_inner.alive.get() {
            return;
        }
        let ts = raw_ts.max(tick_inner.last_ts.get());
        tick_inner.last_ts.set(ts);
        tick_inner.in_tick.set(true);
        callback(ts);
        tick_inner.in_tick.set(false);
        // The callback may have torn us down.
        if !tick_inner.alive.get() {
            return;
        }
        if let Some(w) = web::window() {
            if let Some(cl) = tick_inner.closure.borrow().as_ref() {
                match w.request_animation_frame(cl.as_ref().unchecked_ref()) {
                    Ok(id) => tick_inner.raf_id.set(Some(id)),
                    Err(e) => log::warn!("[clock] requestAnimationFrame failed: {:?}", e),
                }
            }
        }
    }) as Box<dyn FnMut(f64)>);

    *inner.closure.borrow_mut() = Some(trampoline);
    if let Some(w) = web::window() {
        if let Some(cl) = inner.closure.borrow().as_ref() {
            match w.request_animation_frame(cl.as_ref().unchecked_ref()) {
                Ok(id) => inner.raf_id.set(Some(id)),
                Err(e) => log::warn!("[clock] requestAnimationFrame failed: {:?}", e),
            }
        }
    }

    FrameHandle { inner }
}

/// Elapsed seconds between two clock timestamps, clamped to a sane frame
/// budget so a background tab does not integrate a giant step on resume.
#[inline]
pub fn delta_seconds(prev_ms: f64, now_ms: f64) -> f32 {
    (((now_ms - prev_ms) / 1000.0).max(0.0) as f32).min(0.1)
}
