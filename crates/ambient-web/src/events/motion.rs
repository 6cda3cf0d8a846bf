//! Reduced-motion preference: read once, then observed reactively.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// One-shot media query check; absence of the API reads as `false`.
pub fn matches_media(query: &str) -> bool {
    web::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|q| q.matches())
        .unwrap_or(false)
}

/// Subscription to the OS/browser reduced-motion signal.
pub struct MotionWatch {
    query: Option<web::MediaQueryList>,
    closure: Option<Closure<dyn FnMut(web::Event)>>,
}

/// Observe the reduced-motion preference. Fires `callback` immediately with
/// the current value, then on every system change until unsubscribed.
pub fn watch_motion_preference(mut callback: impl FnMut(bool) + 'static) -> MotionWatch {
    let query = web::window().and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten());
    callback(query.as_ref().map(|q| q.matches()).unwrap_or(false));

    let Some(query) = query else {
        return MotionWatch {
            query: None,
            closure: None,
        };
    };

    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        let reduced = ev
            .dyn_ref::<web::MediaQueryListEvent>()
            .map(|e| e.matches())
            .unwrap_or_else(|| matches_media(REDUCED_MOTION_QUERY));
        log::info!("[capability] reduced-motion changed: {reduced}");
        callback(reduced);
    }) as Box<dyn FnMut(web::Event)>);

    if let Err(e) =
        query.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
    {
        log::warn!("[capability] failed to observe reduced-motion: {e:?}");
    }

    MotionWatch {
        query: Some(query),
        closure: Some(closure),
    }
}

impl MotionWatch {
    /// Stop observing. Idempotent.
    pub fn unsubscribe(&mut self) {
        if let (Some(query), Some(closure)) = (self.query.take(), self.closure.take()) {
            _ = query
                .remove_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for MotionWatch {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
