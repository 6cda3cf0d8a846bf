//! Capability detection against the live browser environment.
//!
//! Signals are gathered once and the classified tier is cached for the
//! session; nothing here re-derives mid-session.

use crate::events::matches_media;
use ambient_core::capability::{classify, CapabilityTier, DeviceSignals, TierThresholds};
use std::cell::Cell;
use wasm_bindgen::JsValue;
use web_sys as web;

thread_local! {
    static CACHED_TIER: Cell<Option<CapabilityTier>> = const { Cell::new(None) };
}

/// Classified device tier, memoized per session.
pub fn detect() -> CapabilityTier {
    CACHED_TIER.with(|cache| {
        if let Some(tier) = cache.get() {
            return tier;
        }
        let signals = gather_signals();
        let tier = classify(&signals, &TierThresholds::default());
        log::info!(
            "[capability] cores={:?} memory_gb={:?} gpu={} coarse={} -> {:?}",
            signals.logical_cores,
            signals.device_memory_gb,
            signals.has_gpu_api,
            signals.coarse_pointer,
            tier
        );
        cache.set(Some(tier));
        tier
    })
}

/// Touch-primary input; the cursor trail is not mounted on these devices.
pub fn touch_primary() -> bool {
    matches_media("(pointer: coarse)")
}

fn gather_signals() -> DeviceSignals {
    let Some(window) = web::window() else {
        return DeviceSignals::default();
    };
    let navigator = window.navigator();

    let cores = navigator.hardware_concurrency();
    let logical_cores = if cores >= 1.0 {
        Some(cores as u32)
    } else {
        None
    };

    // `deviceMemory` and `gpu` are not exposed by every engine; read both
    // reflectively so absent APIs degrade instead of failing the cast.
    let device_memory_gb = js_sys::Reflect::get(navigator.as_ref(), &JsValue::from_str("deviceMemory"))
        .ok()
        .and_then(|v| v.as_f64())
        .filter(|m| *m > 0.0);
    let has_gpu_api = js_sys::Reflect::get(navigator.as_ref(), &JsValue::from_str("gpu"))
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false);

    DeviceSignals {
        logical_cores,
        device_memory_gb,
        has_gpu_api,
        coarse_pointer: touch_primary(),
    }
}
