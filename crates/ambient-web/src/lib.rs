#![cfg(target_arch = "wasm32")]
//! Mount/unmount surface for the ambient rendering engine.
//!
//! The capability tier and the reduced-motion preference gate which
//! components mount at all; every mounted component subscribes to the
//! frame clock and reads the shared view state once per tick. All public
//! entry points swallow failures and degrade — the host page only ever
//! sees plainer visuals, never an exception.

use ambient_core::capability::CapabilityTier;
use ambient_core::color::{Rgb, SmoothedRgb};
use ambient_core::constants::{
    CORRIDOR_SEGMENTS, DEFAULT_ACCENT, PARALLAX_GLOBAL_MULTIPLIER, PARTICLE_POOL_HIGH,
    PARTICLE_POOL_MEDIUM,
};
use ambient_core::corridor::{Corridor, CorridorConfig, SegmentInstance};
use ambient_core::gradient::gradient_uniforms;
use ambient_core::state::ViewState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod capability;
mod clock;
mod corridor;
mod dom;
mod events;
mod gradient;
mod reveal;
mod trail;

use events::{ListenerHandle, MotionWatch};

// Host pages opt into each surface by placing these elements.
const GRADIENT_CANVAS_ID: &str = "ambient-gradient";
const CORRIDOR_CANVAS_ID: &str = "ambient-corridor";
const OVERLAY_CANVAS_ID: &str = "ambient-overlay";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ambient-web starting");
    Ok(())
}

struct Mounted {
    accent: Rc<RefCell<SmoothedRgb>>,
    frames: Vec<clock::FrameHandle>,
    listeners: Vec<ListenerHandle>,
    motion: Option<MotionWatch>,
    reveal: Option<Rc<RefCell<reveal::RevealOrchestrator>>>,
    /// Element carrying the static gradient, when that path is active.
    static_gradient_el: Rc<RefCell<Option<web::HtmlElement>>>,
    /// Cleared on unmount so a still-in-flight GPU init drops its result.
    gpu_alive: Rc<Cell<bool>>,
    torn_down: bool,
}

impl Mounted {
    fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.gpu_alive.set(false);
        for frame in &self.frames {
            frame.cancel();
        }
        self.frames.clear();
        self.listeners.clear();
        if let Some(mut motion) = self.motion.take() {
            motion.unsubscribe();
        }
        if let Some(reveal) = self.reveal.take() {
            reveal.borrow_mut().unmount();
        }
        log::info!("[engine] unmounted");
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// The engine's public handle.
#[wasm_bindgen]
pub struct Ambient {
    inner: Option<Mounted>,
}

#[wasm_bindgen]
impl Ambient {
    /// Detect capability and mount every component the environment allows.
    pub fn mount() -> Ambient {
        match try_mount() {
            Ok(inner) => Ambient { inner: Some(inner) },
            Err(e) => {
                log::warn!("[engine] mount failed, page stays static: {e:?}");
                Ambient { inner: None }
            }
        }
    }

    /// Navigation hook: set the page accent. The animated surfaces ease
    /// toward the new value; the static fallback snaps to it. Invalid
    /// input is logged and ignored.
    pub fn set_accent(&self, hex: &str) {
        let Some(inner) = &self.inner else { return };
        match Rgb::from_hex(hex) {
            Ok(rgb) => {
                inner.accent.borrow_mut().set_target(rgb);
                if let Some(el) = inner.static_gradient_el.borrow().as_ref() {
                    gradient::apply_static_fallback(el, rgb);
                }
            }
            Err(e) => log::warn!("[engine] {e}"),
        }
    }

    /// Tear everything down: frame callbacks, listeners, observers, GPU
    /// resources. Safe to call more than once.
    pub fn unmount(&mut self) {
        if let Some(mut inner) = self.inner.take() {
            inner.teardown();
        }
    }
}

fn try_mount() -> anyhow::Result<Mounted> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let tier = capability::detect();
    let (vw, vh) = dom::viewport_size(&window);
    let view = Rc::new(ViewState::new(vw, vh, false));

    // Fires immediately with the current preference, then reactively.
    let motion = {
        let view = view.clone();
        events::watch_motion_preference(move |reduced| view.write_reduced_motion(reduced))
    };
    let reduced = view.reduced_motion();
    log::info!("[engine] mounting: tier={tier:?} reduced_motion={reduced}");

    let accent = Rc::new(RefCell::new(SmoothedRgb::new(Rgb::new(
        DEFAULT_ACCENT[0],
        DEFAULT_ACCENT[1],
        DEFAULT_ACCENT[2],
    ))));

    let find_canvas = |id: &str| {
        document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    };
    let gradient_canvas = find_canvas(GRADIENT_CANVAS_ID);
    let corridor_canvas = find_canvas(CORRIDOR_CANVAS_ID);
    let overlay_canvas = find_canvas(OVERLAY_CANVAS_ID);

    // Only canvases with an animated surface need backing-size tracking.
    let shader_tier = tier > CapabilityTier::Low && !reduced;
    let mut tracked = Vec::new();
    if shader_tier {
        tracked.extend(gradient_canvas.iter().cloned());
        tracked.extend(overlay_canvas.iter().cloned());
        if tier == CapabilityTier::High {
            tracked.extend(corridor_canvas.iter().cloned());
        }
    }

    let listeners = vec![
        events::wire_scroll(&window, view.clone()),
        events::wire_pointer(&window, view.clone()),
        events::wire_resize(&window, view.clone(), tracked),
    ];

    let mut frames = Vec::new();
    let gpu_alive = Rc::new(Cell::new(true));
    let static_gradient_el = Rc::new(RefCell::new(None::<web::HtmlElement>));

    if let Some(canvas) = gradient_canvas {
        mount_gradient(
            canvas,
            tier,
            reduced,
            view.clone(),
            accent.clone(),
            gpu_alive.clone(),
            static_gradient_el.clone(),
            &mut frames,
        );
    }

    if let Some(canvas) = corridor_canvas {
        if tier == CapabilityTier::High && !reduced {
            mount_corridor(
                canvas,
                view.clone(),
                accent.clone(),
                gpu_alive.clone(),
                &mut frames,
            );
        } else {
            log::info!("[corridor] omitted: tier={tier:?} reduced_motion={reduced}");
        }
    }

    if shader_tier && !capability::touch_primary() {
        mount_motion_systems(&document, overlay_canvas, tier, view.clone(), accent.clone(), &mut frames);
    }

    let reveal = Rc::new(RefCell::new(reveal::RevealOrchestrator::mount(
        &document, reduced,
    )));
    {
        let reveal = reveal.clone();
        let view = view.clone();
        let mut forced = false;
        frames.push(clock::schedule(move |now| {
            if view.reduced_motion() && !forced {
                reveal.borrow_mut().force_done();
                forced = true;
            }
            reveal.borrow_mut().frame(now);
        }));
    }

    Ok(Mounted {
        accent,
        frames,
        listeners,
        motion: Some(motion),
        reveal: Some(reveal),
        static_gradient_el,
        gpu_alive,
        torn_down: false,
    })
}

#[allow(clippy::too_many_arguments)]
fn mount_gradient(
    canvas: web::HtmlCanvasElement,
    tier: CapabilityTier,
    reduced: bool,
    view: Rc<ViewState>,
    accent: Rc<RefCell<SmoothedRgb>>,
    alive: Rc<Cell<bool>>,
    static_el: Rc<RefCell<Option<web::HtmlElement>>>,
    frames: &mut Vec<clock::FrameHandle>,
) {
    if tier == CapabilityTier::Low || reduced {
        // No shader context is created at all on this path.
        let el = web::HtmlElement::from(canvas);
        gradient::apply_static_fallback(&el, accent.borrow().value());
        *static_el.borrow_mut() = Some(el);
        log::info!("[gradient] static fallback (tier={tier:?} reduced={reduced})");
        return;
    }

    dom::sync_canvas_backing_size(&canvas);
    let gpu: Rc<RefCell<Option<gradient::GpuGradient>>> = Rc::new(RefCell::new(None));
    {
        let gpu = gpu.clone();
        let canvas = canvas.clone();
        let alive = alive.clone();
        let static_el = static_el.clone();
        let accent = accent.clone();
        spawn_local(async move {
            match gradient::GpuGradient::new(&canvas).await {
                Ok(surface) => {
                    if !alive.get() {
                        // Unmounted while initializing; drop immediately.
                        return;
                    }
                    log::info!("[gradient] WebGPU surface ready");
                    *gpu.borrow_mut() = Some(surface);
                }
                Err(e) => {
                    log::warn!("[gradient] GPU init failed, using static fallback: {e:?}");
                    let el = web::HtmlElement::from(canvas);
                    gradient::apply_static_fallback(&el, accent.borrow().value());
                    *static_el.borrow_mut() = Some(el);
                }
            }
        });
    }

    let mut last_ts = None::<f64>;
    let mut went_static = false;
    frames.push(clock::schedule(move |now| {
        let dt = last_ts.map_or(0.0, |prev| clock::delta_seconds(prev, now));
        last_ts = Some(now);

        if view.reduced_motion() {
            if !went_static {
                let el = web::HtmlElement::from(canvas.clone());
                gradient::apply_static_fallback(&el, accent.borrow().value());
                *static_el.borrow_mut() = Some(el);
                went_static = true;
                log::info!("[gradient] reduced motion: switched to static fallback");
            }
            return;
        }

        accent.borrow_mut().step(dt);
        let mut gpu_ref = gpu.borrow_mut();
        let Some(surface) = gpu_ref.as_mut() else {
            return;
        };
        surface.resize_if_needed(canvas.width(), canvas.height());
        let (w, h) = surface.size();
        let uniforms = gradient_uniforms(
            [w as f32, h as f32],
            (now / 1000.0) as f32,
            view.scroll().progress,
            accent.borrow().value(),
        );
        if let Err(e) = surface.render(&uniforms) {
            log::warn!("[gradient] render error: {e:?}");
        }
    }));
}

fn mount_corridor(
    canvas: web::HtmlCanvasElement,
    view: Rc<ViewState>,
    accent: Rc<RefCell<SmoothedRgb>>,
    alive: Rc<Cell<bool>>,
    frames: &mut Vec<clock::FrameHandle>,
) {
    let mut scene = match Corridor::new(CorridorConfig::default()) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("[corridor] {e}");
            return;
        }
    };
    dom::sync_canvas_backing_size(&canvas);

    let gpu: Rc<RefCell<Option<corridor::GpuCorridor>>> = Rc::new(RefCell::new(None));
    {
        let gpu = gpu.clone();
        let canvas = canvas.clone();
        let alive = alive.clone();
        spawn_local(async move {
            match corridor::GpuCorridor::new(&canvas, CORRIDOR_SEGMENTS).await {
                Ok(surface) => {
                    if !alive.get() {
                        return;
                    }
                    log::info!("[corridor] WebGPU scene ready");
                    *gpu.borrow_mut() = Some(surface);
                }
                Err(e) => {
                    // The scene is omitted, not simplified; the page keeps
                    // its static background.
                    log::warn!("[corridor] GPU init failed, scene omitted: {e:?}");
                }
            }
        });
    }

    let mut instances = vec![SegmentInstance { z: 0.0, phase: 0.0 }; CORRIDOR_SEGMENTS];
    let mut last_ts = None::<f64>;
    let mut hidden = false;
    frames.push(clock::schedule(move |now| {
        let dt = last_ts.map_or(0.0, |prev| clock::delta_seconds(prev, now));
        last_ts = Some(now);

        if view.reduced_motion() {
            if !hidden {
                dom::set_style(&web::HtmlElement::from(canvas.clone()), "opacity", "0");
                hidden = true;
                log::info!("[corridor] reduced motion: scene hidden");
            }
            return;
        }
        if hidden {
            dom::set_style(&web::HtmlElement::from(canvas.clone()), "opacity", "1");
            hidden = false;
        }

        let scroll = view.scroll();
        scene.advance(scroll.progress, view.pointer(), dt);

        let mut gpu_ref = gpu.borrow_mut();
        let Some(surface) = gpu_ref.as_mut() else {
            return;
        };
        surface.resize_if_needed(canvas.width(), canvas.height());
        scene.instances(&mut instances);
        let uniforms = scene.uniforms(
            surface.aspect(),
            scroll.progress,
            (now / 1000.0) as f32,
            accent.borrow().value(),
        );
        if let Err(e) = surface.render(&uniforms, &instances) {
            log::warn!("[corridor] render error: {e:?}");
        }
    }));
}

fn mount_motion_systems(
    document: &web::Document,
    overlay_canvas: Option<web::HtmlCanvasElement>,
    tier: CapabilityTier,
    view: Rc<ViewState>,
    accent: Rc<RefCell<SmoothedRgb>>,
    frames: &mut Vec<clock::FrameHandle>,
) {
    let layers = trail::collect_parallax_layers(document);

    let pool = if tier == CapabilityTier::High {
        PARTICLE_POOL_HIGH
    } else {
        PARTICLE_POOL_MEDIUM
    };
    let mut surface = overlay_canvas.and_then(|canvas| {
        dom::sync_canvas_backing_size(&canvas);
        match trail::TrailSurface::new(canvas, pool) {
            Ok(s) => Some(s),
            Err(e) => {
                log::warn!("[trail] overlay unavailable: {e:?}");
                None
            }
        }
    });

    if layers.is_empty() && surface.is_none() {
        return;
    }
    log::info!(
        "[trail] mounted: particles={} parallax_layers={}",
        surface.is_some().then_some(pool).unwrap_or(0),
        layers.len()
    );

    let mut last_ts = None::<f64>;
    let mut cleared = false;
    frames.push(clock::schedule(move |now| {
        let dt = last_ts.map_or(0.0, |prev| clock::delta_seconds(prev, now));
        last_ts = Some(now);

        if view.reduced_motion() {
            if !cleared {
                if let Some(s) = &surface {
                    s.clear();
                }
                trail::clear_parallax(&layers);
                cleared = true;
            }
            return;
        }
        cleared = false;

        if let Some(s) = surface.as_mut() {
            s.frame(dt, &view, accent.borrow().value());
        }
        trail::apply_parallax(&layers, view.scroll().scroll_y, PARALLAX_GLOBAL_MULTIPLIER);
    }));
}
