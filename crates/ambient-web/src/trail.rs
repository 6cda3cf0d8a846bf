//! Pointer-driven overlay: cursor trail rings and the floating particle
//! field share one Canvas2D surface; scroll parallax is applied to tagged
//! DOM layers from the same frame callback. None of this mounts on
//! touch-primary devices or under reduced motion.

use crate::dom;
use ambient_core::color::Rgb;
use ambient_core::constants::{
    PARTICLE_RADIUS_PX, PARTICLE_SEED, TRAIL_FOLLOWER_DELAYS, TRAIL_RING_RADIUS_PX,
};
use ambient_core::parallax::layer_offset;
use ambient_core::particles::{Connection, ParticleField, ParticleFieldConfig};
use ambient_core::state::ViewState;
use ambient_core::trail::CursorTrail;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct TrailSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    trail: CursorTrail,
    field: ParticleField,
    // Reused across frames; the connection pass never allocates.
    connections: Vec<Connection>,
}

impl TrailSurface {
    pub fn new(canvas: web::HtmlCanvasElement, particle_pool: usize) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|o| o.dyn_into::<web::CanvasRenderingContext2d>().ok())
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?;
        let field = ParticleField::new(
            ParticleFieldConfig::sized(
                particle_pool,
                canvas.width().max(1) as f32,
                canvas.height().max(1) as f32,
            ),
            PARTICLE_SEED,
        );
        Ok(Self {
            canvas,
            ctx,
            trail: CursorTrail::new(&TRAIL_FOLLOWER_DELAYS),
            field,
            connections: Vec::new(),
        })
    }

    /// Advance both simulations and redraw the overlay.
    pub fn frame(&mut self, dt_sec: f32, view: &ViewState, accent: Rgb) {
        let w = self.canvas.width().max(1) as f32;
        let h = self.canvas.height().max(1) as f32;
        self.field.set_bounds(w, h);

        // The overlay canvas backing store runs at devicePixelRatio; the
        // pointer snapshot is in CSS pixels.
        let (vw, _) = view.viewport();
        let scale = w / vw.max(1) as f32;
        let [px, py] = view.pointer_px();
        let pointer = [px * scale, py * scale];

        self.trail.set_leader(pointer[0], pointer[1]);
        self.trail.step(dt_sec);
        self.field.step(dt_sec, Some(pointer));

        self.draw(accent, scale);
    }

    fn draw(&mut self, accent: Rgb, scale: f32) {
        let ctx = &self.ctx;
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        ctx.clear_rect(0.0, 0.0, w, h);

        let accent_css = accent.to_css();

        // Connection lines first, faintest layer.
        self.field.connections(&mut self.connections);
        ctx.set_line_width((1.0 * scale) as f64);
        ctx.set_stroke_style_str(&accent_css);
        for c in &self.connections {
            ctx.set_global_alpha((c.strength * 0.18) as f64);
            ctx.begin_path();
            ctx.move_to(c.a[0] as f64, c.a[1] as f64);
            ctx.line_to(c.b[0] as f64, c.b[1] as f64);
            ctx.stroke();
        }

        // Particles.
        ctx.set_fill_style_str(&accent_css);
        for (i, [x, y]) in self.field.positions().enumerate() {
            ctx.set_global_alpha((self.field.alpha(i) * 0.6) as f64);
            ctx.begin_path();
            let _ = ctx.arc(
                x as f64,
                y as f64,
                (PARTICLE_RADIUS_PX * scale) as f64,
                0.0,
                TAU,
            );
            ctx.fill();
        }

        // Cursor trail rings, front to back.
        ctx.set_stroke_style_str(&accent_css);
        ctx.set_line_width((1.5 * scale) as f64);
        for (i, p) in self.trail.points().iter().enumerate() {
            let fade = 1.0 - i as f32 / self.trail.len().max(1) as f32;
            ctx.set_global_alpha((0.5 * fade) as f64);
            ctx.begin_path();
            let _ = ctx.arc(
                p.x as f64,
                p.y as f64,
                (TRAIL_RING_RADIUS_PX[i.min(TRAIL_RING_RADIUS_PX.len() - 1)] * scale) as f64,
                0.0,
                TAU,
            );
            ctx.stroke();
        }

        ctx.set_global_alpha(1.0);
    }

    /// Blank the overlay; used when motion preferences change mid-session.
    pub fn clear(&self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }
}

// ---------------- scroll parallax ----------------

pub struct ParallaxBinding {
    el: web::HtmlElement,
    speed: f32,
}

/// Collect `[data-parallax-speed]` layers.
pub fn collect_parallax_layers(document: &web::Document) -> Vec<ParallaxBinding> {
    dom::collect_elements(document, "[data-parallax-speed]")
        .into_iter()
        .map(|el| {
            let speed = dom::data_attr_f32(&el, "data-parallax-speed", 0.2);
            ParallaxBinding { el, speed }
        })
        .collect()
}

/// Apply per-layer offsets. Pure in scroll position, so there is no drift
/// to accumulate; re-applying the same scroll yields the same transforms.
pub fn apply_parallax(layers: &[ParallaxBinding], scroll_y: f32, global: f32) {
    for layer in layers {
        let offset = layer_offset(scroll_y, layer.speed, global);
        dom::set_style(
            &layer.el,
            "transform",
            &format!("translate3d(0, {offset:.2}px, 0)"),
        );
    }
}

/// Reset layer transforms on teardown.
pub fn clear_parallax(layers: &[ParallaxBinding]) {
    for layer in layers {
        dom::set_style(&layer.el, "transform", "none");
    }
}
