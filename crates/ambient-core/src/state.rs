//! Shared per-session view state.
//!
//! Scroll, pointer, viewport and the live reduced-motion flag live in one
//! store with a single writer path (the event listeners) and many read-only
//! consumers. Writes are last-writer-wins snapshots; each frame tick reads
//! the store once and never writes back.

use std::cell::Cell;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub scroll_y: f32,
    /// Scroll depth in [0,1]; 0 when the content is shorter than the viewport.
    pub progress: f32,
}

/// Pointer position in normalized device coordinates, both axes in [-1,1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

/// Compute scroll state from raw document metrics.
pub fn scroll_state(scroll_y: f64, document_height: f64, viewport_height: f64) -> ScrollState {
    let range = document_height - viewport_height;
    let progress = if range > 0.0 {
        (scroll_y / range).clamp(0.0, 1.0) as f32
    } else {
        0.0
    };
    ScrollState {
        scroll_y: scroll_y.max(0.0) as f32,
        progress,
    }
}

/// Map client pixel coordinates into NDC.
pub fn pointer_ndc(client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) -> PointerState {
    let w = viewport_w.max(1.0);
    let h = viewport_h.max(1.0);
    PointerState {
        x: ((client_x / w) * 2.0 - 1.0).clamp(-1.0, 1.0) as f32,
        y: (1.0 - (client_y / h) * 2.0).clamp(-1.0, 1.0) as f32,
    }
}

#[derive(Debug, Default)]
pub struct ViewState {
    scroll: Cell<ScrollState>,
    pointer: Cell<PointerState>,
    viewport: Cell<(u32, u32)>,
    reduced_motion: Cell<bool>,
}

impl ViewState {
    pub fn new(viewport_w: u32, viewport_h: u32, reduced_motion: bool) -> Self {
        let s = Self::default();
        s.viewport.set((viewport_w.max(1), viewport_h.max(1)));
        s.reduced_motion.set(reduced_motion);
        s
    }

    pub fn scroll(&self) -> ScrollState {
        self.scroll.get()
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer.get()
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport.get()
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion.get()
    }

    /// Pointer position in viewport pixels, derived from the NDC snapshot.
    pub fn pointer_px(&self) -> [f32; 2] {
        let (w, h) = self.viewport.get();
        let p = self.pointer.get();
        [
            (p.x * 0.5 + 0.5) * w as f32,
            (1.0 - (p.y * 0.5 + 0.5)) * h as f32,
        ]
    }

    pub fn write_scroll(&self, s: ScrollState) {
        self.scroll.set(s);
    }

    pub fn write_pointer(&self, p: PointerState) {
        self.pointer.set(p);
    }

    pub fn write_viewport(&self, w: u32, h: u32) {
        self.viewport.set((w.max(1), h.max(1)));
    }

    pub fn write_reduced_motion(&self, reduced: bool) {
        self.reduced_motion.set(reduced);
    }
}
