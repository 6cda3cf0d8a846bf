//! Multi-layer scroll parallax. Offsets are pure functions of the current
//! scroll offset, never integrated, so layers cannot drift over time.

use crate::constants::PARALLAX_GLOBAL_MULTIPLIER;

/// Screen-space offset for one layer. Higher multipliers move faster,
/// which is what reads as depth.
#[inline]
pub fn layer_offset(scroll_offset: f32, speed: f32, global: f32) -> f32 {
    scroll_offset * speed * global
}

#[derive(Clone, Copy, Debug)]
pub struct ParallaxLayer {
    pub speed: f32,
}

pub struct ParallaxRig {
    layers: Vec<ParallaxLayer>,
    global: f32,
}

impl ParallaxRig {
    pub fn new(layers: Vec<ParallaxLayer>) -> Self {
        Self {
            layers,
            global: PARALLAX_GLOBAL_MULTIPLIER,
        }
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Offsets for every layer at the given scroll offset from the
    /// container top. `out` must have `len()` entries.
    pub fn offsets(&self, scroll_offset: f32, out: &mut [f32]) {
        debug_assert_eq!(out.len(), self.layers.len());
        for (o, layer) in out.iter_mut().zip(&self.layers) {
            *o = layer_offset(scroll_offset, layer.speed, self.global);
        }
    }
}
