//! Pure math behind the animated gradient surface.
//!
//! The GPU side uploads what these functions compute; keeping the orbit and
//! intensity math here means the shader uniforms are reproducible on the
//! host without any graphics context.

use crate::color::Rgb;
use crate::constants::{
    BLOB_COUNT, BLOB_HOME, BLOB_ORBIT_FREQ_HZ, BLOB_ORBIT_RADIUS, BLOB_RADIUS, BLOB_WEIGHT,
    GRADIENT_SCROLL_BOOST_MAX,
};
use std::f32::consts::TAU;

/// Orbit center of one blob at `time_sec`, in normalized surface coords.
/// Each blob uses distinct x/y frequencies so the field never phase-locks
/// into a visible repeating pattern.
pub fn blob_center(index: usize, time_sec: f32) -> [f32; 2] {
    let [fx, fy] = BLOB_ORBIT_FREQ_HZ[index];
    let [hx, hy] = BLOB_HOME[index];
    let r = BLOB_ORBIT_RADIUS[index];
    [
        hx + r * (TAU * fx * time_sec).cos(),
        hy + r * (TAU * fy * time_sec).sin(),
    ]
}

pub fn blob_centers(time_sec: f32) -> [[f32; 2]; BLOB_COUNT] {
    [
        blob_center(0, time_sec),
        blob_center(1, time_sec),
        blob_center(2, time_sec),
    ]
}

/// Scroll-depth brightness multiplier, linear and bounded.
pub fn scroll_boost(progress: f32) -> f32 {
    1.0 + GRADIENT_SCROLL_BOOST_MAX * progress.clamp(0.0, 1.0)
}

#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Contribution of blob `index` at distance `dist` from its center.
pub fn blob_falloff(index: usize, dist: f32) -> f32 {
    BLOB_WEIGHT[index] * (1.0 - smoothstep(0.0, BLOB_RADIUS[index], dist))
}

/// Reference CPU evaluation of the field at a surface point. The WGSL
/// fragment stage implements the same additive composite over a near-black
/// base; this version exists so the math stays unit-testable.
pub fn field_sample(uv: [f32; 2], time_sec: f32, progress: f32, accent: Rgb) -> Rgb {
    let boost = scroll_boost(progress);
    let mut sum = 0.0;
    for (i, c) in blob_centers(time_sec).iter().enumerate() {
        let dx = uv[0] - c[0];
        let dy = uv[1] - c[1];
        sum += blob_falloff(i, (dx * dx + dy * dy).sqrt());
    }
    let s = (sum * boost).min(1.5);
    Rgb {
        r: 0.02 + accent.r * s,
        g: 0.02 + accent.g * s,
        b: 0.04 + accent.b * s,
    }
}

/// Uniform block consumed by the gradient fragment stage. Layout matches
/// `shaders/gradient.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GradientUniforms {
    pub resolution: [f32; 2],
    pub time_sec: f32,
    pub boost: f32,
    pub accent: [f32; 3],
    pub _pad: f32,
    /// xy = orbit center, z = falloff radius, w = weight.
    pub blobs: [[f32; 4]; BLOB_COUNT],
}

pub fn gradient_uniforms(
    resolution: [f32; 2],
    time_sec: f32,
    progress: f32,
    accent: Rgb,
) -> GradientUniforms {
    let centers = blob_centers(time_sec);
    let mut blobs = [[0.0; 4]; BLOB_COUNT];
    for i in 0..BLOB_COUNT {
        blobs[i] = [centers[i][0], centers[i][1], BLOB_RADIUS[i], BLOB_WEIGHT[i]];
    }
    GradientUniforms {
        resolution,
        time_sec,
        boost: scroll_boost(progress),
        accent: accent.to_array(),
        _pad: 0.0,
        blobs,
    }
}

/// Static two-stop radial gradient used whenever the shader path is gated
/// off or fails; takes the current (non-animated) accent.
pub fn css_fallback_gradient(accent: Rgb) -> String {
    let dim = Rgb {
        r: accent.r * 0.25,
        g: accent.g * 0.25,
        b: accent.b * 0.25,
    };
    format!(
        "radial-gradient(ellipse at 50% 35%, {} 0%, {} 100%)",
        dim.to_css(),
        Rgb::new(0.02, 0.02, 0.04).to_css()
    )
}
