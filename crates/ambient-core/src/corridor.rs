//! Infinite-corridor simulation: a fixed ring of segments recycled around a
//! scroll-driven camera.
//!
//! The camera looks down -Z. Scroll progress maps linearly to camera depth;
//! segments that fall behind the camera are teleported ahead by whole spans,
//! so a bounded set of geometry renders an unbounded tunnel. Nothing is
//! allocated after construction.

use crate::constants::{
    CAMERA_LATERAL_MAX, CAMERA_ROLL_MAX_RAD, CAMERA_SPRING_OMEGA, CORRIDOR_SEGMENTS,
    INTENSITY_AMBIENT, INTENSITY_PEAK, INTENSITY_PEAK_P, INTENSITY_PULSE_START_P,
    INTENSITY_RAMP_END, INTENSITY_RAMP_START_P, INTENSITY_SETTLE, RECYCLE_MARGIN, SEGMENT_LENGTH,
    SEGMENT_PACKING, TRAVERSAL_DEPTH,
};
use crate::color::Rgb;
use crate::error::EngineError;
use crate::gradient::smoothstep;
use crate::state::PointerState;
use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug)]
pub struct CorridorConfig {
    pub segment_count: usize,
    pub segment_length: f32,
    /// Packing factor < 1; recycled segments land slightly early so the far
    /// seam is always covered before it can show.
    pub packing: f32,
    pub recycle_margin: f32,
    pub traversal_depth: f32,
}

impl Default for CorridorConfig {
    fn default() -> Self {
        Self {
            segment_count: CORRIDOR_SEGMENTS,
            segment_length: SEGMENT_LENGTH,
            packing: SEGMENT_PACKING,
            recycle_margin: RECYCLE_MARGIN,
            traversal_depth: TRAVERSAL_DEPTH,
        }
    }
}

impl CorridorConfig {
    /// Depth covered by the whole ring; recycling always moves segments by
    /// whole spans, which is what keeps rendered depth congruent with the
    /// unbounded-tunnel depth.
    pub fn span(&self) -> f32 {
        self.segment_count as f32 * self.segment_length * self.packing
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Segment {
    pub index: usize,
    pub z: f32,
}

/// Camera pose consumed by the renderer.
#[derive(Clone, Copy, Debug, Default)]
pub struct CorridorCamera {
    pub z: f32,
    pub lateral_x: f32,
    pub lateral_y: f32,
    pub roll: f32,
}

impl CorridorCamera {
    /// Right-handed view-projection looking down -Z, with the roll folded
    /// into the up vector.
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let eye = Vec3::new(self.lateral_x, self.lateral_y, self.z);
        let target = eye + Vec3::NEG_Z;
        let up = Vec3::new(self.roll.sin(), self.roll.cos(), 0.0);
        let proj = Mat4::perspective_rh(1.2, aspect.max(0.1), 0.1, 400.0);
        proj * Mat4::look_at_rh(eye, target, up)
    }
}

/// Per-segment instance data uploaded each frame. Layout matches
/// `shaders/corridor.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SegmentInstance {
    pub z: f32,
    /// Stable per-slot variation phase in [0,1).
    pub phase: f32,
}

/// Scene-level uniforms for the corridor pass.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CorridorUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub accent: [f32; 3],
    pub intensity: f32,
    /// x = camera z, y = ring span (fade band), z = time in seconds, w unused.
    pub params: [f32; 4],
}

/// Critically damped second-order tracker. Follows a moving target without
/// oscillating, unlike a raw lerp which jitters at uneven frame times.
#[derive(Clone, Copy, Debug, Default)]
pub struct Spring {
    pub value: f32,
    pub velocity: f32,
}

impl Spring {
    pub fn step(&mut self, target: f32, omega: f32, dt_sec: f32) {
        let accel = omega * omega * (target - self.value) - 2.0 * omega * self.velocity;
        self.velocity += accel * dt_sec;
        self.value += self.velocity * dt_sec;
    }
}

pub struct Corridor {
    cfg: CorridorConfig,
    segments: Vec<Segment>,
    camera: CorridorCamera,
    lateral_x: Spring,
    lateral_y: Spring,
    roll: Spring,
}

impl Corridor {
    pub fn new(cfg: CorridorConfig) -> Result<Self, EngineError> {
        if cfg.segment_count < 2 {
            return Err(EngineError::InvalidConfig("segment_count must be >= 2"));
        }
        if cfg.segment_length <= 0.0 || cfg.traversal_depth <= 0.0 {
            return Err(EngineError::InvalidConfig("depths must be positive"));
        }
        if !(0.0 < cfg.packing && cfg.packing <= 1.0) {
            return Err(EngineError::InvalidConfig("packing must be in (0, 1]"));
        }
        let spacing = cfg.segment_length * cfg.packing;
        let segments = (0..cfg.segment_count)
            .map(|i| Segment {
                index: i,
                z: -(i as f32 + 1.0) * spacing,
            })
            .collect();
        Ok(Self {
            cfg,
            segments,
            camera: CorridorCamera::default(),
            lateral_x: Spring::default(),
            lateral_y: Spring::default(),
            roll: Spring::default(),
        })
    }

    pub fn config(&self) -> &CorridorConfig {
        &self.cfg
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn camera(&self) -> CorridorCamera {
        self.camera
    }

    /// Camera depth for a scroll progress value. Monotonic in progress.
    pub fn depth_for_progress(&self, progress: f32) -> f32 {
        -progress.clamp(0.0, 1.0) * self.cfg.traversal_depth
    }

    /// Advance one frame: move the camera to the depth implied by scroll
    /// progress, ease the lateral rig toward the pointer, and recycle any
    /// segment outside the active window. Holds for any per-frame camera
    /// speed because recycling loops until the segment is back in range.
    pub fn advance(&mut self, progress: f32, pointer: PointerState, dt_sec: f32) {
        self.camera.z = self.depth_for_progress(progress);

        let dt = dt_sec.clamp(0.0, 0.1);
        self.lateral_x
            .step(pointer.x * CAMERA_LATERAL_MAX, CAMERA_SPRING_OMEGA, dt);
        self.lateral_y
            .step(pointer.y * CAMERA_LATERAL_MAX * 0.4, CAMERA_SPRING_OMEGA, dt);
        self.roll
            .step(-pointer.x * CAMERA_ROLL_MAX_RAD, CAMERA_SPRING_OMEGA, dt);
        self.camera.lateral_x = self.lateral_x.value;
        self.camera.lateral_y = self.lateral_y.value;
        self.camera.roll = self.roll.value;

        let span = self.cfg.span();
        let behind = self.camera.z + self.cfg.recycle_margin;
        let ahead = behind - span;
        for seg in &mut self.segments {
            while seg.z > behind {
                seg.z -= span;
            }
            // Scrolling back up pulls the camera out of the tunnel; recycle
            // the other way so the window stays covered.
            while seg.z <= ahead {
                seg.z += span;
            }
        }
    }

    /// Fill `out` with this frame's per-segment instance data. `out` must
    /// have exactly `segment_count` slots; the renderer allocates it once.
    pub fn instances(&self, out: &mut [SegmentInstance]) {
        debug_assert_eq!(out.len(), self.segments.len());
        let n = self.cfg.segment_count as f32;
        for (slot, seg) in out.iter_mut().zip(&self.segments) {
            *slot = SegmentInstance {
                z: seg.z,
                phase: seg.index as f32 / n,
            };
        }
    }

    pub fn uniforms(&self, aspect: f32, progress: f32, time_sec: f32, accent: Rgb) -> CorridorUniforms {
        CorridorUniforms {
            view_proj: self.camera.view_proj(aspect).to_cols_array_2d(),
            accent: accent.to_array(),
            intensity: intensity(progress),
            params: [self.camera.z, self.cfg.span(), time_sec, 0.0],
        }
    }
}

/// Scroll-progress-driven lighting/emissive scalar. Three phases:
/// an ambient plateau below `INTENSITY_RAMP_START_P`, a smoothstep ramp to
/// `INTENSITY_RAMP_END` over the mid range, then a pulse that peaks at
/// `INTENSITY_PEAK_P` and settles by the end of scrollable content.
/// Pure in progress, so identical scroll positions always light identically.
pub fn intensity(progress: f32) -> f32 {
    let p = progress.clamp(0.0, 1.0);
    if p < INTENSITY_RAMP_START_P {
        INTENSITY_AMBIENT
    } else if p < INTENSITY_PULSE_START_P {
        let t = smoothstep(INTENSITY_RAMP_START_P, INTENSITY_PULSE_START_P, p);
        INTENSITY_AMBIENT + (INTENSITY_RAMP_END - INTENSITY_AMBIENT) * t
    } else if p < INTENSITY_PEAK_P {
        let t = smoothstep(INTENSITY_PULSE_START_P, INTENSITY_PEAK_P, p);
        INTENSITY_RAMP_END + (INTENSITY_PEAK - INTENSITY_RAMP_END) * t
    } else {
        let t = smoothstep(INTENSITY_PEAK_P, 1.0, p);
        INTENSITY_PEAK + (INTENSITY_SETTLE - INTENSITY_PEAK) * t
    }
}
