//! Accent color parsing and smoothed interpolation.
//!
//! Navigation supplies a target accent per page/section; the rendered value
//! eases toward it instead of jumping. The approach rate is expressed as a
//! fraction of remaining distance per reference frame and rescaled by
//! elapsed time, so the cross-fade settles in the same ~1–2 s everywhere.

use crate::constants::{ACCENT_APPROACH_PER_FRAME, ACCENT_SNAP_EPSILON, REFERENCE_FPS};
use crate::error::EngineError;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `#rgb` shorthand into linear-ish [0,1] channels.
    pub fn from_hex(s: &str) -> Result<Self, EngineError> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() {
            return Err(EngineError::InvalidColor(s.to_string()));
        }
        let (r, g, b) = match hex.len() {
            6 => (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ),
            3 => {
                let one = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17);
                (one(0), one(1), one(2))
            }
            _ => return Err(EngineError::InvalidColor(s.to_string())),
        };
        match (r, g, b) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self {
                r: r as f32 / 255.0,
                g: g as f32 / 255.0,
                b: b as f32 / 255.0,
            }),
            _ => Err(EngineError::InvalidColor(s.to_string())),
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// CSS `rgb(...)` form, used by the static fallback path.
    pub fn to_css(self) -> String {
        let to8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("rgb({}, {}, {})", to8(self.r), to8(self.g), to8(self.b))
    }
}

/// Accent value that chases a target without ever overshooting it.
#[derive(Clone, Copy, Debug)]
pub struct SmoothedRgb {
    current: Rgb,
    target: Rgb,
}

impl SmoothedRgb {
    pub fn new(initial: Rgb) -> Self {
        Self {
            current: initial,
            target: initial,
        }
    }

    pub fn set_target(&mut self, target: Rgb) {
        self.target = target;
    }

    pub fn value(&self) -> Rgb {
        self.current
    }

    pub fn target(&self) -> Rgb {
        self.target
    }

    pub fn at_rest(&self) -> bool {
        self.current == self.target
    }

    /// Advance by `dt_sec`. Moves each channel a fixed fraction of the
    /// remaining distance per reference frame; once within the snap epsilon
    /// the channel lands exactly on the target, so the fixed point is exact.
    pub fn step(&mut self, dt_sec: f32) {
        if self.at_rest() {
            return;
        }
        let keep = (1.0 - ACCENT_APPROACH_PER_FRAME).powf(dt_sec.max(0.0) * REFERENCE_FPS);
        let alpha = 1.0 - keep;
        self.current.r = approach(self.current.r, self.target.r, alpha);
        self.current.g = approach(self.current.g, self.target.g, alpha);
        self.current.b = approach(self.current.b, self.target.b, alpha);
    }
}

#[inline]
fn approach(current: f32, target: f32, alpha: f32) -> f32 {
    let next = current + (target - current) * alpha;
    if (target - next).abs() < ACCENT_SNAP_EPSILON {
        target
    } else {
        next
    }
}
