//! Cursor trail: one leader point fed by the raw pointer, plus a short
//! chain of followers with per-follower lag, giving the staggered comet
//! tail. Lag factors are expressed per reference frame and rescaled by
//! elapsed time so the tail shape is frame-rate independent.

use crate::constants::REFERENCE_FPS;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug)]
pub struct TrailPoint {
    pub x: f32,
    pub y: f32,
    /// Per-reference-frame keep factor in (0,1); larger lags further behind.
    delay: f32,
}

pub struct CursorTrail {
    leader: [f32; 2],
    followers: SmallVec<[TrailPoint; 8]>,
    primed: bool,
}

impl CursorTrail {
    pub fn new(delays: &[f32]) -> Self {
        let followers = delays
            .iter()
            .map(|&delay| TrailPoint {
                x: 0.0,
                y: 0.0,
                delay: delay.clamp(0.0, 0.99),
            })
            .collect();
        Self {
            leader: [0.0, 0.0],
            followers,
            primed: false,
        }
    }

    pub fn len(&self) -> usize {
        self.followers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.followers.is_empty()
    }

    pub fn set_leader(&mut self, x: f32, y: f32) {
        self.leader = [x, y];
        if !self.primed {
            // First pointer sample: snap the whole tail onto the leader so
            // it does not streak in from the origin.
            for f in &mut self.followers {
                f.x = x;
                f.y = y;
            }
            self.primed = true;
        }
    }

    /// Advance all followers one frame: each closes `1 - delay` of its gap
    /// to the point ahead of it per reference frame.
    pub fn step(&mut self, dt_sec: f32) {
        if !self.primed {
            return;
        }
        let frames = dt_sec.max(0.0) * REFERENCE_FPS;
        let mut lead = self.leader;
        for f in &mut self.followers {
            let alpha = 1.0 - f.delay.powf(frames);
            f.x += (lead[0] - f.x) * alpha;
            f.y += (lead[1] - f.y) * alpha;
            lead = [f.x, f.y];
        }
    }

    pub fn points(&self) -> &[TrailPoint] {
        &self.followers
    }
}
