//! Floating particle field with pointer repulsion and connection lines.
//!
//! The pool is fixed-size by construction: particles whose lifetime expires
//! respawn in place rather than being freed, so exceeding the bound is
//! structurally impossible. The connection pass is O(n²) in pool size,
//! which is why the pool is the hard budget knob.

use crate::constants::{
    CONNECT_RADIUS_PX, PARTICLE_LIFETIME_MAX, PARTICLE_LIFETIME_MIN, PARTICLE_SPEED_MAX,
    PARTICLE_SPEED_MIN, REPULSION_RADIUS_PX, REPULSION_STRENGTH,
};
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug)]
pub struct ParticleFieldConfig {
    pub capacity: usize,
    pub bounds: [f32; 2],
    pub repulsion_radius: f32,
    pub repulsion_strength: f32,
    pub connect_radius: f32,
}

impl ParticleFieldConfig {
    pub fn sized(capacity: usize, width: f32, height: f32) -> Self {
        Self {
            capacity,
            bounds: [width.max(1.0), height.max(1.0)],
            repulsion_radius: REPULSION_RADIUS_PX,
            repulsion_strength: REPULSION_STRENGTH,
            connect_radius: CONNECT_RADIUS_PX,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Particle {
    pos: Vec2,
    vel: Vec2,
    age: f32,
    lifetime: f32,
}

/// Connection line between two particles; `strength` fades to zero as the
/// pair separates toward the connection radius.
#[derive(Clone, Copy, Debug)]
pub struct Connection {
    pub a: [f32; 2],
    pub b: [f32; 2],
    pub strength: f32,
}

pub struct ParticleField {
    cfg: ParticleFieldConfig,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(cfg: ParticleFieldConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..cfg.capacity)
            .map(|_| spawn(&mut rng, cfg.bounds))
            .collect();
        Self {
            cfg,
            particles,
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cfg.capacity
    }

    /// Container resized; particles keep their positions, clamped into the
    /// new bounds on the next wrap check.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.cfg.bounds = [width.max(1.0), height.max(1.0)];
    }

    /// One integration step. `pointer_px` is the pointer in container
    /// pixels, if it is over the container this frame.
    pub fn step(&mut self, dt_sec: f32, pointer_px: Option<[f32; 2]>) {
        let dt = dt_sec.clamp(0.0, 0.1);
        let [w, h] = self.cfg.bounds;
        let repulse_r = self.cfg.repulsion_radius;
        for p in &mut self.particles {
            p.age += dt;
            if p.age >= p.lifetime {
                *p = spawn(&mut self.rng, self.cfg.bounds);
                continue;
            }

            if let Some([px, py]) = pointer_px {
                let away = p.pos - Vec2::new(px, py);
                let dist = away.length();
                if dist < repulse_r && dist > 1e-3 {
                    // Closer = stronger push, decaying linearly to zero at
                    // the radius boundary.
                    let falloff = 1.0 - dist / repulse_r;
                    p.pos += away / dist * self.cfg.repulsion_strength * falloff * dt;
                }
            }

            p.pos += p.vel * dt;

            // Wrap around container edges.
            if p.pos.x < 0.0 {
                p.pos.x += w;
            } else if p.pos.x > w {
                p.pos.x -= w;
            }
            if p.pos.y < 0.0 {
                p.pos.y += h;
            } else if p.pos.y > h {
                p.pos.y -= h;
            }
        }
    }

    pub fn positions<'a>(&'a self) -> impl Iterator<Item = [f32; 2]> + 'a {
        self.particles.iter().map(|p| [p.pos.x, p.pos.y])
    }

    /// Opacity factor for a particle: eases in at spawn and out near death
    /// so respawns never pop.
    pub fn alpha(&self, index: usize) -> f32 {
        let p = &self.particles[index];
        let t = (p.age / p.lifetime).clamp(0.0, 1.0);
        (t * 8.0).min(1.0).min((1.0 - t) * 4.0).max(0.0)
    }

    /// Collect this frame's connection lines into `out` (cleared first; the
    /// buffer is reused across frames to keep the pass allocation-free).
    pub fn connections(&self, out: &mut Vec<Connection>) {
        out.clear();
        let r = self.cfg.connect_radius;
        let r2 = r * r;
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let d2 = (self.particles[i].pos - self.particles[j].pos).length_squared();
                if d2 < r2 {
                    out.push(Connection {
                        a: self.particles[i].pos.into(),
                        b: self.particles[j].pos.into(),
                        strength: 1.0 - (d2.sqrt() / r),
                    });
                }
            }
        }
    }
}

fn spawn(rng: &mut StdRng, bounds: [f32; 2]) -> Particle {
    let heading = rng.gen_range(0.0..TAU);
    let speed = rng.gen_range(PARTICLE_SPEED_MIN..PARTICLE_SPEED_MAX);
    Particle {
        pos: Vec2::new(
            rng.gen_range(0.0..bounds[0]),
            rng.gen_range(0.0..bounds[1]),
        ),
        vel: Vec2::new(heading.cos(), heading.sin()) * speed,
        age: 0.0,
        lifetime: rng.gen_range(PARTICLE_LIFETIME_MIN..PARTICLE_LIFETIME_MAX),
    }
}
