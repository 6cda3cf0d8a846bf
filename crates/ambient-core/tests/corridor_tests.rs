// Host-side tests for corridor segment recycling, the camera rig, and the
// scroll intensity curve.

use ambient_core::constants::{
    CAMERA_LATERAL_MAX, CAMERA_ROLL_MAX_RAD, INTENSITY_AMBIENT, INTENSITY_PEAK, INTENSITY_PEAK_P,
    INTENSITY_PULSE_START_P, INTENSITY_RAMP_END, INTENSITY_RAMP_START_P, INTENSITY_SETTLE,
};
use ambient_core::corridor::{intensity, Corridor, CorridorConfig, SegmentInstance};
use ambient_core::error::EngineError;
use ambient_core::state::PointerState;

const DT: f32 = 1.0 / 60.0;

fn corridor() -> Corridor {
    Corridor::new(CorridorConfig::default()).unwrap()
}

fn assert_ring_invariants(c: &Corridor, initial: &[f32]) {
    let cfg = c.config();
    let span = cfg.span();
    let behind = c.camera().z + cfg.recycle_margin;
    assert_eq!(c.segments().len(), cfg.segment_count, "segment count changed");
    for (seg, &z0) in c.segments().iter().zip(initial) {
        assert!(
            seg.z <= behind + 1e-3 && seg.z > behind - span - 1e-3,
            "segment {} at z={} outside active window (cam {})",
            seg.index,
            seg.z,
            c.camera().z
        );
        // Recycling may only ever move a segment by whole spans, which is
        // what keeps rendered depth congruent with the unbounded tunnel.
        let hops = (z0 - seg.z) / span;
        assert!(
            (hops - hops.round()).abs() < 1e-3,
            "segment {} displaced by a non-integral span multiple: {hops}",
            seg.index
        );
    }
}

#[test]
fn recycling_survives_a_long_smooth_scroll() {
    let mut c = corridor();
    let initial: Vec<f32> = c.segments().iter().map(|s| s.z).collect();
    let pointer = PointerState { x: 0.3, y: -0.2 };
    let mut p = 0.0_f32;
    while p < 1.0 {
        p += 0.004;
        c.advance(p.min(1.0), pointer, DT);
        assert_ring_invariants(&c, &initial);
    }
}

#[test]
fn recycling_survives_instant_jumps() {
    // Anchor-link navigation teleports scroll position within one frame.
    let mut c = corridor();
    let initial: Vec<f32> = c.segments().iter().map(|s| s.z).collect();
    let pointer = PointerState::default();
    for &p in &[1.0_f32, 0.0, 0.63, 0.05, 1.0, 0.5] {
        c.advance(p, pointer, DT);
        assert_ring_invariants(&c, &initial);
    }
}

#[test]
fn recycling_survives_scrolling_back_up() {
    let mut c = corridor();
    let initial: Vec<f32> = c.segments().iter().map(|s| s.z).collect();
    let pointer = PointerState::default();
    let mut p = 1.0_f32;
    c.advance(p, pointer, DT);
    while p > 0.0 {
        p -= 0.004;
        c.advance(p.max(0.0), pointer, DT);
        assert_ring_invariants(&c, &initial);
    }
}

#[test]
fn camera_depth_is_monotone_in_progress() {
    let c = corridor();
    let mut prev = c.depth_for_progress(0.0);
    assert_eq!(prev, 0.0);
    for i in 1..=100 {
        let d = c.depth_for_progress(i as f32 / 100.0);
        assert!(d < prev, "depth not strictly decreasing at step {i}");
        prev = d;
    }
    assert_eq!(
        c.depth_for_progress(1.0),
        -c.config().traversal_depth
    );
}

#[test]
fn lateral_rig_tracks_pointer_without_exceeding_limits() {
    let mut c = corridor();
    let pointer = PointerState { x: 1.0, y: 0.0 };
    for _ in 0..600 {
        c.advance(0.5, pointer, DT);
        assert!(c.camera().lateral_x.abs() <= CAMERA_LATERAL_MAX * 1.05);
        assert!(c.camera().roll.abs() <= CAMERA_ROLL_MAX_RAD * 1.05);
    }
    // Critically damped tracking settles on the target.
    assert!(
        (c.camera().lateral_x - CAMERA_LATERAL_MAX).abs() < 0.01,
        "lateral did not settle: {}",
        c.camera().lateral_x
    );
}

#[test]
fn rejects_degenerate_configs() {
    let bad = CorridorConfig {
        segment_count: 1,
        ..CorridorConfig::default()
    };
    assert!(matches!(
        Corridor::new(bad),
        Err(EngineError::InvalidConfig(_))
    ));
    let bad = CorridorConfig {
        packing: 0.0,
        ..CorridorConfig::default()
    };
    assert!(Corridor::new(bad).is_err());
    let bad = CorridorConfig {
        segment_length: -2.0,
        ..CorridorConfig::default()
    };
    assert!(Corridor::new(bad).is_err());
}

#[test]
fn instances_expose_every_slot_once() {
    let mut c = corridor();
    c.advance(0.7, PointerState::default(), DT);
    let mut out = vec![SegmentInstance { z: 0.0, phase: 0.0 }; c.config().segment_count];
    c.instances(&mut out);
    for (i, inst) in out.iter().enumerate() {
        assert!(inst.phase >= 0.0 && inst.phase < 1.0);
        assert_eq!(c.segments()[i].z, inst.z);
    }
}

#[test]
fn uniforms_reflect_progress_and_aspect() {
    let mut c = corridor();
    c.advance(0.92, PointerState::default(), DT);
    let u = c.uniforms(16.0 / 9.0, 0.92, 4.0, ambient_core::color::Rgb::new(1.0, 0.2, 0.4));
    assert!((u.intensity - INTENSITY_PEAK).abs() < 1e-5);
    assert_eq!(u.params[0], c.camera().z);
    assert_eq!(u.params[1], c.config().span());
}

// ---------------- intensity curve ----------------

#[test]
fn intensity_hits_documented_breakpoints() {
    assert!((intensity(0.0) - INTENSITY_AMBIENT).abs() < 1e-6);
    assert!((intensity(INTENSITY_RAMP_START_P) - INTENSITY_AMBIENT).abs() < 1e-6);
    assert!((intensity(INTENSITY_PULSE_START_P) - INTENSITY_RAMP_END).abs() < 1e-5);
    assert!((intensity(INTENSITY_PEAK_P) - INTENSITY_PEAK).abs() < 1e-5);
    assert!((intensity(1.0) - INTENSITY_SETTLE).abs() < 1e-5);
}

#[test]
fn intensity_is_monotone_through_the_ramp() {
    let mut prev = intensity(0.0);
    let mut p = 0.0_f32;
    while p <= INTENSITY_PULSE_START_P {
        let v = intensity(p);
        assert!(
            v + 1e-6 >= prev,
            "intensity decreased at p={p}: {v} < {prev}"
        );
        prev = v;
        p += 0.001;
    }
}

#[test]
fn intensity_pulse_stays_within_bounds() {
    let mut p = INTENSITY_PULSE_START_P;
    while p <= 1.0 {
        let v = intensity(p);
        assert!(
            (INTENSITY_RAMP_END - 1e-6..=INTENSITY_PEAK + 1e-6).contains(&v),
            "pulse out of bounds at p={p}: {v}"
        );
        p += 0.001;
    }
}

#[test]
fn intensity_is_continuous_at_breakpoints() {
    for &b in &[
        INTENSITY_RAMP_START_P,
        INTENSITY_PULSE_START_P,
        INTENSITY_PEAK_P,
    ] {
        let below = intensity(b - 1e-4);
        let above = intensity(b + 1e-4);
        assert!(
            (below - above).abs() < 1e-2,
            "discontinuity at {b}: {below} vs {above}"
        );
    }
}

#[test]
fn intensity_clamps_out_of_range_progress() {
    assert_eq!(intensity(-3.0), intensity(0.0));
    assert_eq!(intensity(7.0), intensity(1.0));
}
