// Host-side tests for the cursor trail chain and scroll parallax mapping.

use ambient_core::constants::TRAIL_FOLLOWER_DELAYS;
use ambient_core::parallax::{layer_offset, ParallaxLayer, ParallaxRig};
use ambient_core::trail::CursorTrail;

const DT: f32 = 1.0 / 60.0;

#[test]
fn first_pointer_sample_primes_the_whole_tail() {
    let mut t = CursorTrail::new(&TRAIL_FOLLOWER_DELAYS);
    t.set_leader(320.0, 240.0);
    for p in t.points() {
        assert_eq!((p.x, p.y), (320.0, 240.0));
    }
}

#[test]
fn followers_stagger_back_to_front() {
    let mut t = CursorTrail::new(&TRAIL_FOLLOWER_DELAYS);
    t.set_leader(0.0, 0.0);
    t.set_leader(100.0, 0.0);
    t.step(DT);
    // After one frame each deeper follower must lag further behind the
    // leader than the one ahead of it.
    let mut prev_gap = -1.0_f32;
    for p in t.points() {
        let gap = 100.0 - p.x;
        assert!(
            gap > prev_gap,
            "follower did not lag behind its predecessor: gap {gap} vs {prev_gap}"
        );
        prev_gap = gap;
    }
}

#[test]
fn tail_converges_onto_a_resting_leader() {
    let mut t = CursorTrail::new(&TRAIL_FOLLOWER_DELAYS);
    t.set_leader(0.0, 0.0);
    t.set_leader(500.0, -300.0);
    for _ in 0..1_000 {
        t.step(DT);
    }
    for p in t.points() {
        assert!((p.x - 500.0).abs() < 0.5, "x did not converge: {}", p.x);
        assert!((p.y + 300.0).abs() < 0.5, "y did not converge: {}", p.y);
    }
}

#[test]
fn first_follower_is_frame_rate_independent() {
    let mut fast = CursorTrail::new(&TRAIL_FOLLOWER_DELAYS);
    let mut slow = CursorTrail::new(&TRAIL_FOLLOWER_DELAYS);
    for t in [&mut fast, &mut slow] {
        t.set_leader(0.0, 0.0);
        t.set_leader(200.0, 80.0);
    }
    for _ in 0..60 {
        fast.step(1.0 / 60.0);
    }
    for _ in 0..30 {
        slow.step(1.0 / 30.0);
    }
    // The head of the chain tracks the leader directly, so one second of
    // simulation must land it in the same place at either frame rate.
    let a = fast.points()[0];
    let b = slow.points()[0];
    assert!((a.x - b.x).abs() < 1e-2, "{} vs {}", a.x, b.x);
    assert!((a.y - b.y).abs() < 1e-2, "{} vs {}", a.y, b.y);
}

#[test]
fn unprimed_trail_does_not_move() {
    let mut t = CursorTrail::new(&TRAIL_FOLLOWER_DELAYS);
    t.step(DT);
    for p in t.points() {
        assert_eq!((p.x, p.y), (0.0, 0.0));
    }
}

// ---------------- parallax ----------------

#[test]
fn layer_offset_is_a_pure_mapping() {
    // Same inputs, same output — offsets are never integrated, so there is
    // nothing to drift.
    let a = layer_offset(340.0, 0.4, 1.0);
    for _ in 0..1_000 {
        assert_eq!(layer_offset(340.0, 0.4, 1.0), a);
    }
    assert_eq!(layer_offset(0.0, 0.4, 1.0), 0.0);
}

#[test]
fn faster_layers_move_further() {
    let rig = ParallaxRig::new(vec![
        ParallaxLayer { speed: 0.1 },
        ParallaxLayer { speed: 0.4 },
        ParallaxLayer { speed: 0.9 },
    ]);
    let mut out = [0.0_f32; 3];
    rig.offsets(250.0, &mut out);
    assert!(out[0] < out[1] && out[1] < out[2]);
    assert!((out[2] - 225.0).abs() < 1e-4);
}

#[test]
fn rig_scales_with_the_global_multiplier() {
    let rig = ParallaxRig::new(vec![ParallaxLayer { speed: 0.5 }]);
    let mut out = [0.0_f32; 1];
    rig.offsets(-120.0, &mut out);
    // Scrolling up mirrors exactly; no hysteresis.
    assert_eq!(out[0], layer_offset(-120.0, 0.5, 1.0));
}
