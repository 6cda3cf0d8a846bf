// Host-side tests for the reveal lifecycle: pending -> armed -> done,
// arm-at-most-once, stagger timing, and the reduced-motion contract.

use ambient_core::reveal::{
    ease_out_cubic, ItemStyle, RevealConfig, RevealGroup, RevealPhase, RevealRegistry,
};

fn group(items: usize) -> RevealGroup {
    RevealGroup::new(items, RevealConfig::default(), false)
}

fn phase_rank(p: RevealPhase) -> u8 {
    match p {
        RevealPhase::Pending => 0,
        RevealPhase::Armed { .. } => 1,
        RevealPhase::Done => 2,
    }
}

#[test]
fn lifecycle_is_monotonic_under_arbitrary_events() {
    let mut g = group(4);
    let mut rank = phase_rank(g.phase());
    // Interleave intersections and ticks in awkward orders; the phase may
    // only ever move forward.
    let script: &[(bool, f64)] = &[
        (false, 0.0),
        (true, 100.0),
        (true, 150.0),
        (false, 200.0),
        (true, 5_000.0),
        (false, 5_100.0),
        (true, 9_000.0),
        (false, 9_001.0),
    ];
    for &(intersect, now) in script {
        if intersect {
            g.on_intersect(now);
        } else {
            g.tick(now);
        }
        let r = phase_rank(g.phase());
        assert!(r >= rank, "phase went backwards: {:?}", g.phase());
        rank = r;
    }
    assert!(g.is_done());
}

#[test]
fn arms_exactly_once() {
    let mut g = group(3);
    assert!(g.on_intersect(1_000.0));
    assert!(!g.on_intersect(2_000.0), "second intersection re-armed");
    // Original start time is preserved.
    match g.phase() {
        RevealPhase::Armed { started_ms } => assert_eq!(started_ms, 1_000.0),
        other => panic!("unexpected phase {other:?}"),
    }
}

#[test]
fn done_never_replays() {
    let mut g = group(2);
    g.on_intersect(0.0);
    g.tick(1_000_000.0);
    assert!(g.is_done());
    for now in [0.0, 50.0, 1e9] {
        assert!(!g.on_intersect(now));
        assert_eq!(g.tick(now), RevealPhase::Done);
    }
}

#[test]
fn reduced_motion_starts_done_and_visible() {
    let g = RevealGroup::new(5, RevealConfig::default(), true);
    assert!(g.is_done());
    for i in 0..5 {
        assert_eq!(g.item_style(i, 0.0), ItemStyle::VISIBLE);
    }
}

#[test]
fn total_duration_is_deterministic_in_item_count() {
    let cfg = RevealConfig::default();
    let g = RevealGroup::new(5, cfg, false);
    let expected = cfg.duration_ms + cfg.stagger_ms * 4.0;
    assert_eq!(g.total_duration_ms(), expected);
    // Degenerate group still has a bounded entrance.
    let empty = RevealGroup::new(0, cfg, false);
    assert_eq!(empty.total_duration_ms(), cfg.duration_ms);
}

#[test]
fn pending_items_are_hidden_at_the_configured_offset() {
    let cfg = RevealConfig::default();
    let g = RevealGroup::new(3, cfg, false);
    let s = g.item_style(1, 12_345.0);
    assert_eq!(s.opacity, 0.0);
    assert_eq!(s.translate_y, cfg.offset_px);
}

#[test]
fn stagger_orders_items_front_to_back() {
    let cfg = RevealConfig::default();
    let mut g = RevealGroup::new(4, cfg, false);
    g.on_intersect(0.0);
    // Mid-entrance: each later item must trail the one before it.
    let now = cfg.duration_ms * 0.5;
    let styles: Vec<ItemStyle> = (0..4).map(|i| g.item_style(i, now)).collect();
    for w in styles.windows(2) {
        assert!(
            w[0].opacity >= w[1].opacity,
            "stagger order violated: {styles:?}"
        );
        assert!(w[0].translate_y <= w[1].translate_y);
    }
    // An item whose slot has not started yet is still fully hidden.
    let late = g.item_style(3, cfg.stagger_ms * 3.0 - 1.0);
    assert_eq!(late.opacity, 0.0);
}

#[test]
fn group_completes_exactly_after_the_last_item() {
    let cfg = RevealConfig::default();
    let mut g = RevealGroup::new(3, cfg, false);
    g.on_intersect(500.0);
    let end = 500.0 + g.total_duration_ms();
    assert!(matches!(g.tick(end - 1.0), RevealPhase::Armed { .. }));
    assert_eq!(g.tick(end), RevealPhase::Done);
    // After completion every item reads fully visible.
    for i in 0..3 {
        assert_eq!(g.item_style(i, end), ItemStyle::VISIBLE);
    }
}

#[test]
fn ease_out_cubic_is_normalized_and_monotone() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    let mut prev = 0.0;
    for i in 0..=100 {
        let v = ease_out_cubic(i as f32 / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn registry_tracks_groups_independently() {
    let mut reg = RevealRegistry::default();
    let a = reg.insert(group(2));
    let b = reg.insert(RevealGroup::new(2, RevealConfig::text(), false));
    assert_ne!(a, b);
    assert_eq!(reg.len(), 2);
    assert!(!reg.all_done());

    reg.get_mut(a).unwrap().on_intersect(0.0);
    reg.get_mut(a).unwrap().tick(1e9);
    assert!(reg.get(a).unwrap().is_done());
    assert!(!reg.get(b).unwrap().is_done());

    reg.get_mut(b).unwrap().on_intersect(0.0);
    reg.get_mut(b).unwrap().tick(1e9);
    assert!(reg.all_done());
}
