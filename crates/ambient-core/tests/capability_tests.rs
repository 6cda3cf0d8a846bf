// Host-side tests for the capability classifier.

use ambient_core::capability::{classify, CapabilityTier, DeviceSignals, TierThresholds};

fn signals(cores: Option<u32>, mem: Option<f64>, gpu: bool) -> DeviceSignals {
    DeviceSignals {
        logical_cores: cores,
        device_memory_gb: mem,
        has_gpu_api: gpu,
        coarse_pointer: false,
    }
}

#[test]
fn strong_machine_classifies_high() {
    let t = TierThresholds::default();
    assert_eq!(
        classify(&signals(Some(12), Some(16.0), true), &t),
        CapabilityTier::High
    );
}

#[test]
fn mid_range_machine_classifies_medium() {
    let t = TierThresholds::default();
    assert_eq!(
        classify(&signals(Some(4), Some(4.0), true), &t),
        CapabilityTier::Medium
    );
    // Plenty of memory cannot lift a weak core count.
    assert_eq!(
        classify(&signals(Some(4), Some(32.0), true), &t),
        CapabilityTier::Medium
    );
}

#[test]
fn weak_signals_classify_low() {
    let t = TierThresholds::default();
    assert_eq!(
        classify(&signals(Some(2), Some(2.0), true), &t),
        CapabilityTier::Low
    );
    // Low memory drags an otherwise strong machine down.
    assert_eq!(
        classify(&signals(Some(16), Some(2.0), true), &t),
        CapabilityTier::Low
    );
}

#[test]
fn missing_gpu_api_forces_low() {
    let t = TierThresholds::default();
    assert_eq!(
        classify(&signals(Some(16), Some(32.0), false), &t),
        CapabilityTier::Low
    );
}

#[test]
fn missing_core_count_is_never_promoted() {
    let t = TierThresholds::default();
    assert_eq!(
        classify(&signals(None, Some(32.0), true), &t),
        CapabilityTier::Low
    );
}

#[test]
fn unknown_memory_caps_at_medium() {
    // Several engines never report device memory; that must not read as a
    // strong machine, but should not zero out a good core count either.
    let t = TierThresholds::default();
    assert_eq!(
        classify(&signals(Some(16), None, true), &t),
        CapabilityTier::Medium
    );
    assert_eq!(
        classify(&signals(Some(4), None, true), &t),
        CapabilityTier::Medium
    );
    assert_eq!(
        classify(&signals(Some(2), None, true), &t),
        CapabilityTier::Low
    );
}

#[test]
fn absence_of_every_signal_is_low() {
    let t = TierThresholds::default();
    assert_eq!(
        classify(&DeviceSignals::default(), &t),
        CapabilityTier::Low
    );
}

#[test]
fn tier_ordering_matches_rendering_weight() {
    assert!(CapabilityTier::Low < CapabilityTier::Medium);
    assert!(CapabilityTier::Medium < CapabilityTier::High);
}
