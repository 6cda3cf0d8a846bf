//! Device capability classification.
//!
//! The front end gathers whatever coarse signals the platform exposes and
//! hands them to [`classify`]; the resulting tier is derived once at mount
//! and cached for the session. Absence of a signal always classifies
//! downward — lighter rendering on capable hardware is invisible, heavier
//! rendering on constrained hardware is not.

use crate::constants::{
    TIER_HIGH_MIN_CORES, TIER_HIGH_MIN_MEMORY_GB, TIER_MEDIUM_MIN_CORES, TIER_MEDIUM_MIN_MEMORY_GB,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum CapabilityTier {
    Low,
    Medium,
    High,
}

/// Raw signals as reported by the environment. `None` means the platform
/// does not expose the value at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeviceSignals {
    pub logical_cores: Option<u32>,
    pub device_memory_gb: Option<f64>,
    pub has_gpu_api: bool,
    pub coarse_pointer: bool,
}

/// Tier cut-offs, kept separate from the classifier so they can be tuned
/// without touching the decision logic.
#[derive(Clone, Copy, Debug)]
pub struct TierThresholds {
    pub high_min_cores: u32,
    pub high_min_memory_gb: f64,
    pub medium_min_cores: u32,
    pub medium_min_memory_gb: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            high_min_cores: TIER_HIGH_MIN_CORES,
            high_min_memory_gb: TIER_HIGH_MIN_MEMORY_GB,
            medium_min_cores: TIER_MEDIUM_MIN_CORES,
            medium_min_memory_gb: TIER_MEDIUM_MIN_MEMORY_GB,
        }
    }
}

/// Classify the environment. Pure; callers memoize the result per session.
pub fn classify(signals: &DeviceSignals, thresholds: &TierThresholds) -> CapabilityTier {
    if !signals.has_gpu_api {
        return CapabilityTier::Low;
    }

    // Core count is reported everywhere that matters; a missing value is a
    // strong constrained-environment signal.
    let core_tier = match signals.logical_cores {
        Some(c) if c >= thresholds.high_min_cores => CapabilityTier::High,
        Some(c) if c >= thresholds.medium_min_cores => CapabilityTier::Medium,
        _ => CapabilityTier::Low,
    };

    // Device memory is absent on several engines; unknown caps at Medium
    // rather than dropping to Low, but never promotes to High.
    let memory_tier = match signals.device_memory_gb {
        Some(m) if m >= thresholds.high_min_memory_gb => CapabilityTier::High,
        Some(m) if m >= thresholds.medium_min_memory_gb => CapabilityTier::Medium,
        Some(_) => CapabilityTier::Low,
        None => CapabilityTier::Medium,
    };

    core_tier.min(memory_tier)
}
