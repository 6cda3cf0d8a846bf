// Shared tuning constants for the ambient visual systems.
// Tier thresholds and curve shapes are empirical starting points, validated
// by eye on real hardware rather than fixed contracts.

// Capability tiers
pub const TIER_HIGH_MIN_CORES: u32 = 8;
pub const TIER_HIGH_MIN_MEMORY_GB: f64 = 8.0;
pub const TIER_MEDIUM_MIN_CORES: u32 = 4;
pub const TIER_MEDIUM_MIN_MEMORY_GB: f64 = 4.0;

// Per-frame smoothing factors are expressed against this frame rate and
// rescaled by actual elapsed time, so slower clients converge identically.
pub const REFERENCE_FPS: f32 = 60.0;

// Accent color cross-fade
pub const DEFAULT_ACCENT: [f32; 3] = [0.0, 240.0 / 255.0, 1.0]; // #00f0ff until navigation supplies one
pub const ACCENT_APPROACH_PER_FRAME: f32 = 0.01; // fraction of remaining distance per reference frame
pub const ACCENT_SNAP_EPSILON: f32 = 1.0 / 1024.0; // below this distance the value lands exactly on target

// Gradient blob field (centers/radii in normalized surface coordinates)
pub const BLOB_COUNT: usize = 3;
pub const BLOB_ORBIT_FREQ_HZ: [[f32; 2]; BLOB_COUNT] = [
    [0.011, 0.017], // distinct x/y frequencies per blob so orbits never phase-lock
    [0.023, 0.007],
    [0.013, 0.029],
];
pub const BLOB_ORBIT_RADIUS: [f32; BLOB_COUNT] = [0.24, 0.31, 0.19];
pub const BLOB_HOME: [[f32; 2]; BLOB_COUNT] = [[0.25, 0.30], [0.75, 0.40], [0.50, 0.80]];
pub const BLOB_RADIUS: [f32; BLOB_COUNT] = [0.55, 0.70, 0.45];
pub const BLOB_WEIGHT: [f32; BLOB_COUNT] = [0.9, 0.7, 0.8];
pub const GRADIENT_SCROLL_BOOST_MAX: f32 = 0.15; // full-depth scroll brightens the field by at most 15%

// Corridor scene
pub const CORRIDOR_SEGMENTS: usize = 16;
pub const SEGMENT_LENGTH: f32 = 6.0;
pub const SEGMENT_PACKING: f32 = 0.95; // <1 so recycled segments land slightly early and seams stay hidden
pub const RECYCLE_MARGIN: f32 = 1.5; // how far past the camera a segment may drift before recycling
pub const TRAVERSAL_DEPTH: f32 = 180.0; // camera depth covered by a full scroll
pub const CAMERA_LATERAL_MAX: f32 = 1.2; // pointer at screen edge shifts the camera this far
pub const CAMERA_ROLL_MAX_RAD: f32 = 0.06;
pub const CAMERA_SPRING_OMEGA: f32 = 3.0; // critically damped tracking stiffness

// Corridor intensity curve (pure function of scroll progress)
pub const INTENSITY_AMBIENT: f32 = 0.25;
pub const INTENSITY_RAMP_END: f32 = 0.65;
pub const INTENSITY_PEAK: f32 = 1.0;
pub const INTENSITY_SETTLE: f32 = 0.75;
pub const INTENSITY_RAMP_START_P: f32 = 0.35;
pub const INTENSITY_PULSE_START_P: f32 = 0.80;
pub const INTENSITY_PEAK_P: f32 = 0.92;

// Cursor trail: per-follower lag factors, front to back. Larger = lags further.
pub const TRAIL_FOLLOWER_DELAYS: [f32; 6] = [0.30, 0.45, 0.58, 0.70, 0.80, 0.88];
pub const TRAIL_RING_RADIUS_PX: [f32; 6] = [10.0, 8.5, 7.0, 5.5, 4.0, 3.0];

// Particle field
pub const PARTICLE_POOL_HIGH: usize = 70;
pub const PARTICLE_POOL_MEDIUM: usize = 36;
pub const PARTICLE_SPEED_MIN: f32 = 6.0; // px/sec
pub const PARTICLE_SPEED_MAX: f32 = 22.0;
pub const PARTICLE_LIFETIME_MIN: f32 = 6.0; // sec
pub const PARTICLE_LIFETIME_MAX: f32 = 16.0;
pub const PARTICLE_RADIUS_PX: f32 = 1.6;
pub const REPULSION_RADIUS_PX: f32 = 120.0;
pub const REPULSION_STRENGTH: f32 = 60.0; // px/sec of push at zero distance
pub const CONNECT_RADIUS_PX: f32 = 110.0;
pub const PARTICLE_SEED: u64 = 0x5EED_CAFE;

// Parallax
pub const PARALLAX_GLOBAL_MULTIPLIER: f32 = 1.0;

// Reveal orchestration
pub const REVEAL_STAGGER_MS: f64 = 80.0;
pub const REVEAL_DURATION_MS: f64 = 600.0;
pub const REVEAL_OFFSET_PX: f32 = 24.0;
pub const REVEAL_VIEWPORT_TRIGGER: f32 = 0.85; // trigger when the container top crosses 85% of viewport height
pub const TEXT_REVEAL_STAGGER_MS: f64 = 28.0;
pub const TEXT_REVEAL_DURATION_MS: f64 = 420.0;
