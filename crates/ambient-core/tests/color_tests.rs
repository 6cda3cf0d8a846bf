// Host-side tests for accent parsing and the smoothed cross-fade.

use ambient_core::color::{Rgb, SmoothedRgb};

const DT: f32 = 1.0 / 60.0;

#[test]
fn parses_six_digit_hex() {
    let c = Rgb::from_hex("#00f0ff").unwrap();
    assert!(c.r.abs() < 1e-6);
    assert!((c.g - 240.0 / 255.0).abs() < 1e-6);
    assert!((c.b - 1.0).abs() < 1e-6);
}

#[test]
fn parses_shorthand_hex() {
    let c = Rgb::from_hex("#f63").unwrap();
    let full = Rgb::from_hex("#ff6633").unwrap();
    assert_eq!(c, full);
}

#[test]
fn rejects_malformed_hex() {
    assert!(Rgb::from_hex("").is_err());
    assert!(Rgb::from_hex("#12345").is_err());
    assert!(Rgb::from_hex("#zzzzzz").is_err());
    assert!(Rgb::from_hex("not-a-color").is_err());
}

#[test]
fn css_output_is_byte_channels() {
    let c = Rgb::from_hex("#ff3366").unwrap();
    assert_eq!(c.to_css(), "rgb(255, 51, 102)");
}

#[test]
fn fixed_point_is_exact() {
    let c = Rgb::from_hex("#ff3366").unwrap();
    let mut s = SmoothedRgb::new(c);
    s.step(DT);
    assert_eq!(s.value(), c);
    assert!(s.at_rest());
}

#[test]
fn approach_is_monotone_without_overshoot_per_channel() {
    let from = Rgb::from_hex("#00f0ff").unwrap();
    let to = Rgb::from_hex("#ff3366").unwrap();
    let mut s = SmoothedRgb::new(from);
    s.set_target(to);

    let mut prev = s.value();
    for _ in 0..2000 {
        s.step(DT);
        let cur = s.value();
        // r rises, g falls, b falls for this pair; each channel must move
        // toward its target and never past it.
        assert!(cur.r >= prev.r && cur.r <= to.r, "r overshoot: {cur:?}");
        assert!(cur.g <= prev.g && cur.g >= to.g, "g overshoot: {cur:?}");
        assert!(cur.b <= prev.b && cur.b >= to.b, "b overshoot: {cur:?}");
        prev = cur;
    }
    assert_eq!(s.value(), to, "did not settle exactly on target");
}

#[test]
fn crossfade_makes_visible_progress_within_two_seconds() {
    let from = Rgb::new(0.0, 0.0, 0.0);
    let to = Rgb::new(1.0, 1.0, 1.0);
    let mut s = SmoothedRgb::new(from);
    s.set_target(to);
    for _ in 0..120 {
        s.step(DT);
    }
    // 1% of remaining distance per reference frame: ~70% of the distance
    // covered after 120 frames.
    assert!(s.value().r > 0.5, "too slow: {:?}", s.value());
    assert!(s.value().r < 1.0, "settled implausibly fast");
}

#[test]
fn crossfade_speed_is_frame_rate_independent() {
    let from = Rgb::new(0.0, 0.0, 0.0);
    let to = Rgb::new(1.0, 0.5, 0.25);
    let mut at60 = SmoothedRgb::new(from);
    let mut at30 = SmoothedRgb::new(from);
    at60.set_target(to);
    at30.set_target(to);
    for _ in 0..120 {
        at60.step(1.0 / 60.0);
    }
    for _ in 0..60 {
        at30.step(1.0 / 30.0);
    }
    assert!((at60.value().r - at30.value().r).abs() < 1e-3);
    assert!((at60.value().g - at30.value().g).abs() < 1e-3);
}
