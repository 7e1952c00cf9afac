use std::time::Duration;
use vibe_core::{ease_out_cubic, Color, ColorTransition, Transition};

const EPS: f32 = 1e-5;

#[test]
fn ease_out_cubic_endpoints_and_midpoint() {
    assert!((ease_out_cubic(0.0) - 0.0).abs() < EPS);
    assert!((ease_out_cubic(1.0) - 1.0).abs() < EPS);
    // 1 - (1 - 0.5)^3 = 0.875
    assert!((ease_out_cubic(0.5) - 0.875).abs() < EPS);
}

#[test]
fn scalar_transition_lands_exactly_on_target() {
    let t = Transition::new(0.2, 0.8, Duration::ZERO, Duration::from_millis(800));

    let (v, done) = t.sample(Duration::from_millis(800));
    assert_eq!(v, 0.8);
    assert!(done);

    // Clamped past the end as well
    let (v, done) = t.sample(Duration::from_millis(5000));
    assert_eq!(v, 0.8);
    assert!(done);
}

#[test]
fn scalar_transition_midpoint_is_eased_not_linear() {
    let t = Transition::new(0.0, 1.0, Duration::ZERO, Duration::from_millis(800));
    let (v, done) = t.sample(Duration::from_millis(400));
    assert!(!done);
    assert!((v - 0.875).abs() < EPS);
}

#[test]
fn sampling_before_start_returns_start_value() {
    let t = Transition::new(
        0.3,
        0.9,
        Duration::from_millis(1000),
        Duration::from_millis(800),
    );
    let (v, done) = t.sample(Duration::from_millis(200));
    assert_eq!(v, 0.3);
    assert!(!done);
}

#[test]
fn zero_duration_completes_immediately() {
    let t = Transition::new(0.1, 0.6, Duration::ZERO, Duration::ZERO);
    let (v, done) = t.sample(Duration::ZERO);
    assert_eq!(v, 0.6);
    assert!(done);
}

#[test]
fn replacement_restarts_from_current_value() {
    // First transition toward 1.0, superseded halfway by one toward 0.8
    let first = Transition::new(0.0, 1.0, Duration::ZERO, Duration::from_millis(800));
    let now = Duration::from_millis(400);
    let (mid, _) = first.sample(now);

    let second = Transition::new(mid, 0.8, now, Duration::from_millis(800));
    let (v, done) = second.sample(now + Duration::from_millis(800));
    assert_eq!(v, 0.8);
    assert!(done);

    // No jump at the handover point
    let (v0, _) = second.sample(now);
    assert!((v0 - mid).abs() < EPS);
}

#[test]
fn color_transition_interpolates_componentwise() {
    let black = Color::new(0.0, 0.0, 0.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let t = ColorTransition::new(black, white, Duration::ZERO, Duration::from_millis(600));

    let (c, done) = t.sample(Duration::from_millis(300));
    assert!(!done);
    assert!((c.r - 0.875).abs() < EPS);
    assert_eq!(c.r, c.g);
    assert_eq!(c.g, c.b);

    let (c, done) = t.sample(Duration::from_millis(600));
    assert!(done);
    assert_eq!(c, white);
}

#[test]
fn color_lerp_is_pure_and_clamped() {
    let a = Color::new(0.2, 0.4, 0.6);
    let b = Color::new(1.0, 0.0, 0.0);
    let mid = Color::lerp(a, b, 0.5);
    // Inputs untouched
    assert_eq!(a, Color::new(0.2, 0.4, 0.6));
    assert!((mid.r - 0.6).abs() < EPS);
    // t clamped
    assert_eq!(Color::lerp(a, b, -1.0), a);
    assert_eq!(Color::lerp(a, b, 2.0), b);
}
