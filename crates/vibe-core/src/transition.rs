use crate::color::Color;
use std::time::Duration;

/// Cubic ease-out: fast start, slow finish.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Time-bounded eased interpolation of one scalar.
///
/// A transition is a value, not a task: it captures its start value
/// and start time once, and `sample` evaluates it against whatever
/// clock the caller passes in. The engine owns at most one transition
/// per property; starting a new one replaces (and thereby cancels)
/// the previous one, instead of letting two self-rescheduling chains
/// race on the same field.
#[derive(Clone, Copy, Debug)]
pub struct Transition {
    pub start: f32,
    pub target: f32,
    pub started_at: Duration,
    pub duration: Duration,
}

impl Transition {
    pub fn new(start: f32, target: f32, now: Duration, duration: Duration) -> Self {
        Self {
            start,
            target,
            started_at: now,
            duration,
        }
    }

    /// Current value and whether the transition has finished.
    /// Progress clamps to 1, so the final sample lands exactly on the
    /// target.
    pub fn sample(&self, now: Duration) -> (f32, bool) {
        let t = progress(self.started_at, self.duration, now);
        let eased = ease_out_cubic(t);
        (self.start + (self.target - self.start) * eased, t >= 1.0)
    }
}

/// Same progress/easing math as [`Transition`], applied component-wise
/// to a color triple.
#[derive(Clone, Copy, Debug)]
pub struct ColorTransition {
    pub start: Color,
    pub target: Color,
    pub started_at: Duration,
    pub duration: Duration,
}

impl ColorTransition {
    pub fn new(start: Color, target: Color, now: Duration, duration: Duration) -> Self {
        Self {
            start,
            target,
            started_at: now,
            duration,
        }
    }

    pub fn sample(&self, now: Duration) -> (Color, bool) {
        let t = progress(self.started_at, self.duration, now);
        let eased = ease_out_cubic(t);
        (Color::lerp(self.start, self.target, eased), t >= 1.0)
    }
}

#[inline]
fn progress(started_at: Duration, duration: Duration, now: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.checked_sub(started_at).unwrap_or_default();
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}
