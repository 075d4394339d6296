//! Two-state interpolation between CLOSED (0.0) and OPEN (1.0).

use std::time::{Duration, Instant};

use crate::types::VisualState;

/// Easing curve applied to normalized time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Cubic deceleration.
    #[default]
    EaseOut,
    /// Cubic acceleration then deceleration.
    EaseInOut,
}

impl Easing {
    /// Maps normalized time `t` (clamped to `[0, 1]`) to normalized progress.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// A single interpolation from one value to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    /// Start value.
    pub from: f64,
    /// End value.
    pub to: f64,
    /// Total duration.
    pub duration: Duration,
    /// Easing curve.
    pub easing: Easing,
}

impl Tween {
    /// Value after `elapsed` time.
    pub fn sample(&self, elapsed: Duration) -> f64 {
        if self.is_finished(elapsed) {
            return self.to;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// Returns true once `elapsed` covers the whole duration.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

/// Drives the progress value toward the current target state.
#[derive(Debug, Clone)]
pub struct Animator {
    tween: Tween,
    started_at: Instant,
    target: VisualState,
    duration: Duration,
}

impl Animator {
    /// Creates an animator resting at `state`.
    pub fn new(state: VisualState, duration: Duration, easing: Easing, now: Instant) -> Self {
        let value = state.progress();
        Self {
            tween: Tween {
                from: value,
                to: value,
                duration: Duration::ZERO,
                easing,
            },
            started_at: now,
            target: state,
            duration,
        }
    }

    /// State the animator is heading to.
    pub fn target(&self) -> VisualState {
        self.target
    }

    /// Changes the full-travel duration used by later retargets.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Starts animating toward `state` from the current value.
    ///
    /// The tween length is proportional to the remaining distance, so a
    /// reversal halfway through takes half the full duration.
    /// Returns false if `state` already is the target.
    pub fn retarget(&mut self, state: VisualState, now: Instant) -> bool {
        if state == self.target {
            return false;
        }
        let from = self.value_at(now);
        let to = state.progress();
        self.tween = Tween {
            from,
            to,
            duration: self.duration.mul_f64((to - from).abs()),
            easing: self.tween.easing,
        };
        self.started_at = now;
        self.target = state;
        true
    }

    /// Progress value at `now`.
    pub fn value_at(&self, now: Instant) -> f64 {
        self.tween
            .sample(now.saturating_duration_since(self.started_at))
    }

    /// Returns true once the target value has been reached.
    pub fn is_settled(&self, now: Instant) -> bool {
        self.tween
            .is_finished(now.saturating_duration_since(self.started_at))
    }
}
