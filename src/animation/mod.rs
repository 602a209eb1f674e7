//! Time-based animations sampled by the host at frame times.
//!
//! Nothing here owns a thread or a timer. The host calls `advance(now)` on
//! whatever owns an [`Animation`], once per frame, with a monotonic timestamp.

use cgmath::Point2;
use std::f32::consts::PI;
use std::time::Duration;

mod settle;

pub use settle::SettleAnimator;

/// Easing curves, mapping linear time progress to animation progress.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Starts slowly and speeds up. The factor is the strength of the effect;
    /// `1.0` is a parabola.
    Accelerate(f32),
    /// Starts quickly and slows down. The factor is the strength of the
    /// effect; `1.0` is an upside-down parabola.
    Decelerate(f32),
    /// Starts and ends slowly, speeding up through the middle.
    AccelerateDecelerate,
}
impl Default for Easing {
    fn default() -> Self {
        Easing::Linear
    }
}
impl Easing {
    /// Applies the easing curve to a linear fraction, clamped to
    /// `0.0..=1.0`.
    pub fn transform(self, fraction: f32) -> f32 {
        // `max()` comes first so that `NaN`s will become `0.0`.
        let t = fraction.max(0.0).min(1.0);
        match self {
            Easing::Linear => t,
            Easing::Accelerate(factor) => {
                if factor == 1.0 {
                    t * t
                } else {
                    t.powf(2.0 * factor)
                }
            }
            Easing::Decelerate(factor) => {
                if factor == 1.0 {
                    1.0 - (1.0 - t) * (1.0 - t)
                } else {
                    1.0 - (1.0 - t).powf(2.0 * factor)
                }
            }
            Easing::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
        }
    }
}

/// One frame sampled from an [`Animation`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    /// Eased progress, from `0.0` at the start to `1.0` at the end.
    pub fraction: f32,
    /// Whether this is the last frame of the animation.
    pub finished: bool,
}

/// Cancellable one-shot animation clock.
///
/// While running, every call to [`Animation::sample()`] yields one frame; the
/// frame with `finished` set stops the animation. A cancelled or finished
/// animation yields nothing until it is started again.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Animation {
    duration: Duration,
    easing: Easing,
    /// Start time of the current run, or `None` if not running.
    started_at: Option<Duration>,
}
impl Animation {
    /// Returns a stopped animation.
    ///
    /// # Panics
    ///
    /// This function panics if `duration` is zero.
    pub fn new(duration: Duration, easing: Easing) -> Self {
        assert!(
            duration > Duration::ZERO,
            "Animation duration must be positive, not {:?}",
            duration,
        );
        Self {
            duration,
            easing,
            started_at: None,
        }
    }

    /// Returns the duration of one run.
    pub fn duration(&self) -> Duration {
        self.duration
    }
    /// Sets the duration of future runs. Zero durations are ignored.
    ///
    /// Returns `true` if the duration was accepted.
    pub fn set_duration(&mut self, duration: Duration) -> bool {
        if duration > Duration::ZERO {
            self.duration = duration;
            true
        } else {
            false
        }
    }
    /// Returns the easing curve.
    pub fn easing(&self) -> Easing {
        self.easing
    }
    /// Sets the easing curve.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Starts (or restarts) the animation at time `now`.
    pub fn start(&mut self, now: Duration) {
        self.started_at = Some(now);
    }
    /// Stops the animation. Returns `true` if it was running.
    pub fn cancel(&mut self) -> bool {
        self.started_at.take().is_some()
    }
    /// Returns `true` if the animation is running.
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Samples the animation at time `now`, stopping it if it has finished.
    pub fn sample(&mut self, now: Duration) -> Option<Frame> {
        let started_at = self.started_at?;
        let elapsed = now.checked_sub(started_at).unwrap_or(Duration::ZERO);
        let linear = (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0) as f32;
        let finished = linear >= 1.0;
        if finished {
            self.started_at = None;
        }
        Some(Frame {
            fraction: self.easing.transform(linear),
            finished,
        })
    }
}

/// Values that can be linearly interpolated.
pub trait Lerp: Copy {
    /// Returns the value `t` of the way from `self` to `target`.
    fn lerp(self, target: Self, t: f32) -> Self;
}
impl Lerp for f32 {
    fn lerp(self, target: Self, t: f32) -> Self {
        self + (target - self) * t
    }
}
impl Lerp for Point2<f32> {
    fn lerp(self, target: Self, t: f32) -> Self {
        self + (target - self) * t
    }
}

/// Value animated towards a target.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tween<T> {
    value: T,
    from: T,
    to: T,
    animation: Animation,
}
impl<T: Lerp> Tween<T> {
    /// Returns a tween resting at `value`.
    pub fn new(value: T, duration: Duration, easing: Easing) -> Self {
        Self {
            value,
            from: value,
            to: value,
            animation: Animation::new(duration, easing),
        }
    }

    /// Returns the current value.
    pub fn value(&self) -> T {
        self.value
    }
    /// Returns the value the tween is heading to.
    pub fn target(&self) -> T {
        self.to
    }
    /// Returns `true` while the tween is moving.
    pub fn is_running(&self) -> bool {
        self.animation.is_running()
    }

    /// Starts moving from the current value towards `target`.
    pub fn animate_to(&mut self, target: T, now: Duration) {
        self.from = self.value;
        self.to = target;
        self.animation.start(now);
    }
    /// Jumps to `value` immediately, stopping any motion.
    pub fn snap_to(&mut self, value: T) {
        self.animation.cancel();
        self.value = value;
        self.from = value;
        self.to = value;
    }

    /// Advances the tween to time `now`.
    ///
    /// Returns `true` if the target has been reached, or `false` otherwise.
    pub fn advance(&mut self, now: Duration) -> bool {
        match self.animation.sample(now) {
            Some(frame) => {
                self.value = if frame.finished {
                    self.to
                } else {
                    self.from.lerp(self.to, frame.fraction)
                };
                frame.finished
            }
            None => true,
        }
    }
}
