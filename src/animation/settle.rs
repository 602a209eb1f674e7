use cgmath::Point2;
use std::time::Duration;

use super::{Animation, Easing};
use crate::geometry::{point_at_percent, Path};
use crate::{TouchState, TouchStateConsumer};

/// Default duration of a settle animation.
pub const DEFAULT_SETTLE_DURATION: Duration = Duration::from_millis(300);
/// Default easing of a settle animation.
pub const DEFAULT_SETTLE_EASING: Easing = Easing::Accelerate(1.0);

/// Everything a settle needs from the touch state, captured when it starts.
#[derive(Debug, Clone, PartialEq)]
struct SettleRun {
    /// Down point to settle back to.
    down: Point2<f32>,
    /// Straight line from the released current point to the down point.
    line: Path,
    /// Distance at the moment of release.
    start_distance: f32,
}

/// Animates a released touch point back to where the gesture started.
///
/// [`SettleAnimator::start()`] takes its own copy of everything it needs, so
/// the caller is free to reset the touch state as soon as it returns.
#[derive(Debug, Clone, PartialEq)]
pub struct SettleAnimator {
    animation: Animation,
    run: Option<SettleRun>,
}
impl Default for SettleAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE_DURATION, DEFAULT_SETTLE_EASING)
    }
}
impl SettleAnimator {
    /// Returns an idle settle animator.
    ///
    /// # Panics
    ///
    /// This function panics if `duration` is zero.
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            animation: Animation::new(duration, easing),
            run: None,
        }
    }

    /// Sets the duration of future settles. Zero durations are rejected and
    /// the previous duration is kept.
    pub fn set_duration(&mut self, duration: Duration) {
        if !self.animation.set_duration(duration) {
            log::debug!(
                "rejected settle duration {:?}; keeping {:?}",
                duration,
                self.animation.duration(),
            );
        }
    }
    /// Returns the duration of one settle.
    pub fn duration(&self) -> Duration {
        self.animation.duration()
    }
    /// Sets the easing of future settles.
    pub fn set_easing(&mut self, easing: Easing) {
        self.animation.set_easing(easing);
    }

    /// Returns `true` while a settle is in flight.
    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Starts settling from the state's current point back to its down point,
    /// replacing any settle already in flight.
    ///
    /// Returns `false` (and starts nothing) if the state has no down point,
    /// current point, or distance.
    pub fn start(&mut self, state: &TouchState, now: Duration) -> bool {
        if self.animation.cancel() {
            log::debug!("settle restarted before finishing");
        }
        self.run = None;

        let (down, current, start_distance) =
            match (state.down(), state.current(), state.distance()) {
                (Some(down), Some(current), Some(distance)) => (down, current, distance),
                _ => return false,
            };
        log::debug!(
            "settle start: distance = {}, duration = {:?}",
            start_distance,
            self.animation.duration(),
        );
        self.run = Some(SettleRun {
            down,
            line: Path::line(current, down),
            start_distance,
        });
        self.animation.start(now);
        true
    }

    /// Advances the settle to time `now`, writing the interpolated state and
    /// handing it to `consumer`.
    ///
    /// When the settle finishes, the state is reset and handed over one last
    /// time. Returns `true` if no settle is in flight anymore.
    pub fn advance<C>(&mut self, now: Duration, state: &mut TouchState, consumer: &mut C) -> bool
    where
        C: TouchStateConsumer + ?Sized,
    {
        if self.run.is_none() {
            return true;
        }
        let frame = match self.animation.sample(now) {
            Some(frame) => frame,
            None => {
                self.run = None;
                return true;
            }
        };
        if frame.finished {
            log::debug!("settle finished");
            self.run = None;
            state.reset();
            consumer.draw_touch_state(state);
            return true;
        }

        if let Some(run) = &self.run {
            let f = frame.fraction;
            state.set_down(run.down);
            state.distance = (1.0 - f) * run.start_distance;
            if let Some(p) = point_at_percent(&run.line, run.start_distance, f) {
                state.set_current(p);
            }
            consumer.draw_touch_state(state);
        }
        false
    }

    /// Stops an in-flight settle, resets the state, and hands the reset state
    /// to `consumer` once.
    ///
    /// Does nothing and returns `false` if no settle is in flight.
    pub fn cancel<C>(&mut self, state: &mut TouchState, consumer: &mut C) -> bool
    where
        C: TouchStateConsumer + ?Sized,
    {
        self.animation.cancel();
        if self.run.take().is_none() {
            return false;
        }
        log::debug!("settle cancelled");
        state.reset();
        consumer.draw_touch_state(state);
        true
    }
}
