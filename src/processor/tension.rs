use super::PlainTracker;
use crate::geometry::point_distance;
use crate::input::{PointerEvent, TouchPhase};
use crate::TouchState;

/// Tension used when none (or an invalid one) is given.
pub const DEFAULT_TENSION: f32 = 0.1;

/// Scales the drag displacement down by a constant tension factor, so the
/// tracked point lags behind the pointer like a rubber band.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TensionTracker {
    /// Fraction of the displacement withheld, from `0.0` (none) to `1.0`
    /// (all).
    tension: f32,
}
impl Default for TensionTracker {
    fn default() -> Self {
        Self {
            tension: DEFAULT_TENSION,
        }
    }
}
impl TensionTracker {
    /// Returns a tracker with the given tension.
    pub fn new(tension: f32) -> Self {
        let mut ret = Self::default();
        ret.set_tension(tension);
        ret
    }

    /// Returns the tension factor.
    pub fn tension(&self) -> f32 {
        self.tension
    }
    /// Sets the tension factor. Values outside `0.0..=1.0` restore the
    /// default.
    pub fn set_tension(&mut self, tension: f32) {
        self.tension = if (0.0..=1.0).contains(&tension) {
            tension
        } else {
            log::debug!("tension {} out of range; using {}", tension, DEFAULT_TENSION);
            DEFAULT_TENSION
        };
    }

    /// Updates `state` from an event, damping moves.
    pub fn process(&self, event: &PointerEvent, state: &mut TouchState) {
        PlainTracker.process(event, state);

        if event.phase == TouchPhase::Move {
            if let (Some(down), Some(current)) = (state.down(), state.current()) {
                let damped = down + (current - down) * (1.0 - self.tension);
                state.set_current(damped);
                state.distance = point_distance(down, damped);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Point2;
    use std::time::Duration;

    fn drag(tracker: &TensionTracker, to: (f32, f32)) -> TouchState {
        let t = Duration::ZERO;
        let mut state = TouchState::new();
        tracker.process(&PointerEvent::down(20.0, 20.0, t), &mut state);
        tracker.process(&PointerEvent::moved(to.0, to.1, t), &mut state);
        state
    }

    #[test]
    fn zero_tension_passes_through() {
        let state = drag(&TensionTracker::new(0.0), (80.0, 100.0));
        assert_eq!(state.current(), Some(Point2::new(80.0, 100.0)));
        assert_eq!(state.distance, 100.0);
    }

    #[test]
    fn full_tension_pins_to_down() {
        let state = drag(&TensionTracker::new(1.0), (80.0, 100.0));
        assert_eq!(state.current(), Some(Point2::new(20.0, 20.0)));
        assert_eq!(state.distance, 0.0);
    }

    #[test]
    fn partial_tension_scales_displacement() {
        let state = drag(&TensionTracker::new(0.25), (80.0, 100.0));
        assert_eq!(state.current(), Some(Point2::new(65.0, 80.0)));
        assert_eq!(state.distance, 75.0);
        // Raw coordinates are left alone.
        assert_eq!((state.x_current_raw, state.y_current_raw), (80.0, 100.0));
    }

    #[test]
    fn out_of_range_tension_falls_back_to_default() {
        let mut tracker = TensionTracker::new(0.6);
        assert_eq!(tracker.tension(), 0.6);
        tracker.set_tension(1.5);
        assert_eq!(tracker.tension(), DEFAULT_TENSION);
        tracker.set_tension(0.6);
        tracker.set_tension(-0.1);
        assert_eq!(tracker.tension(), DEFAULT_TENSION);
        tracker.set_tension(f32::NAN);
        assert_eq!(tracker.tension(), DEFAULT_TENSION);
    }
}
