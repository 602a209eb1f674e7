use std::time::Duration;

use super::{PointerEvent, TouchPhase};
use crate::animation::{Easing, Tween};

/// Elevation of a surface at rest.
pub const Z_MIN: f32 = 3.0;
/// Elevation of a surface while touched.
pub const Z_MAX: f32 = 20.0;
/// Duration of a change in elevation.
const ELEVATION_DURATION: Duration = Duration::from_millis(300);

/// Lifts a surface while it is touched and lowers it on release.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Elevator {
    z: Tween<f32>,
}
impl Default for Elevator {
    fn default() -> Self {
        Self {
            z: Tween::new(Z_MIN, ELEVATION_DURATION, Easing::Linear),
        }
    }
}
impl Elevator {
    /// Returns an elevator resting at the minimum elevation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts raising or lowering the surface in response to an event.
    pub fn observe(&mut self, event: &PointerEvent) {
        match event.phase {
            TouchPhase::Down => self.z.animate_to(Z_MAX, event.time),
            TouchPhase::Up | TouchPhase::Cancel => self.z.animate_to(Z_MIN, event.time),
            TouchPhase::Move => (),
        }
    }

    /// Advances the elevation to time `now`.
    ///
    /// Returns `true` if the elevation is at rest.
    pub fn advance(&mut self, now: Duration) -> bool {
        self.z.advance(now)
    }

    /// Returns the current elevation.
    pub fn z(&self) -> f32 {
        self.z.value()
    }
}
