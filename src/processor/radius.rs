use super::PlainTracker;
use crate::animation::Easing;
use crate::geometry::{point_at_percent, point_distance, Path};
use crate::input::{PointerEvent, TouchPhase};
use crate::TouchState;

/// Tension used by a new [`RadiusTensionTracker`].
pub const DEFAULT_RADIUS_TENSION: f32 = 0.5;
/// Easing used by a new [`RadiusTensionTracker`].
///
/// A decelerate factor of `0.5` is a straight line; this matches how the
/// effect has always felt.
pub const DEFAULT_RADIUS_EASING: Easing = Easing::Decelerate(0.5);

/// Limits for the inner and outer radii of a [`RadiusTensionTracker`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RadiusBounds {
    /// Smallest allowed inner radius.
    pub radius_min: f32,
    /// Largest allowed outer radius.
    pub radius_max: f32,
    /// Smallest allowed gap between the inner and outer radii.
    pub min_delta: f32,
}
impl Default for RadiusBounds {
    fn default() -> Self {
        Self {
            radius_min: 100.0,
            radius_max: 900.0,
            min_delta: 50.0,
        }
    }
}
impl RadiusBounds {
    /// Returns bounds, widening `radius_max` if needed so that there is room
    /// for `min_delta` between the radii.
    ///
    /// # Panics
    ///
    /// This function panics if any value is negative.
    pub fn new(radius_min: f32, radius_max: f32, min_delta: f32) -> Self {
        assert!(
            radius_min >= 0.0 && radius_max >= 0.0 && min_delta >= 0.0,
            "Radius bounds must be non-negative, not ({}, {}, {})",
            radius_min,
            radius_max,
            min_delta,
        );
        Self {
            radius_min,
            radius_max: radius_max.max(radius_min + min_delta),
            min_delta,
        }
    }
}

/// Lets the pointer move freely up to an inner radius, then resists more and
/// more until the tracked distance stops at an outer radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RadiusTensionTracker {
    bounds: RadiusBounds,
    inner: f32,
    outer: f32,
    tension: f32,
    easing: Easing,
}
impl Default for RadiusTensionTracker {
    fn default() -> Self {
        Self::new(RadiusBounds::default())
    }
}
impl RadiusTensionTracker {
    /// Returns a tracker with the given bounds, with radii at 30% and 70% of
    /// the maximum radius.
    pub fn new(bounds: RadiusBounds) -> Self {
        let mut ret = Self {
            bounds,
            inner: bounds.radius_min,
            outer: bounds.radius_max,
            tension: DEFAULT_RADIUS_TENSION,
            easing: DEFAULT_RADIUS_EASING,
        };
        ret.set_inner_radius(0.3 * bounds.radius_max);
        ret.set_outer_radius(0.7 * bounds.radius_max);
        ret
    }

    /// Returns the bounds.
    pub fn bounds(&self) -> RadiusBounds {
        self.bounds
    }
    /// Returns the radius up to which movement is unaffected.
    pub fn inner_radius(&self) -> f32 {
        self.inner
    }
    /// Sets the inner radius, clamped between the minimum radius and
    /// `min_delta` below the outer radius.
    pub fn set_inner_radius(&mut self, radius: f32) {
        // `max()` comes first so that `NaN`s will become `radius_min`.
        self.inner = radius
            .max(self.bounds.radius_min)
            .min(self.outer - self.bounds.min_delta)
            .max(self.bounds.radius_min);
        if self.inner != radius {
            log::debug!("inner radius {} clamped to {}", radius, self.inner);
        }
    }
    /// Returns the largest distance ever reported.
    pub fn outer_radius(&self) -> f32 {
        self.outer
    }
    /// Sets the outer radius, clamped between `min_delta` above the inner
    /// radius and the maximum radius.
    pub fn set_outer_radius(&mut self, radius: f32) {
        self.outer = radius
            .max(self.inner + self.bounds.min_delta)
            .min(self.bounds.radius_max);
        if self.outer != radius {
            log::debug!("outer radius {} clamped to {}", radius, self.outer);
        }
    }
    /// Returns the tension.
    pub fn tension(&self) -> f32 {
        self.tension
    }
    /// Sets the tension: how far past the outer radius, as a fraction of the
    /// gap between the radii, the pointer must go before the outer radius is
    /// reached. Negative values become zero.
    pub fn set_tension(&mut self, tension: f32) {
        self.tension = tension.max(0.0);
    }
    /// Returns the easing applied between the radii.
    pub fn easing(&self) -> Easing {
        self.easing
    }
    /// Sets the easing applied between the radii.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Maps a raw pointer distance to the distance that is reported.
    ///
    /// The result never decreases as `raw` increases and never exceeds the
    /// outer radius.
    pub fn interpolate_distance(&self, raw: f32) -> f32 {
        let zone = self.outer - self.inner;
        let pull = zone * (self.tension + 1.0);
        if raw <= self.inner {
            raw
        } else if raw >= self.inner + pull {
            self.outer
        } else {
            self.inner + zone * self.easing.transform((raw - self.inner) / pull)
        }
    }

    /// Updates `state` from an event, pulling moves in towards the down
    /// point.
    pub fn process(&self, event: &PointerEvent, state: &mut TouchState) {
        PlainTracker.process(event, state);

        if event.phase != TouchPhase::Move {
            return;
        }
        let (down, current, raw) = match (state.down(), state.current(), state.distance()) {
            (Some(down), Some(current), Some(raw)) => (down, current, raw),
            _ => return,
        };
        if raw <= 0.0 {
            return;
        }
        let output = self.interpolate_distance(raw);
        if let Some(p) = point_at_percent(&Path::line(down, current), raw, output / raw) {
            state.set_current(p);
            state.distance = point_distance(down, p);
        }
        log::trace!("radius tension {} -> {}", raw, state.distance);
    }
}
