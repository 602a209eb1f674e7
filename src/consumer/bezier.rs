use cgmath::Point2;

use super::TouchStateConsumer;
use crate::geometry::{slop_bezier, Path};
use crate::TouchState;

/// Circle to outline around a point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    /// Center of the circle.
    pub center: Point2<f32>,
    /// Radius of the circle.
    pub radius: f32,
}

/// Bezier teardrop traced from the touch point around the touch slop.
///
/// Holds the geometry to draw; the host checks
/// [`BezierTrail::take_redraw_request()`] once per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierTrail {
    slop_radius: f32,

    /// Teardrop path, if the pointer is outside the slop.
    path: Option<Path>,
    /// Slop outline, shown while the pointer is inside the slop and after
    /// release.
    slop_circle: Option<Circle>,
    /// Most recent down point seen.
    last_down: Option<Point2<f32>>,

    redraw_requested: bool,
}
impl BezierTrail {
    /// Returns an empty trail around a slop circle of `slop_radius`.
    pub fn new(slop_radius: f32) -> Self {
        Self {
            slop_radius,
            path: None,
            slop_circle: None,
            last_down: None,
            redraw_requested: false,
        }
    }

    /// Returns the slop radius.
    pub fn slop_radius(&self) -> f32 {
        self.slop_radius
    }
    /// Sets the slop radius used for the next update.
    pub fn set_slop_radius(&mut self, slop_radius: f32) {
        self.slop_radius = slop_radius.max(0.0);
        self.redraw_requested = true;
    }

    /// Returns the teardrop path, if there is one.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }
    /// Returns the slop outline to draw, if any.
    pub fn slop_circle(&self) -> Option<Circle> {
        self.slop_circle
    }
    /// Returns the most recent down point.
    pub fn last_down(&self) -> Option<Point2<f32>> {
        self.last_down
    }
    /// Forgets the most recent down point, hiding the slop outline after
    /// release.
    pub fn clear_last_down(&mut self) {
        self.last_down = None;
        self.slop_circle = None;
        self.redraw_requested = true;
    }

    /// Returns whether a redraw was requested since the last call, clearing
    /// the request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::replace(&mut self.redraw_requested, false)
    }
}
impl TouchStateConsumer for BezierTrail {
    fn draw_touch_state(&mut self, state: &TouchState) {
        if let Some(down) = state.down() {
            self.last_down = Some(down);
        }
        self.path = slop_bezier(state, self.slop_radius);

        let released = state.down().is_none();
        let inside_slop = state.distance().map_or(false, |d| d < self.slop_radius);
        self.slop_circle = match self.last_down {
            Some(center) if released || inside_slop => Some(Circle {
                center,
                radius: self.slop_radius,
            }),
            _ => None,
        };

        self.redraw_requested = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_appears_outside_slop() {
        let mut trail = BezierTrail::new(18.0);
        let mut state = TouchState::new();
        state.set_down(Point2::new(10.0, 10.0));
        trail.draw_touch_state(&state);
        assert!(trail.take_redraw_request());
        assert!(!trail.take_redraw_request());
        assert_eq!(trail.path(), None);
        assert_eq!(trail.slop_circle(), None);

        state.set_current(Point2::new(10.0, 20.0));
        state.distance = 10.0;
        trail.draw_touch_state(&state);
        assert_eq!(trail.path(), None);
        assert_eq!(
            trail.slop_circle(),
            Some(Circle {
                center: Point2::new(10.0, 10.0),
                radius: 18.0,
            })
        );

        state.set_current(Point2::new(10.0, 110.0));
        state.distance = 100.0;
        trail.draw_touch_state(&state);
        assert!(trail.path().is_some());
        assert_eq!(trail.slop_circle(), None);
    }

    #[test]
    fn release_leaves_slop_outline_at_last_down() {
        let mut trail = BezierTrail::new(18.0);
        let mut state = TouchState::new();
        state.set_down(Point2::new(5.0, 6.0));
        trail.draw_touch_state(&state);
        state.reset();
        trail.draw_touch_state(&state);
        assert_eq!(trail.path(), None);
        assert_eq!(trail.slop_circle().map(|c| c.center), Some(Point2::new(5.0, 6.0)));

        trail.clear_last_down();
        trail.draw_touch_state(&state);
        assert_eq!(trail.slop_circle(), None);
    }
}
