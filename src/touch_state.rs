use cgmath::Point2;
use std::fmt;

/// Details about an in-progress gesture.
///
/// Every field holds [`TouchState::NONE`] while no gesture is in progress.
/// One surface owns one `TouchState` and reuses it for every gesture; the
/// state of a gesture ends only through [`TouchState::reset()`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TouchState {
    /// Local X coordinate where the gesture started.
    pub x_down: f32,
    /// Local Y coordinate where the gesture started.
    pub y_down: f32,
    /// Global X coordinate where the gesture started.
    pub x_down_raw: f32,
    /// Global Y coordinate where the gesture started.
    pub y_down_raw: f32,

    /// Latest tracked local X coordinate. Processors may damp or interpolate
    /// this, so it is not necessarily the pointer position.
    pub x_current: f32,
    /// Latest tracked local Y coordinate.
    pub y_current: f32,
    /// Latest global X coordinate of the pointer.
    pub x_current_raw: f32,
    /// Latest global Y coordinate of the pointer.
    pub y_current_raw: f32,

    /// Distance between the down and current coordinates, as last written by
    /// a processor. Only meaningful when both points are set.
    pub distance: f32,
}
impl Default for TouchState {
    fn default() -> Self {
        Self {
            x_down: Self::NONE,
            y_down: Self::NONE,
            x_down_raw: Self::NONE,
            y_down_raw: Self::NONE,

            x_current: Self::NONE,
            y_current: Self::NONE,
            x_current_raw: Self::NONE,
            y_current_raw: Self::NONE,

            distance: Self::NONE,
        }
    }
}
impl fmt::Display for TouchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TouchState{{x_down={}, x_down_raw={}, y_down={}, y_down_raw={}, \
             x_current={}, x_current_raw={}, y_current={}, y_current_raw={}, distance={}}}",
            self.x_down,
            self.x_down_raw,
            self.y_down,
            self.y_down_raw,
            self.x_current,
            self.x_current_raw,
            self.y_current,
            self.y_current_raw,
            self.distance,
        )
    }
}

impl TouchState {
    /// "No value" sentinel for every field.
    pub const NONE: f32 = -1.0;

    /// Returns a state with no gesture in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `value` is the "no value" sentinel.
    pub fn is_none(value: f32) -> bool {
        value == Self::NONE
    }

    /// Returns the local down point, or `None` if either coordinate is unset.
    pub fn down(&self) -> Option<Point2<f32>> {
        point_if_set(self.x_down, self.y_down)
    }
    /// Sets the local down point.
    pub fn set_down(&mut self, pos: Point2<f32>) {
        log::trace!("set_down({}, {})", pos.x, pos.y);
        self.x_down = pos.x;
        self.y_down = pos.y;
    }
    /// Sets the global down point.
    pub fn set_down_raw(&mut self, pos: Point2<f32>) {
        self.x_down_raw = pos.x;
        self.y_down_raw = pos.y;
    }

    /// Returns the local current point, or `None` if either coordinate is
    /// unset.
    pub fn current(&self) -> Option<Point2<f32>> {
        point_if_set(self.x_current, self.y_current)
    }
    /// Sets the local current point.
    pub fn set_current(&mut self, pos: Point2<f32>) {
        self.x_current = pos.x;
        self.y_current = pos.y;
    }
    /// Sets the global current point.
    pub fn set_current_raw(&mut self, pos: Point2<f32>) {
        self.x_current_raw = pos.x;
        self.y_current_raw = pos.y;
    }

    /// Returns the distance if it has been computed for this gesture.
    pub fn distance(&self) -> Option<f32> {
        if Self::is_none(self.distance) {
            None
        } else {
            Some(self.distance)
        }
    }

    /// Returns `true` if every field holds the sentinel.
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }

    /// Ends the gesture, returning every field to the sentinel.
    pub fn reset(&mut self) {
        log::trace!("reset()");
        *self = Self::default();
    }
}

fn point_if_set(x: f32, y: f32) -> Option<Point2<f32>> {
    if TouchState::is_none(x) || TouchState::is_none(y) {
        None
    } else {
        Some(Point2::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_returns_every_field_to_sentinel() {
        let mut state = TouchState::new();
        state.set_down(Point2::new(1.0, 2.0));
        state.set_down_raw(Point2::new(11.0, 12.0));
        state.set_current(Point2::new(3.0, 4.0));
        state.set_current_raw(Point2::new(13.0, 14.0));
        state.distance = 5.0;
        assert!(!state.is_idle());

        state.reset();
        for field in [
            state.x_down,
            state.y_down,
            state.x_down_raw,
            state.y_down_raw,
            state.x_current,
            state.y_current,
            state.x_current_raw,
            state.y_current_raw,
            state.distance,
        ] {
            assert_eq!(field, -1.0);
        }
        assert!(state.is_idle());
    }

    #[test]
    fn partial_points_are_unset() {
        let mut state = TouchState::new();
        state.x_down = 5.0;
        assert_eq!(state.down(), None);
        state.y_down = 6.0;
        assert_eq!(state.down(), Some(Point2::new(5.0, 6.0)));
        assert_eq!(state.current(), None);
        assert_eq!(state.distance(), None);
    }

    #[test]
    fn display_lists_all_fields() {
        let text = TouchState::new().to_string();
        assert!(text.starts_with("TouchState{x_down=-1"));
        assert!(text.ends_with("distance=-1}"));
    }
}
