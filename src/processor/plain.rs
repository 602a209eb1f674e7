use crate::geometry::point_distance;
use crate::input::{PointerEvent, TouchPhase};
use crate::TouchState;

/// Records pointer positions exactly as they arrive.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct PlainTracker;
impl PlainTracker {
    /// Updates `state` from an event: down records the origin, move records
    /// the current point and distance, and up or cancel resets.
    pub fn process(self, event: &PointerEvent, state: &mut TouchState) {
        match event.phase {
            TouchPhase::Down => {
                state.set_down(event.pos);
                state.set_down_raw(event.raw_pos);
            }
            TouchPhase::Move => {
                state.set_current(event.pos);
                state.set_current_raw(event.raw_pos);
                if let Some(down) = state.down() {
                    state.distance = point_distance(down, event.pos);
                }
            }
            TouchPhase::Up | TouchPhase::Cancel => state.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Point2;
    use std::time::Duration;

    #[test]
    fn tracks_down_move_up() {
        let t = Duration::ZERO;
        let mut state = TouchState::new();
        PlainTracker.process(&PointerEvent::down(10.0, 10.0, t).with_raw(110.0, 210.0), &mut state);
        assert_eq!(state.down(), Some(Point2::new(10.0, 10.0)));
        assert_eq!((state.x_down_raw, state.y_down_raw), (110.0, 210.0));
        assert_eq!(state.current(), None);

        PlainTracker.process(&PointerEvent::moved(10.0, 110.0, t), &mut state);
        assert_eq!(state.current(), Some(Point2::new(10.0, 110.0)));
        assert_eq!(state.distance, 100.0);

        PlainTracker.process(&PointerEvent::up(10.0, 110.0, t), &mut state);
        assert_eq!(state.distance, -1.0);
        assert!(state.is_idle());
    }
}
