use cgmath::Point2;
use std::time::Duration;

use crate::animation::{Animation, Easing};
use crate::geometry::{approx_eq, point_at_percent, point_distance, Path};
use crate::input::{PointerEvent, TouchPhase};
use crate::{TouchState, TouchStateConsumer};

/// Distance from an anchor within which the down point snaps to it.
pub const DEFAULT_EVENT_HORIZON: f32 = 10.0;
/// Duration of a snap.
pub const SNAP_DURATION: Duration = Duration::from_millis(300);

/// Anchors whose distances differ by no more than this count as equally near.
const ANCHOR_TIE_TOLERANCE: f32 = 0.1;

/// Snap in flight.
#[derive(Debug, Clone, PartialEq)]
struct Snap {
    target: Point2<f32>,
    /// Line from the down point to `target`.
    line: Path,
    length: f32,
}

/// Pulls the down point onto one of two anchors when the pointer comes close
/// to it.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorSnapTracker {
    anchors: [Point2<f32>; 2],
    event_horizon: f32,

    animation: Animation,
    snap: Option<Snap>,
    pointer_down: bool,
}
impl AnchorSnapTracker {
    /// Returns a tracker with two anchors and the default event horizon.
    pub fn new(first: Point2<f32>, second: Point2<f32>) -> Self {
        Self {
            anchors: [first, second],
            event_horizon: DEFAULT_EVENT_HORIZON,

            animation: Animation::new(SNAP_DURATION, Easing::AccelerateDecelerate),
            snap: None,
            pointer_down: false,
        }
    }
    /// Returns the tracker with a different event horizon.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn with_event_horizon(mut self, event_horizon: f32) -> Self {
        self.set_event_horizon(event_horizon);
        self
    }

    /// Returns both anchors.
    pub fn anchors(&self) -> [Point2<f32>; 2] {
        self.anchors
    }
    /// Moves the anchors.
    pub fn set_anchors(&mut self, first: Point2<f32>, second: Point2<f32>) {
        self.anchors = [first, second];
    }
    /// Returns the snapping distance.
    pub fn event_horizon(&self) -> f32 {
        self.event_horizon
    }
    /// Sets the snapping distance. Negative values become zero.
    pub fn set_event_horizon(&mut self, event_horizon: f32) {
        self.event_horizon = event_horizon.max(0.0);
    }
    /// Returns the anchor the down point is moving to, if any.
    pub fn snap_target(&self) -> Option<Point2<f32>> {
        self.snap.as_ref().map(|snap| snap.target)
    }
    /// Returns `true` while a snap is in flight.
    pub fn is_animating(&self) -> bool {
        self.snap.is_some()
    }

    /// Returns the anchor nearest to `p`, preferring the first on a tie.
    pub fn nearest_anchor(&self, p: Point2<f32>) -> Point2<f32> {
        let [first, second] = self.anchors;
        let d1 = point_distance(p, first);
        let d2 = point_distance(p, second);
        if d1 < d2 || approx_eq(d1, d2, ANCHOR_TIE_TOLERANCE) {
            first
        } else {
            second
        }
    }

    /// Updates `state` from an event, starting a snap if the pointer is near
    /// an anchor.
    pub fn process(&mut self, event: &PointerEvent, state: &mut TouchState) {
        match event.phase {
            TouchPhase::Down => {
                self.pointer_down = true;
                if self.snap.take().is_some() {
                    self.animation.cancel();
                    // A reset deferred by the cancelled snap happens now.
                    state.reset();
                    log::debug!("snap cancelled by new touch");
                }
                state.set_down(event.pos);
                state.set_down_raw(event.raw_pos);
                self.check_snap(event.pos, event.time, state);
            }
            TouchPhase::Move => {
                state.set_current(event.pos);
                state.set_current_raw(event.raw_pos);
                if !self.is_animating() {
                    if let Some(down) = state.down() {
                        state.distance = point_distance(event.pos, down);
                    }
                }
                self.check_snap(event.pos, event.time, state);
            }
            TouchPhase::Up | TouchPhase::Cancel => {
                self.pointer_down = false;
                // Otherwise the reset happens when the snap lands.
                if !self.is_animating() {
                    state.reset();
                }
            }
        }
    }

    fn check_snap(&mut self, pointer: Point2<f32>, now: Duration, state: &TouchState) {
        let anchor = self.nearest_anchor(pointer);
        match &self.snap {
            Some(snap) if snap.target == anchor => return,
            None if state.down() == Some(anchor) => return,
            _ => (),
        }
        if point_distance(pointer, anchor) >= self.event_horizon {
            return;
        }
        let down = match state.down() {
            Some(down) => down,
            None => return,
        };
        log::debug!("snapping ({}, {}) to anchor ({}, {})", down.x, down.y, anchor.x, anchor.y);
        self.snap = Some(Snap {
            target: anchor,
            line: Path::line(down, anchor),
            length: point_distance(down, anchor),
        });
        self.animation.start(now);
    }

    /// Advances a snap to time `now`, moving the down point and handing the
    /// state to `consumer`.
    ///
    /// If the pointer was released during the snap, the state is reset when
    /// it lands and handed over once more. Returns `true` if no snap is in
    /// flight anymore.
    pub fn advance<C>(&mut self, now: Duration, state: &mut TouchState, consumer: &mut C) -> bool
    where
        C: TouchStateConsumer + ?Sized,
    {
        let snap = match &self.snap {
            Some(snap) => snap,
            None => return true,
        };
        let frame = match self.animation.sample(now) {
            Some(frame) => frame,
            None => {
                self.snap = None;
                return true;
            }
        };

        let down = if frame.finished {
            snap.target
        } else {
            point_at_percent(&snap.line, snap.length, frame.fraction).unwrap_or(snap.target)
        };
        state.set_down(down);
        if self.pointer_down {
            if let Some(current) = state.current() {
                state.distance = point_distance(current, down);
            }
        } else {
            state.set_current(down);
            state.distance = 0.0;
        }
        consumer.draw_touch_state(state);

        if frame.finished {
            self.snap = None;
            if !self.pointer_down {
                state.reset();
                consumer.draw_touch_state(state);
            }
        }
        frame.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consumer::RecordingConsumer;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn tracker() -> AnchorSnapTracker {
        AnchorSnapTracker::new(Point2::new(0.0, 0.0), Point2::new(100.0, 100.0))
    }

    #[test]
    fn nearest_anchor_prefers_first_on_tie() {
        let t = tracker();
        assert_eq!(t.nearest_anchor(Point2::new(50.0, 50.0)), Point2::new(0.0, 0.0));
        assert_eq!(t.nearest_anchor(Point2::new(50.02, 50.0)), Point2::new(0.0, 0.0));
        assert_eq!(t.nearest_anchor(Point2::new(60.0, 60.0)), Point2::new(100.0, 100.0));
    }

    #[test]
    fn down_near_anchor_snaps() {
        let mut t = tracker();
        let mut state = TouchState::new();
        let mut consumer = RecordingConsumer::default();

        t.process(&PointerEvent::down(4.0, 4.0, ms(0)), &mut state);
        assert!(t.is_animating());
        assert_eq!(t.snap_target(), Some(Point2::new(0.0, 0.0)));

        assert!(!t.advance(ms(150), &mut state, &mut consumer));
        let halfway = state.down().unwrap();
        assert!((halfway.x - 2.0).abs() < 1e-3 && (halfway.y - 2.0).abs() < 1e-3);

        assert!(t.advance(ms(300), &mut state, &mut consumer));
        assert_eq!(state.down(), Some(Point2::new(0.0, 0.0)));
        assert!(!t.is_animating());
        // Pointer is still down, so nothing was reset.
        assert_eq!(consumer.states.len(), 2);
    }

    #[test]
    fn down_far_from_anchors_does_not_snap() {
        let mut t = tracker();
        let mut state = TouchState::new();
        t.process(&PointerEvent::down(50.0, 50.0, ms(0)), &mut state);
        assert!(!t.is_animating());

        t.process(&PointerEvent::moved(70.0, 50.0, ms(10)), &mut state);
        assert!(!t.is_animating());
        assert_eq!(state.distance, 20.0);
    }

    #[test]
    fn move_near_other_anchor_retargets() {
        let mut t = tracker();
        let mut state = TouchState::new();
        t.process(&PointerEvent::down(4.0, 4.0, ms(0)), &mut state);
        // Same anchor again does not restart.
        t.process(&PointerEvent::moved(3.0, 3.0, ms(50)), &mut state);
        assert_eq!(t.snap_target(), Some(Point2::new(0.0, 0.0)));

        t.process(&PointerEvent::moved(97.0, 97.0, ms(60)), &mut state);
        assert_eq!(t.snap_target(), Some(Point2::new(100.0, 100.0)));
    }

    #[test]
    fn release_during_snap_defers_reset() {
        let mut t = tracker();
        let mut state = TouchState::new();
        let mut consumer = RecordingConsumer::default();

        t.process(&PointerEvent::down(4.0, 4.0, ms(0)), &mut state);
        t.process(&PointerEvent::up(4.0, 4.0, ms(50)), &mut state);
        assert_eq!(state.down(), Some(Point2::new(4.0, 4.0)));

        assert!(!t.advance(ms(100), &mut state, &mut consumer));
        assert_eq!(state.distance, 0.0);
        assert_eq!(state.current(), state.down());

        assert!(t.advance(ms(400), &mut state, &mut consumer));
        assert!(state.is_idle());
        let states = &consumer.states;
        assert_eq!(states.len(), 3);
        assert_eq!(states[1].down(), Some(Point2::new(0.0, 0.0)));
        assert!(states[2].is_idle());

        // Nothing left to tick.
        assert!(t.advance(ms(500), &mut state, &mut consumer));
        assert_eq!(consumer.states.len(), 3);
    }

    #[test]
    fn new_touch_during_deferred_reset_starts_clean() {
        let mut t = tracker();
        let mut state = TouchState::new();
        let mut consumer = RecordingConsumer::default();

        t.process(&PointerEvent::down(4.0, 4.0, ms(0)), &mut state);
        t.process(&PointerEvent::up(4.0, 4.0, ms(50)), &mut state);
        assert!(!t.advance(ms(100), &mut state, &mut consumer));
        assert!(state.current().is_some());

        t.process(&PointerEvent::down(97.0, 97.0, ms(150)), &mut state);
        assert_eq!(t.snap_target(), Some(Point2::new(100.0, 100.0)));
        assert_eq!(state.down(), Some(Point2::new(97.0, 97.0)));
        assert_eq!(state.current(), None);
        assert_eq!(state.distance(), None);

        assert!(!t.advance(ms(200), &mut state, &mut consumer));
        assert_eq!(state.current(), None);
        assert_eq!(state.distance(), None);
    }

    #[test]
    fn already_on_anchor_does_not_animate() {
        let mut t = tracker();
        let mut state = TouchState::new();
        t.process(&PointerEvent::down(0.0, 0.0, ms(0)), &mut state);
        assert!(!t.is_animating());
    }
}
