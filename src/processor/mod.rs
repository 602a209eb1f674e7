//! Strategies that turn pointer events into a [`TouchState`].

use std::time::Duration;

use crate::input::PointerEvent;
use crate::{TouchState, TouchStateConsumer};

mod anchor;
mod plain;
mod radius;
mod tension;

pub use anchor::{AnchorSnapTracker, DEFAULT_EVENT_HORIZON, SNAP_DURATION};
pub use plain::PlainTracker;
pub use radius::{RadiusBounds, RadiusTensionTracker, DEFAULT_RADIUS_EASING, DEFAULT_RADIUS_TENSION};
pub use tension::{TensionTracker, DEFAULT_TENSION};

/// Touch processor, selected per surface.
#[derive(Debug, Clone, PartialEq)]
pub enum TouchProcessor {
    /// Pointer positions as they arrive.
    Plain(PlainTracker),
    /// Displacement scaled by a constant tension.
    Tension(TensionTracker),
    /// Free movement up to an inner radius, eased resistance up to an outer
    /// one.
    RadiusTension(RadiusTensionTracker),
    /// Down point snapping to the nearer of two anchors.
    AnchorSnap(AnchorSnapTracker),
}
impl Default for TouchProcessor {
    fn default() -> Self {
        TouchProcessor::Plain(PlainTracker)
    }
}
impl From<PlainTracker> for TouchProcessor {
    fn from(tracker: PlainTracker) -> Self {
        TouchProcessor::Plain(tracker)
    }
}
impl From<TensionTracker> for TouchProcessor {
    fn from(tracker: TensionTracker) -> Self {
        TouchProcessor::Tension(tracker)
    }
}
impl From<RadiusTensionTracker> for TouchProcessor {
    fn from(tracker: RadiusTensionTracker) -> Self {
        TouchProcessor::RadiusTension(tracker)
    }
}
impl From<AnchorSnapTracker> for TouchProcessor {
    fn from(tracker: AnchorSnapTracker) -> Self {
        TouchProcessor::AnchorSnap(tracker)
    }
}
impl TouchProcessor {
    /// Updates `state` from one pointer event.
    pub fn process(&mut self, event: &PointerEvent, state: &mut TouchState) {
        match self {
            TouchProcessor::Plain(p) => p.process(event, state),
            TouchProcessor::Tension(p) => p.process(event, state),
            TouchProcessor::RadiusTension(p) => p.process(event, state),
            TouchProcessor::AnchorSnap(p) => p.process(event, state),
        }
        log::trace!("{} -> {}", event.phase, state);
    }

    /// Advances any animation the processor owns to time `now`.
    ///
    /// Returns `true` if nothing is left running.
    pub fn advance<C>(&mut self, now: Duration, state: &mut TouchState, consumer: &mut C) -> bool
    where
        C: TouchStateConsumer + ?Sized,
    {
        match self {
            TouchProcessor::AnchorSnap(p) => p.advance(now, state, consumer),
            _ => true,
        }
    }

    /// Returns `true` if [`TouchProcessor::advance()`] has work to do.
    pub fn is_animating(&self) -> bool {
        match self {
            TouchProcessor::AnchorSnap(p) => p.is_animating(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consumer::RecordingConsumer;
    use cgmath::Point2;

    #[test]
    fn dispatches_to_variant() {
        let t = Duration::ZERO;
        let mut processor = TouchProcessor::from(TensionTracker::new(0.5));
        let mut state = TouchState::new();
        processor.process(&PointerEvent::down(0.0, 0.0, t), &mut state);
        processor.process(&PointerEvent::moved(0.0, 100.0, t), &mut state);
        assert_eq!(state.distance, 50.0);
        assert!(!processor.is_animating());

        let mut consumer = RecordingConsumer::default();
        assert!(processor.advance(t, &mut state, &mut consumer));
        assert!(consumer.states.is_empty());
    }

    #[test]
    fn anchor_snap_is_animated() {
        let t = Duration::ZERO;
        let mut processor =
            TouchProcessor::from(AnchorSnapTracker::new(Point2::new(0.0, 0.0), Point2::new(50.0, 0.0)));
        let mut state = TouchState::new();
        processor.process(&PointerEvent::down(45.0, 0.0, t), &mut state);
        assert!(processor.is_animating());

        let mut consumer = RecordingConsumer::default();
        assert!(processor.advance(SNAP_DURATION, &mut state, &mut consumer));
        assert_eq!(state.down(), Some(Point2::new(50.0, 0.0)));
        assert!(!processor.is_animating());
    }
}
