//! Sinks that react to touch state updates.

use crate::TouchState;

mod bezier;

pub use bezier::{BezierTrail, Circle};

/// Something that recomputes derived geometry from a touch state and
/// schedules a redraw.
///
/// Consumers must tolerate sentinel values in the state.
pub trait TouchStateConsumer {
    /// Reacts to a new touch state.
    fn draw_touch_state(&mut self, state: &TouchState);
}
impl<F: FnMut(&TouchState)> TouchStateConsumer for F {
    fn draw_touch_state(&mut self, state: &TouchState) {
        self(state)
    }
}

/// Consumer that keeps a copy of every state it is handed.
#[derive(Debug, Default, Clone)]
pub struct RecordingConsumer {
    /// States received, oldest first.
    pub states: Vec<TouchState>,
}
impl TouchStateConsumer for RecordingConsumer {
    fn draw_touch_state(&mut self, state: &TouchState) {
        self.states.push(*state);
    }
}
impl RecordingConsumer {
    /// Returns the most recent state received.
    pub fn last(&self) -> Option<&TouchState> {
        self.states.last()
    }
}
