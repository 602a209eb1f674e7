use cgmath::Point2;
use std::collections::VecDeque;
use std::fmt;

use super::{PointerEvent, TouchPhase};

/// Number of events kept in a [`TouchLog`].
pub const TOUCH_LOG_CAPACITY: usize = 6;

/// Entry of a [`TouchLog`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LoggedEvent {
    /// Phase of the event.
    pub phase: TouchPhase,
    /// Local position of the latest event with this phase.
    pub pos: Point2<f32>,
}
impl fmt::Display for LoggedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.phase, self.pos.x, self.pos.y)
    }
}

/// Short history of pointer events, where a run of events with the same
/// phase collapses into one entry holding the latest position.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TouchLog {
    /// Newest entry at the front.
    entries: VecDeque<LoggedEvent>,
}
impl TouchLog {
    /// Returns an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an event.
    pub fn record(&mut self, event: &PointerEvent) {
        match self.entries.front_mut() {
            Some(newest) if newest.phase == event.phase => newest.pos = event.pos,
            _ => self.entries.push_front(LoggedEvent {
                phase: event.phase,
                pos: event.pos,
            }),
        }
        self.entries.truncate(TOUCH_LOG_CAPACITY);
    }

    /// Iterates over entries from oldest to newest.
    pub fn entries(&self) -> impl Iterator<Item = &LoggedEvent> + '_ {
        self.entries.iter().rev()
    }
    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
impl fmt::Display for TouchLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}
