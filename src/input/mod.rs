//! Raw pointer input and the small effects that observe it directly.

use cgmath::Point2;
use std::fmt;
use std::time::Duration;

mod elevation;
mod history;
mod slop;

pub use self::elevation::{Elevator, Z_MAX, Z_MIN};
pub use self::history::{LoggedEvent, TouchLog, TOUCH_LOG_CAPACITY};
pub use self::slop::{SlopTracker, TouchSlop, DEFAULT_TOUCH_SLOP};

/// Phase of a pointer event within a gesture.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// Pointer went down; starts a gesture.
    Down,
    /// Pointer moved while down.
    Move,
    /// Pointer went up; ends a gesture.
    Up,
    /// Gesture was aborted by the platform; ends a gesture.
    Cancel,
}
impl fmt::Display for TouchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TouchPhase::Down => write!(f, "ACTION_DOWN"),
            TouchPhase::Move => write!(f, "ACTION_MOVE"),
            TouchPhase::Up => write!(f, "ACTION_UP"),
            TouchPhase::Cancel => write!(f, "ACTION_CANCEL"),
        }
    }
}
impl TouchPhase {
    /// Returns `true` for phases that end a gesture.
    pub fn is_terminal(self) -> bool {
        matches!(self, TouchPhase::Up | TouchPhase::Cancel)
    }
}

/// Single pointer event.
///
/// Events of one gesture arrive in order: one `Down`, any number of `Move`,
/// then exactly one `Up` or `Cancel`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerEvent {
    /// Phase of the event.
    pub phase: TouchPhase,
    /// Position relative to the surface receiving the event.
    pub pos: Point2<f32>,
    /// Position in global (screen) coordinates.
    pub raw_pos: Point2<f32>,
    /// Monotonic timestamp.
    pub time: Duration,
}
impl PointerEvent {
    /// Returns an event whose global position equals its local position.
    pub fn new(phase: TouchPhase, x: f32, y: f32, time: Duration) -> Self {
        let pos = Point2::new(x, y);
        Self {
            phase,
            pos,
            raw_pos: pos,
            time,
        }
    }
    /// Returns a `Down` event.
    pub fn down(x: f32, y: f32, time: Duration) -> Self {
        Self::new(TouchPhase::Down, x, y, time)
    }
    /// Returns a `Move` event.
    pub fn moved(x: f32, y: f32, time: Duration) -> Self {
        Self::new(TouchPhase::Move, x, y, time)
    }
    /// Returns an `Up` event.
    pub fn up(x: f32, y: f32, time: Duration) -> Self {
        Self::new(TouchPhase::Up, x, y, time)
    }
    /// Returns a `Cancel` event.
    pub fn cancel(x: f32, y: f32, time: Duration) -> Self {
        Self::new(TouchPhase::Cancel, x, y, time)
    }

    /// Returns the event with a different global position.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn with_raw(mut self, x: f32, y: f32) -> Self {
        self.raw_pos = Point2::new(x, y);
        self
    }
}
