use cgmath::Point2;

use super::{PointerEvent, TouchPhase};
use crate::geometry::point_distance;

/// Platform touch slop, in pixels, before any adjustment.
pub const DEFAULT_TOUCH_SLOP: f32 = 8.0;

/// Slider sizes at or above this map to the largest slop.
const SLOP_SIZE_LIMIT: i32 = 100;
/// Pixels of slop per unit of slider size.
const SLOP_SIZE_MULTIPLIER: i32 = 3;

/// Minimum pointer travel before a move counts as a drag.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TouchSlop {
    /// Radius used for negative sizes.
    base: f32,
    radius: f32,
}
impl Default for TouchSlop {
    fn default() -> Self {
        Self::new(DEFAULT_TOUCH_SLOP)
    }
}
impl TouchSlop {
    /// Returns a slop of `base` pixels.
    pub fn new(base: f32) -> Self {
        Self { base, radius: base }
    }

    /// Returns the slop radius.
    pub fn radius(self) -> f32 {
        self.radius
    }
    /// Sets the slop from a slider size: negative sizes restore the base
    /// radius, and sizes are otherwise scaled and capped.
    pub fn set_size(&mut self, size: i32) {
        self.radius = if size < 0 {
            self.base
        } else if size >= SLOP_SIZE_LIMIT {
            (SLOP_SIZE_LIMIT * SLOP_SIZE_MULTIPLIER) as f32
        } else {
            (size * SLOP_SIZE_MULTIPLIER) as f32
        };
        log::debug!("touch slop size {} -> radius {}", size, self.radius);
    }
    /// Returns `true` if `distance` is beyond the slop.
    pub fn exceeded(self, distance: f32) -> bool {
        distance > self.radius
    }
}

/// Tracks whether a gesture has left the touch slop, measured in global
/// coordinates so that it is unaffected by the surface moving.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct SlopTracker {
    slop: TouchSlop,

    /// Global down point of the gesture in progress.
    raw_down: Option<Point2<f32>>,
    /// Local down point of the latest gesture, kept after release so its
    /// slop can still be shown.
    last_down: Option<Point2<f32>>,
    /// Whether the gesture in progress has ever left the slop.
    past_threshold: bool,
}
impl SlopTracker {
    /// Returns a tracker using `slop`.
    pub fn new(slop: TouchSlop) -> Self {
        Self {
            slop,
            ..Self::default()
        }
    }

    /// Returns the slop.
    pub fn slop(&self) -> TouchSlop {
        self.slop
    }
    /// Returns the slop mutably.
    pub fn slop_mut(&mut self) -> &mut TouchSlop {
        &mut self.slop
    }
    /// Returns the local down point of the latest gesture.
    pub fn last_down(&self) -> Option<Point2<f32>> {
        self.last_down
    }
    /// Returns `true` if the gesture in progress has ever left the slop.
    pub fn past_threshold(&self) -> bool {
        self.past_threshold
    }

    /// Updates the tracker, returning whether the event is worth reporting:
    /// downs and gesture ends always are, moves only beyond the slop.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        match event.phase {
            TouchPhase::Down => {
                self.raw_down = Some(event.raw_pos);
                self.last_down = Some(event.pos);
                self.past_threshold = false;
                true
            }
            TouchPhase::Move => match self.raw_down {
                Some(raw_down) => {
                    let beyond = self.slop.exceeded(point_distance(raw_down, event.raw_pos));
                    self.past_threshold |= beyond;
                    beyond
                }
                None => false,
            },
            TouchPhase::Up | TouchPhase::Cancel => {
                self.raw_down = None;
                self.past_threshold = false;
                true
            }
        }
    }
}
