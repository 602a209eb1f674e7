//! Two-card deck where dragging the top card far enough sends it to the
//! bottom.

use cgmath::{Point2, Vector2};
use std::time::Duration;

use crate::animation::{Easing, Tween};
use crate::geometry::approx_eq;
use crate::input::{PointerEvent, TouchPhase};
use crate::processor::{RadiusBounds, RadiusTensionTracker};
use crate::TouchState;

/// Tension of the drag between the radii.
const TENSION: f32 = 0.8;
/// Distance from [`RADIUS_MAX`] that counts as reaching it.
const AFFORDANCE: f32 = 0.05;
/// Drag radius below which the card follows the pointer exactly.
const RADIUS_MIN: f32 = 100.0;
/// Drag radius at which the cards swap.
const RADIUS_MAX: f32 = 370.0;
const SETTLE_DURATION: Duration = Duration::from_millis(200);
const ELEVATION_DURATION: Duration = Duration::from_millis(200);

/// Axis-aligned rectangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// Top-left corner.
    pub min: Point2<f32>,
    /// Bottom-right corner.
    pub max: Point2<f32>,
}
impl Rect {
    /// Returns a rectangle with corners `min` and `max`.
    pub fn new(min: Point2<f32>, max: Point2<f32>) -> Self {
        Self { min, max }
    }
    /// Returns `true` if `p` is inside the rectangle. The right and bottom
    /// edges are outside.
    pub fn contains(self, p: Point2<f32>) -> bool {
        self.min.x <= p.x && p.x < self.max.x && self.min.y <= p.y && p.y < self.max.y
    }
}

/// Elevations the cards move between.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Elevations {
    /// Bottom card at rest.
    pub low: f32,
    /// Top card at rest.
    pub mid: f32,
    /// Bottom card rising over the top card mid-swap.
    pub high: f32,
}
impl Default for Elevations {
    fn default() -> Self {
        Self {
            low: 2.0,
            mid: 6.0,
            high: 12.0,
        }
    }
}

/// Either card of a [`ShuffleDeck`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CardId {
    /// The card on top initially.
    A,
    /// The card on the bottom initially.
    B,
}
impl CardId {
    /// Returns the other card.
    pub fn other(self) -> Self {
        match self {
            CardId::A => CardId::B,
            CardId::B => CardId::A,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
struct Card {
    pos: Tween<Point2<f32>>,
    z: Tween<f32>,
}
impl Card {
    fn new(pos: Point2<f32>, z: f32) -> Self {
        Self {
            pos: Tween::new(pos, SETTLE_DURATION, Easing::AccelerateDecelerate),
            z: Tween::new(z, ELEVATION_DURATION, Easing::AccelerateDecelerate),
        }
    }
}

/// Two stacked cards. The top card follows drags that start on it, with
/// growing resistance; releasing it after the drag reaches the swap radius
/// puts it at the bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct ShuffleDeck {
    /// Resting bounds of the top card.
    resting: Rect,
    /// Offset between the cards at rest, on each axis.
    card_offset: f32,
    elevations: Elevations,

    tracker: RadiusTensionTracker,
    state: TouchState,

    cards: [Card; 2],
    top: CardId,

    /// Pointer position relative to the top card's corner.
    grab_offset: Vector2<f32>,
    /// Drag distance as of the previous event.
    last_distance: f32,
    /// Whether the current drag has ever reached the swap radius.
    passed_threshold: bool,
    /// Whether the latest down was on the top card.
    down_inside: bool,
}
impl ShuffleDeck {
    /// Returns a deck with card A resting in `resting`.
    pub fn new(resting: Rect, card_offset: f32, elevations: Elevations) -> Self {
        let mut tracker = RadiusTensionTracker::new(RadiusBounds::new(RADIUS_MIN, RADIUS_MAX, 50.0));
        tracker.set_inner_radius(RADIUS_MIN);
        tracker.set_outer_radius(RADIUS_MAX);
        tracker.set_tension(TENSION);

        let bottom_pos = resting.min - Vector2::new(2.0 * card_offset, 2.0 * card_offset);
        Self {
            resting,
            card_offset,
            elevations,

            tracker,
            state: TouchState::new(),

            cards: [
                Card::new(resting.min, elevations.mid),
                Card::new(bottom_pos, elevations.low),
            ],
            top: CardId::A,

            grab_offset: Vector2::new(0.0, 0.0),
            last_distance: 0.0,
            passed_threshold: false,
            down_inside: false,
        }
    }

    /// Returns the card on top.
    pub fn top(&self) -> CardId {
        self.top
    }
    /// Returns the position of a card's top-left corner.
    pub fn card_position(&self, id: CardId) -> Point2<f32> {
        self.card(id).pos.value()
    }
    /// Returns the elevation of a card.
    pub fn card_elevation(&self, id: CardId) -> f32 {
        self.card(id).z.value()
    }
    /// Returns `true` if the current drag has reached the swap radius.
    pub fn passed_threshold(&self) -> bool {
        self.passed_threshold
    }
    /// Returns `true` while a drag that started on the top card is in
    /// progress.
    pub fn is_dragging(&self) -> bool {
        self.down_inside
    }
    /// Returns the touch state of the drag.
    pub fn state(&self) -> &TouchState {
        &self.state
    }

    fn card(&self, id: CardId) -> &Card {
        match id {
            CardId::A => &self.cards[0],
            CardId::B => &self.cards[1],
        }
    }
    fn card_mut(&mut self, id: CardId) -> &mut Card {
        match id {
            CardId::A => &mut self.cards[0],
            CardId::B => &mut self.cards[1],
        }
    }

    /// Handles one pointer event.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) {
        match event.phase {
            TouchPhase::Down if self.resting.contains(event.pos) => {
                self.grab_offset = event.pos - self.resting.min;
                self.down_inside = true;
            }
            TouchPhase::Up | TouchPhase::Cancel => {
                if self.down_inside {
                    self.settle(event.time);
                }
                self.state.reset();
                self.down_inside = false;
                return;
            }
            _ => (),
        }

        self.tracker.process(event, &mut self.state);
        self.follow(event.time);
    }

    /// Moves the top card to the tracked point.
    fn follow(&mut self, now: Duration) {
        if !self.down_inside {
            return;
        }
        let to = match (self.state.current(), self.state.down()) {
            (Some(current), _) => current,
            (None, Some(down)) => {
                self.passed_threshold = false;
                down
            }
            (None, None) => return,
        };

        let distance = self.state.distance;
        if approx_eq(distance, RADIUS_MAX, AFFORDANCE) && self.last_distance < RADIUS_MAX - AFFORDANCE {
            log::debug!("shuffle threshold passed");
            self.passed_threshold = true;
            let (low, high) = (self.elevations.low, self.elevations.high);
            let top = self.top;
            self.card_mut(top).z.animate_to(low, now);
            self.card_mut(top.other()).z.animate_to(high, now);
            self.last_distance = RADIUS_MAX;
        } else {
            self.last_distance = distance;
        }

        let top = self.top;
        let grab_offset = self.grab_offset;
        self.card_mut(top).pos.snap_to(to - grab_offset);
    }

    /// Sends both cards to their resting places, swapping them if the drag
    /// passed the threshold.
    fn settle(&mut self, now: Duration) {
        let front = self.resting.min;
        let back = front - Vector2::new(2.0 * self.card_offset, 2.0 * self.card_offset);
        let (top_pos, top_z, bottom_pos, bottom_z) = if self.passed_threshold {
            (back, self.elevations.low, front, self.elevations.mid)
        } else {
            (front, self.elevations.mid, back, self.elevations.low)
        };

        let top = self.top;
        let top_card = self.card_mut(top);
        top_card.pos.animate_to(top_pos, now);
        top_card.z.animate_to(top_z, now);
        let bottom_card = self.card_mut(top.other());
        bottom_card.pos.animate_to(bottom_pos, now);
        bottom_card.z.animate_to(bottom_z, now);

        if self.passed_threshold {
            self.top = top.other();
            log::debug!("shuffled; {:?} is on top", self.top);
        }
    }

    /// Advances the card animations to time `now`.
    ///
    /// Returns `true` if every card is at rest.
    pub fn advance(&mut self, now: Duration) -> bool {
        let mut at_rest = true;
        for card in &mut self.cards {
            at_rest &= card.pos.advance(now);
            at_rest &= card.z.advance(now);
        }
        at_rest
    }
}
