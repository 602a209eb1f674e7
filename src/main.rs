//! Replays a synthetic, slightly shaky drag through every touch processor at
//! 60 FPS and logs the resulting touch states.

#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

use cgmath::Point2;
use log::LevelFilter;
use rand::Rng;
use simple_logger::SimpleLogger;
use std::time::Duration;

use touch_motion::consumer::BezierTrail;
use touch_motion::processor::{AnchorSnapTracker, PlainTracker, RadiusTensionTracker, TensionTracker};
use touch_motion::shuffle::{CardId, Elevations, Rect, ShuffleDeck};
use touch_motion::{PointerEvent, SurfaceConfig, TouchProcessor, TouchSurface};

const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / 60);
/// Number of move events in one gesture.
const GESTURE_MOVES: u32 = 30;
/// Maximum pointer wobble, in pixels.
const JITTER: f32 = 1.5;

fn main() {
    SimpleLogger::new()
        .with_level(LevelFilter::Debug)
        .init()
        .expect("Failed to initialize logger");

    let mut rng = rand::thread_rng();
    let from = Point2::new(205.0, 200.0);
    let to = Point2::new(205.0, 900.0);

    let demos: Vec<(&str, TouchProcessor, SurfaceConfig)> = vec![
        ("bezier", PlainTracker.into(), SurfaceConfig::default()),
        ("tension", TensionTracker::new(0.5).into(), SurfaceConfig::default()),
        (
            "radius tension",
            RadiusTensionTracker::default().into(),
            SurfaceConfig::default(),
        ),
        (
            "animated bezier",
            PlainTracker.into(),
            SurfaceConfig::default().with_settle(),
        ),
        (
            "anchor snap",
            AnchorSnapTracker::new(Point2::new(200.0, 200.0), Point2::new(200.0, 600.0)).into(),
            SurfaceConfig::default(),
        ),
    ];
    for (name, processor, config) in demos {
        let events = gesture(&mut rng, from, to);
        replay(name, processor, config, &events);
    }

    let events = gesture(&mut rng, from, to);
    replay_shuffle(&events);
}

/// Returns a down at `from`, moves towards `to` with some wobble, and an up.
fn gesture(rng: &mut impl Rng, from: Point2<f32>, to: Point2<f32>) -> Vec<PointerEvent> {
    let mut events = vec![PointerEvent::down(from.x, from.y, Duration::ZERO)];
    let mut time = Duration::ZERO;
    for i in 1..=GESTURE_MOVES {
        time += FRAME_DURATION;
        let t = i as f32 / GESTURE_MOVES as f32;
        let p = from + (to - from) * t;
        let x = p.x + rng.gen_range(-JITTER..=JITTER);
        let y = p.y + rng.gen_range(-JITTER..=JITTER);
        events.push(PointerEvent::moved(x, y, time));
    }
    time += FRAME_DURATION;
    events.push(PointerEvent::up(to.x, to.y, time));
    events
}

fn replay(name: &str, processor: TouchProcessor, config: SurfaceConfig, events: &[PointerEvent]) {
    log::info!("=== {} ===", name);
    let mut surface = TouchSurface::new(processor, config);
    surface.attach_consumer(BezierTrail::new(config.touch_slop.radius()));

    let mut now = Duration::ZERO;
    for event in events {
        now = event.time;
        surface.on_pointer_event(event);
        surface.advance(now);
        log_frame(&surface);
    }
    while !surface.advance(now) {
        log_frame(&surface);
        now += FRAME_DURATION;
    }
    log_frame(&surface);
    log::info!("{} touch log:\n{}", name, surface.log());
}

fn log_frame(surface: &TouchSurface<BezierTrail>) {
    let segments = surface
        .consumer()
        .and_then(|trail| trail.path())
        .map_or(0, |path| path.segments().len());
    log::info!(
        "{} z={:.1} bezier segments={}",
        surface.state(),
        surface.elevation(),
        segments,
    );
}

fn replay_shuffle(events: &[PointerEvent]) {
    log::info!("=== shuffle ===");
    let resting = Rect::new(Point2::new(100.0, 100.0), Point2::new(400.0, 500.0));
    let mut deck = ShuffleDeck::new(resting, 12.0, Elevations::default());

    let mut now = Duration::ZERO;
    for event in events {
        now = event.time;
        deck.on_pointer_event(event);
        deck.advance(now);
    }
    while !deck.advance(now) {
        now += FRAME_DURATION;
    }
    for &id in &[CardId::A, CardId::B] {
        let pos = deck.card_position(id);
        log::info!(
            "card {:?} at ({}, {}) z={}",
            id,
            pos.x,
            pos.y,
            deck.card_elevation(id),
        );
    }
    log::info!("{:?} is on top", deck.top());
}
