use cgmath::Point2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

use touch_motion::animation::SettleAnimator;
use touch_motion::consumer::RecordingConsumer;
use touch_motion::geometry::{distance, point_at_percent, Path};
use touch_motion::processor::{AnchorSnapTracker, PlainTracker, RadiusTensionTracker, TensionTracker};
use touch_motion::{PointerEvent, SurfaceConfig, TouchProcessor, TouchState, TouchSurface};

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn run(processor: impl Into<TouchProcessor>, events: &[PointerEvent]) -> TouchState {
    let mut processor = processor.into();
    let mut state = TouchState::new();
    for event in events {
        processor.process(event, &mut state);
    }
    state
}

#[test]
fn plain_down_move_up() {
    let down = PointerEvent::down(10.0, 10.0, ms(0));
    let moved = PointerEvent::moved(10.0, 110.0, ms(16));

    let state = run(PlainTracker, &[down, moved]);
    assert_eq!(state.distance, 100.0);

    let state = run(PlainTracker, &[down, moved, PointerEvent::up(10.0, 110.0, ms(32))]);
    assert_eq!(state.distance, -1.0);
    assert_eq!(state, TouchState::new());
}

#[test]
fn tension_extremes() {
    let events = [
        PointerEvent::down(10.0, 10.0, ms(0)),
        PointerEvent::moved(70.0, 90.0, ms(16)),
    ];
    let loose = run(TensionTracker::new(0.0), &events);
    assert_eq!(loose.current(), Some(Point2::new(70.0, 90.0)));

    let tight = run(TensionTracker::new(1.0), &events);
    assert_eq!(tight.current(), tight.down());
    assert_eq!(tight.distance, 0.0);
}

#[test]
fn radius_tension_is_monotonic_and_bounded() {
    let tracker = RadiusTensionTracker::default();
    let mut rng = StdRng::seed_from_u64(0x70c4);
    let mut raws: Vec<f32> = (0..500).map(|_| rng.gen_range(0.0..2000.0)).collect();
    raws.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let outputs: Vec<f32> = raws.iter().map(|&r| tracker.interpolate_distance(r)).collect();
    for pair in outputs.windows(2) {
        assert!(pair[0] <= pair[1], "{} > {}", pair[0], pair[1]);
    }
    for &out in &outputs {
        assert!(out <= tracker.outer_radius());
    }

    // Same thing through the processor, along a random direction.
    let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
    let mut last = 0.0;
    for &raw in &raws {
        let state = run(
            tracker,
            &[
                PointerEvent::down(0.0, 0.0, ms(0)),
                PointerEvent::moved(raw * angle.cos(), raw * angle.sin(), ms(16)),
            ],
        );
        assert!(state.distance <= tracker.outer_radius() + 1e-2);
        assert!(state.distance + 1e-2 >= last);
        last = state.distance;
    }
}

#[test]
fn anchor_snap_only_within_horizon() {
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(100.0, 100.0);

    let mut near: TouchProcessor = AnchorSnapTracker::new(a, b).with_event_horizon(10.0).into();
    let mut state = TouchState::new();
    near.process(&PointerEvent::down(4.0, 4.0, ms(0)), &mut state);
    assert!(near.is_animating());

    let mut consumer = RecordingConsumer::default();
    let mut now = ms(0);
    while !near.advance(now, &mut state, &mut consumer) {
        now += ms(16);
    }
    assert_eq!(state.down(), Some(a));

    let mut far: TouchProcessor = AnchorSnapTracker::new(a, b).with_event_horizon(10.0).into();
    let mut state = TouchState::new();
    far.process(&PointerEvent::down(50.0, 50.0, ms(0)), &mut state);
    assert!(!far.is_animating());
}

#[test]
fn settle_start_then_cancel() {
    let mut state = TouchState::new();
    state.set_down(Point2::new(0.0, 0.0));
    state.set_current(Point2::new(0.0, 100.0));
    state.distance = 100.0;

    let mut settle = SettleAnimator::default();
    assert!(settle.start(&state, ms(0)));
    let mut consumer = RecordingConsumer::default();
    assert!(!settle.advance(ms(150), &mut state, &mut consumer));
    assert!(state.distance < 100.0 && state.distance > 0.0);

    assert!(settle.cancel(&mut state, &mut consumer));
    assert!(state.is_idle());
    let notified = consumer.states.len();
    assert!(settle.advance(ms(200), &mut state, &mut consumer));
    assert!(settle.advance(ms(400), &mut state, &mut consumer));
    assert_eq!(consumer.states.len(), notified);
    assert!(!settle.cancel(&mut state, &mut consumer));
}

#[test]
fn point_at_percent_is_clamped() {
    let line = Path::line(Point2::new(0.0, 0.0), Point2::new(30.0, 40.0));
    let total = distance(0.0, 0.0, 30.0, 40.0);
    assert_eq!(total, 50.0);
    assert_eq!(point_at_percent(&line, total, -1.0), Some(Point2::new(0.0, 0.0)));
    assert_eq!(point_at_percent(&line, total, 2.0), Some(Point2::new(30.0, 40.0)));
    assert_eq!(point_at_percent(&Path::new(), total, 0.5), None);
}

#[test]
fn surface_logs_forwarded_events() {
    let mut surface = TouchSurface::new(PlainTracker, SurfaceConfig::default());
    surface.attach_consumer(RecordingConsumer::default());
    surface.on_pointer_event(&PointerEvent::down(0.0, 0.0, ms(0)));
    surface.on_pointer_event(&PointerEvent::moved(0.0, 5.0, ms(16)));
    surface.on_pointer_event(&PointerEvent::moved(0.0, 50.0, ms(32)));
    surface.on_pointer_event(&PointerEvent::moved(0.0, 60.0, ms(48)));
    surface.on_pointer_event(&PointerEvent::cancel(0.0, 60.0, ms(64)));
    assert_eq!(
        surface.log().to_string(),
        "ACTION_DOWN (0, 0)\nACTION_MOVE (0, 60)\nACTION_CANCEL (0, 60)"
    );
}

#[test]
#[should_panic(expected = "no touch state consumer")]
fn surface_without_consumer_panics() {
    let mut surface: TouchSurface<RecordingConsumer> =
        TouchSurface::new(PlainTracker, SurfaceConfig::default());
    surface.advance(ms(0));
}
