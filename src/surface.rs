//! A touchable surface: one touch state, one processor, and everything that
//! reacts to them.

use std::time::Duration;

use crate::animation::{Easing, SettleAnimator};
use crate::input::{Elevator, PointerEvent, TouchLog, TouchPhase, TouchSlop, DEFAULT_TOUCH_SLOP};
use crate::processor::TouchProcessor;
use crate::{TouchState, TouchStateConsumer};

/// Extra slop, in pixels, on top of the platform default.
pub const EXTRA_TOUCH_SLOP: f32 = 10.0;
/// Duration of the settle preset.
pub const SURFACE_SETTLE_DURATION: Duration = Duration::from_millis(150);
/// Easing of the settle preset.
pub const SURFACE_SETTLE_EASING: Easing = Easing::Accelerate(0.5);

/// Settings for a [`TouchSurface`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceConfig {
    /// Moves within this slop of the down point are not logged.
    pub touch_slop: TouchSlop,
    /// Whether a released touch settles back to its down point.
    pub settle: bool,
    /// Duration of a settle.
    pub settle_duration: Duration,
    /// Easing of a settle.
    pub settle_easing: Easing,
}
impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            touch_slop: TouchSlop::new(DEFAULT_TOUCH_SLOP + EXTRA_TOUCH_SLOP),
            settle: false,
            settle_duration: SURFACE_SETTLE_DURATION,
            settle_easing: SURFACE_SETTLE_EASING,
        }
    }
}
impl SurfaceConfig {
    /// Returns the config with settling turned on.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn with_settle(mut self) -> Self {
        self.settle = true;
        self
    }
}

/// Receives pointer events, runs them through a processor, and hands the
/// resulting touch state to a consumer.
#[derive(Debug)]
pub struct TouchSurface<C> {
    state: TouchState,
    processor: TouchProcessor,
    settle: Option<SettleAnimator>,
    elevator: Elevator,
    touch_slop: TouchSlop,
    log: TouchLog,

    consumer: Option<C>,
}
impl<C: TouchStateConsumer> TouchSurface<C> {
    /// Returns a surface with no consumer attached.
    pub fn new(processor: impl Into<TouchProcessor>, config: SurfaceConfig) -> Self {
        let settle = if config.settle {
            Some(SettleAnimator::new(config.settle_duration, config.settle_easing))
        } else {
            None
        };
        Self {
            state: TouchState::new(),
            processor: processor.into(),
            settle,
            elevator: Elevator::new(),
            touch_slop: config.touch_slop,
            log: TouchLog::new(),

            consumer: None,
        }
    }

    /// Attaches a consumer, returning the previous one.
    pub fn attach_consumer(&mut self, consumer: C) -> Option<C> {
        self.consumer.replace(consumer)
    }
    /// Returns the attached consumer.
    pub fn consumer(&self) -> Option<&C> {
        self.consumer.as_ref()
    }
    /// Returns the attached consumer mutably.
    pub fn consumer_mut(&mut self) -> Option<&mut C> {
        self.consumer.as_mut()
    }

    /// Returns the touch state.
    pub fn state(&self) -> &TouchState {
        &self.state
    }
    /// Returns the processor.
    pub fn processor(&self) -> &TouchProcessor {
        &self.processor
    }
    /// Returns the processor mutably, for retuning it.
    pub fn processor_mut(&mut self) -> &mut TouchProcessor {
        &mut self.processor
    }
    /// Returns the settle animator, if settling is on.
    pub fn settle_mut(&mut self) -> Option<&mut SettleAnimator> {
        self.settle.as_mut()
    }
    /// Returns the elevation as of the last call to
    /// [`TouchSurface::advance()`].
    pub fn elevation(&self) -> f32 {
        self.elevator.z()
    }
    /// Returns the touch slop.
    pub fn touch_slop(&self) -> TouchSlop {
        self.touch_slop
    }
    /// Sets the touch slop from a slider size (see [`TouchSlop::set_size()`]).
    pub fn set_touch_slop_size(&mut self, size: i32) {
        self.touch_slop.set_size(size);
    }
    /// Returns the history of logged events.
    pub fn log(&self) -> &TouchLog {
        &self.log
    }

    /// Handles one pointer event.
    ///
    /// Returns `true` if the event was logged: downs and gesture ends always
    /// are, moves only once the distance exceeds the touch slop.
    ///
    /// # Panics
    ///
    /// This method panics if no consumer is attached.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        let consumer = self
            .consumer
            .as_mut()
            .expect("touch surface has no touch state consumer attached");

        self.elevator.observe(event);
        if let Some(settle) = &mut self.settle {
            if event.phase == TouchPhase::Up {
                settle.start(&self.state, event.time);
            } else {
                settle.cancel(&mut self.state, consumer);
            }
        }
        self.processor.process(event, &mut self.state);
        consumer.draw_touch_state(&self.state);

        let touch_slop = self.touch_slop;
        let forward = match event.phase {
            TouchPhase::Move => self.state.distance().map_or(false, |d| touch_slop.exceeded(d)),
            TouchPhase::Down | TouchPhase::Up | TouchPhase::Cancel => true,
        };
        if forward {
            self.log.record(event);
        }
        forward
    }

    /// Advances every animation on the surface to time `now`.
    ///
    /// Returns `true` if nothing is left running.
    ///
    /// # Panics
    ///
    /// This method panics if no consumer is attached.
    pub fn advance(&mut self, now: Duration) -> bool {
        let consumer = self
            .consumer
            .as_mut()
            .expect("touch surface has no touch state consumer attached");

        let mut at_rest = true;
        if let Some(settle) = &mut self.settle {
            at_rest &= settle.advance(now, &mut self.state, consumer);
        }
        at_rest &= self.processor.advance(now, &mut self.state, consumer);
        at_rest &= self.elevator.advance(now);
        at_rest
    }
}
