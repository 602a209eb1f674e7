//! Touch gesture tracking and path interpolation for touch-driven motion
//! effects: bezier trails around the touch slop, elastic drags, settle-back
//! animations, anchor snapping, and card shuffling.
//!
//! Nothing here draws. A host feeds [`input::PointerEvent`]s into a
//! [`surface::TouchSurface`], calls `advance()` once per frame, and renders
//! whatever geometry its [`TouchStateConsumer`] computed.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

pub mod animation;
pub mod consumer;
pub mod geometry;
pub mod input;
pub mod processor;
pub mod shuffle;
pub mod surface;
mod touch_state;

pub use consumer::TouchStateConsumer;
pub use input::{PointerEvent, TouchPhase};
pub use processor::TouchProcessor;
pub use surface::{SurfaceConfig, TouchSurface};
pub use touch_state::TouchState;
