//! Arrow motion: duration/easing curves and the animation controller.

pub mod controller;
pub mod easing;

pub use controller::{AnimationRun, MotionController, MoveCompleted};
pub use easing::{ease_out_cubic, move_duration};
