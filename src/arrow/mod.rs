//! The arrow itself: its state machine and its shape.

pub mod shape;
pub mod state_machine;

pub use shape::ArrowShape;
pub use state_machine::{ArrowStateMachine, ClickAction};
