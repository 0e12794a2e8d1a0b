//! Application coordinator.
//!
//! [`PointerApp`] glues the arrow state machine and motion controller to the
//! overlay renderer and notifier. Platform entry points own one instance and
//! feed it clicks, menu actions and timer ticks.

pub mod pointer;

pub use pointer::PointerApp;
