//! Overlay renderer seam.
//!
//! The animation and state core only talks to the overlay window through
//! [`OverlayRenderer`], so it can be driven by a fake in tests.

use crate::model::constants::{MOVING_OPACITY, PARKED_OPACITY, READY_OPACITY};
use crate::model::{ArrowState, Point};

/// Draws the arrow on the click-through overlay window.
pub trait OverlayRenderer {
    /// Place the arrow centre at `position` (absolute screen coordinates),
    /// rotated by `rotation` radians, at the given base opacity.
    fn set_arrow_transform(&mut self, position: Point, rotation: f64, opacity: f64);

    /// Start the parked pulse. Overrides the base opacity until stopped.
    fn start_pulsing(&mut self);

    /// Cancel the parked pulse, if running.
    fn stop_pulsing(&mut self);
}

/// How the arrow looks in a given state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub opacity: f64,
    pub pulsing: bool,
}

impl Appearance {
    pub fn for_state(state: ArrowState) -> Self {
        match state {
            ArrowState::Ready => Self {
                opacity: READY_OPACITY,
                pulsing: false,
            },
            ArrowState::Moving => Self {
                opacity: MOVING_OPACITY,
                pulsing: false,
            },
            ArrowState::Parked => Self {
                opacity: PARKED_OPACITY,
                pulsing: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_rises_with_state() {
        assert_eq!(Appearance::for_state(ArrowState::Ready).opacity, 0.8);
        assert_eq!(Appearance::for_state(ArrowState::Moving).opacity, 0.9);
        assert_eq!(Appearance::for_state(ArrowState::Parked).opacity, 1.0);
    }

    #[test]
    fn only_parked_pulses() {
        assert!(!Appearance::for_state(ArrowState::Ready).pulsing);
        assert!(!Appearance::for_state(ArrowState::Moving).pulsing);
        assert!(Appearance::for_state(ArrowState::Parked).pulsing);
    }
}
