//! User notifications.
//!
//! A fire-and-forget sink for short transient messages (tray balloons on
//! Windows). Message texts live here so every platform shows the same words.

use std::time::Duration;

use crate::model::{ArrowState, Point};

/// Shows a transient message to the user.
pub trait Notifier {
    fn notify(&mut self, title: &str, body: &str, timeout: Duration);

    /// Update the persistent status line (tray tooltip). Optional.
    fn set_status(&mut self, _status: &str) {}
}

/// Body shown after the arrow parks.
pub const PARKED_MESSAGE: &str = "Arrow parked at position";

/// Body shown after a Ctrl+click unparks the arrow.
pub const UNPARKED_MESSAGE: &str = "Arrow unparked - now responds to clicks";

/// Body shown once when the global mouse hook could not be installed.
pub const INPUT_UNAVAILABLE_MESSAGE: &str =
    "Click-to-move is unavailable: the global mouse hook could not be installed";

/// Usage instructions shown from the tray menu.
pub const INSTRUCTIONS: &str = "How to use You Are Here:\n\n\
    \u{2022} Left Click: Move arrow to clicked position\n\
    \u{2022} Ctrl + Left Click: Move arrow and park it\n\
    \u{2022} Ctrl + Left Click (when parked): Unpark arrow\n\n\
    Perfect for live broadcasting and presentations!";

/// Status report shown on a tray primary click.
pub fn status_message(state: ArrowState, position: Point, speed: f64) -> String {
    format!(
        "Status: {}\nPosition: ({:.0}, {:.0})\nSpeed: {:.1}x",
        state, position.x, position.y, speed
    )
}

/// Tray tooltip for the given state.
pub fn tooltip_text(state: ArrowState) -> String {
    format!("You Are Here - Pointer Tool ({})", state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_rounds_position_and_speed() {
        let msg = status_message(ArrowState::Parked, Point::new(500.4, 99.6), 1.5);
        assert_eq!(msg, "Status: Parked\nPosition: (500, 100)\nSpeed: 1.5x");
    }

    #[test]
    fn tooltip_names_state() {
        assert_eq!(tooltip_text(ArrowState::Ready), "You Are Here - Pointer Tool (Ready)");
    }

    #[test]
    fn instructions_mention_every_gesture() {
        assert!(INSTRUCTIONS.contains("Left Click"));
        assert!(INSTRUCTIONS.contains("Ctrl + Left Click"));
        assert!(INSTRUCTIONS.contains("when parked"));
    }
}
