//! Application events for inter-module communication.
//!
//! These events are published by the mouse hook and the tray menu and
//! handled on the UI thread by the dispatcher. Pure Rust, fully testable.

use crate::input::ClickEvent;

/// Application-level events.
///
/// Events flow from producers (mouse hook, tray menu) through the EventBus
/// to the dispatcher, which drives the pointer coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    // === Input Events ===
    /// Global left click, with the Ctrl state sampled in the hook.
    Click(ClickEvent),

    // === Tray Menu Events ===
    /// Unpark if needed and move back to the middle of the virtual screen.
    ResetToCenter,

    /// Show the usage instructions dialog.
    ShowInstructions,

    /// Show the status report (tray primary click).
    ShowStatus,

    /// Quit the application.
    Exit,
}

impl AppEvent {
    /// Returns a human-readable description of the event for logging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::Click(_) => "Global left click",
            AppEvent::ResetToCenter => "Reset arrow to center",
            AppEvent::ShowInstructions => "Show instructions",
            AppEvent::ShowStatus => "Show status",
            AppEvent::Exit => "Exit application",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;

    #[test]
    fn test_click_carries_data() {
        let click = ClickEvent {
            position: Point::new(12.0, 34.0),
            modifier_held: true,
        };
        match AppEvent::Click(click) {
            AppEvent::Click(c) => {
                assert_eq!(c.position, Point::new(12.0, 34.0));
                assert!(c.modifier_held);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_all_events_have_descriptions() {
        let events = [
            AppEvent::Click(ClickEvent {
                position: Point::default(),
                modifier_held: false,
            }),
            AppEvent::ResetToCenter,
            AppEvent::ShowInstructions,
            AppEvent::ShowStatus,
            AppEvent::Exit,
        ];

        for event in events {
            assert!(!event.description().is_empty());
        }
    }
}
