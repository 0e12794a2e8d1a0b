//! Thread-safe event bus using mpsc channels.
//!
//! Producers (the mouse hook sink, the tray window procedure) hold an
//! [`EventPublisher`]; the UI-thread timer drains the [`EventBus`]. The hook
//! callback only publishes and never touches arrow state.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::AppEvent;

/// Queue of pending [`AppEvent`]s, consumed on the UI thread.
///
/// # Example
///
/// ```
/// use you_are_here::events::{AppEvent, EventBus};
///
/// let bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(AppEvent::ResetToCenter);
///
/// let events = bus.drain();
/// assert_eq!(events.len(), 1);
/// ```
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle that can be cloned and sent to other threads.
    ///
    /// Publishers are cheap to clone and thread-safe. The mouse hook sink and
    /// the tray window each hold their own.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Next pending event, without blocking.
    pub fn try_recv(&self) -> Option<AppEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) => None,
            // The bus holds its own sender, so this only happens mid-drop.
            Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Take every pending event, oldest first.
    pub fn drain(&self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending half of the bus. Clone freely.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    /// Queue an event. Never blocks, safe to call from the hook callback.
    pub fn publish(&self, event: AppEvent) {
        // A closed bus means we are shutting down.
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ClickEvent;
    use crate::model::Point;

    fn click(x: f64, y: f64, modifier_held: bool) -> AppEvent {
        AppEvent::Click(ClickEvent {
            position: Point::new(x, y),
            modifier_held,
        })
    }

    #[test]
    fn test_create_bus() {
        let bus = EventBus::new();
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_publish_and_receive_in_order() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(click(1.0, 2.0, false));
        publisher.publish(AppEvent::ResetToCenter);
        publisher.publish(AppEvent::Exit);

        let events = bus.drain();
        assert_eq!(
            events,
            vec![click(1.0, 2.0, false), AppEvent::ResetToCenter, AppEvent::Exit]
        );
    }

    #[test]
    fn test_drain_empties_queue() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::ShowStatus);
        publisher.publish(AppEvent::ShowInstructions);

        assert_eq!(bus.drain().len(), 2);
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_publish_from_other_thread() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        std::thread::spawn(move || {
            publisher.publish(click(5.0, 6.0, true));
        })
        .join()
        .unwrap();

        assert_eq!(bus.try_recv(), Some(click(5.0, 6.0, true)));
        assert_eq!(bus.try_recv(), None);
    }

    #[test]
    fn test_publish_after_bus_dropped_is_silent() {
        let bus = EventBus::new();
        let publisher = bus.publisher();
        drop(bus);
        publisher.publish(AppEvent::Exit);
    }

    #[test]
    fn test_default_creates_new_bus() {
        let bus = EventBus::default();
        bus.publisher().publish(AppEvent::ResetToCenter);
        assert_eq!(bus.drain().len(), 1);
    }
}
