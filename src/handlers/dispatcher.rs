//! Event dispatcher for handling application events.
//!
//! Called from the UI-thread timer with everything drained from the bus.
//! Coordinator events are applied directly; dialogs and quitting are handed
//! back to the caller, which owns the platform side of both.
//!
//! ```text
//! EventBus::drain() → dispatch_events() → PointerApp / ShellRequest
//! ```

use std::time::Instant;

use tracing::trace;

use crate::app::PointerApp;
use crate::events::AppEvent;
use crate::notify::Notifier;
use crate::overlay::OverlayRenderer;

/// Work the platform shell must do after dispatching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellRequest {
    ShowInstructions,
    Exit,
}

/// Apply a batch of events in order, then advance the animation once.
pub fn dispatch_events<R, N>(
    events: Vec<AppEvent>,
    app: &mut PointerApp<R, N>,
    now: Instant,
) -> Vec<ShellRequest>
where
    R: OverlayRenderer,
    N: Notifier,
{
    let mut requests = Vec::new();
    for event in events {
        trace!(event = event.description(), "dispatching");
        if let Some(request) = dispatch_single_event(event, app, now) {
            requests.push(request);
        }
    }
    app.tick(now);
    requests
}

fn dispatch_single_event<R, N>(
    event: AppEvent,
    app: &mut PointerApp<R, N>,
    now: Instant,
) -> Option<ShellRequest>
where
    R: OverlayRenderer,
    N: Notifier,
{
    match event {
        AppEvent::Click(click) => {
            app.handle_click(click, now);
            None
        }
        AppEvent::ResetToCenter => {
            app.reset_to_center(now);
            None
        }
        AppEvent::ShowStatus => {
            app.show_status();
            None
        }
        AppEvent::ShowInstructions => Some(ShellRequest::ShowInstructions),
        AppEvent::Exit => Some(ShellRequest::Exit),
    }
}
