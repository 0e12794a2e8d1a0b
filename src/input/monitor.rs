//! Global input monitor seam.

use crate::error::Result;
use crate::model::Point;

/// A left-button press observed anywhere on the desktop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickEvent {
    /// Absolute virtual-screen position of the cursor.
    pub position: Point,
    /// Whether the modifier key (Ctrl) was held at the time of the press.
    pub modifier_held: bool,
}

/// Callback invoked from the OS hook. Must return quickly.
pub type ClickHandler = Box<dyn Fn(ClickEvent)>;

/// A process-wide listener for global left clicks.
///
/// Implementations must stop listening on `stop()` and on drop.
pub trait GlobalInputMonitor {
    /// Register the listener. `on_click` runs on the hook callback, so it
    /// should only enqueue the event.
    fn start(&mut self, on_click: ClickHandler) -> Result<()>;

    /// Unregister the listener. Safe to call when not started.
    fn stop(&mut self);

    fn is_running(&self) -> bool;
}
