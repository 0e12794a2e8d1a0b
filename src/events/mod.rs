//! Event system: the mouse hook and tray menu talk to the UI thread through
//! an mpsc-backed bus.
//!
//! ```text
//! ┌─────────────┐          ┌─────────────┐
//! │ Mouse hook  │          │  Tray menu  │
//! │ (low-level) │          │ (WM_COMMAND)│
//! └──────┬──────┘          └──────┬──────┘
//!        │ publish()              │ publish()
//!        ▼                        ▼
//! ┌─────────────────────────────────────────┐
//! │                EventBus                 │
//! └────────────────────┬────────────────────┘
//!                      │ drain() every 16 ms
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │        dispatch_events → PointerApp     │
//! └─────────────────────────────────────────┘
//! ```

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use types::AppEvent;
