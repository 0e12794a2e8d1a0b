//! Overlay rendering: the renderer seam, per-state appearance and the
//! parked pulse.
//!
//! The Win32 layered-window implementation lives in
//! `platform::windows::ui::overlay`.

pub mod pulse;
pub mod renderer;

pub use pulse::Pulse;
pub use renderer::{Appearance, OverlayRenderer};
