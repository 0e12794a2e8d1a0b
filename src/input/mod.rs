//! Global input capture.
//!
//! [`GlobalInputMonitor`] hides the OS hook behind `start(on_click)` /
//! `stop()`. The Win32 low-level mouse hook implementation lives in
//! `platform::windows::input`.

pub mod monitor;

pub use monitor::{ClickEvent, ClickHandler, GlobalInputMonitor};
