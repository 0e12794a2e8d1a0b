//! Windows implementation using Win32 and Direct2D.
//!
//! - Input: low-level mouse hook behind `GlobalInputMonitor`
//! - UI: layered click-through overlay, tray icon, instructions dialog
//! - Storage: autostart registration

pub mod input;
pub mod storage;
pub mod ui;
