//! Input handling for Windows (global mouse hook).

pub mod mouse_hook;

pub use mouse_hook::LowLevelMouseMonitor;
