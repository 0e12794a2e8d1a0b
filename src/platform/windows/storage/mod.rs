//! Per-user persistence on Windows beyond the settings file.

mod autostart;

pub use autostart::apply_autostart;
