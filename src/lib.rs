//! Click-driven arrow pointer overlay.
//!
//! The core (arrow state machine, motion, settings, event bus, coordinator)
//! is plain Rust and tested on any OS. The Win32 overlay, mouse hook and tray
//! live in `platform::windows`.

pub mod app;
pub mod arrow;
pub mod error;
pub mod events;
pub mod handlers;
pub mod input;
pub mod logging;
pub mod model;
pub mod motion;
pub mod notify;
pub mod overlay;
pub mod settings;

#[cfg(target_os = "windows")]
pub mod platform;

// Re-export the types most callers need
pub use app::PointerApp;
pub use error::{PointerError, Result};
pub use events::{AppEvent, EventBus, EventPublisher};
pub use model::{ArrowState, Point, Settings, VirtualScreen};

/// Clamp a value to [lo, hi]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` into normalised floats [0..1].
pub fn parse_hex_color(s: &str) -> Option<(f64, f64, f64, f64)> {
    let t = s.trim();
    let hex = t.strip_prefix('#').unwrap_or(t);
    if !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .ok()
            .map(|v| v as f64 / 255.0)
    };
    match hex.len() {
        6 => Some((channel(0)?, channel(2)?, channel(4)?, 1.0)),
        8 => Some((channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
    }

    #[test]
    fn parse_hex_color_forms() {
        assert_eq!(parse_hex_color("#FF0000"), Some((1.0, 0.0, 0.0, 1.0)));
        assert_eq!(parse_hex_color(" 00ff0000 "), Some((0.0, 1.0, 0.0, 0.0)));
        assert_eq!(parse_hex_color("#F00"), None);
        assert_eq!(parse_hex_color("#GG0000"), None);
        assert_eq!(parse_hex_color("#\u{e9}\u{e9}\u{e9}"), None);
    }
}
