//! User settings (pure Rust, no FFI).
//!
//! This module defines the persisted settings record. Field names on disk
//! are PascalCase (`AnimationSpeed`, `ArrowSize`, `AutoStartEnabled`,
//! `ArrowColor`) and every field falls back to its default when missing.

use serde::{Deserialize, Serialize};

use super::constants::*;
use crate::{clamp, parse_hex_color};

/// Complete settings record, serializable to/from the settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Settings {
    /// Animation speed multiplier (> 0). 2.0 moves twice as fast.
    pub animation_speed: f64,
    /// Arrow size multiplier applied to the base arrow geometry.
    pub arrow_size: f64,
    /// Start the tool when the user logs in.
    pub auto_start_enabled: bool,
    /// Arrow fill color as `#RRGGBB` or `#RRGGBBAA`.
    pub arrow_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            animation_speed: DEFAULT_ANIMATION_SPEED,
            arrow_size: DEFAULT_ARROW_SIZE,
            auto_start_enabled: DEFAULT_AUTO_START,
            arrow_color: DEFAULT_ARROW_COLOR.to_string(),
        }
    }
}

impl Settings {
    /// Validates and clamps all values to valid ranges.
    ///
    /// Non-finite multipliers are replaced by their defaults, and an
    /// unparseable color is replaced by the default red.
    pub fn validate(&mut self) {
        self.animation_speed = if self.animation_speed.is_finite() {
            clamp(self.animation_speed, MIN_ANIMATION_SPEED, MAX_ANIMATION_SPEED)
        } else {
            DEFAULT_ANIMATION_SPEED
        };
        self.arrow_size = if self.arrow_size.is_finite() {
            clamp(self.arrow_size, MIN_ARROW_SIZE, MAX_ARROW_SIZE)
        } else {
            DEFAULT_ARROW_SIZE
        };
        if parse_hex_color(&self.arrow_color).is_none() {
            self.arrow_color = DEFAULT_ARROW_COLOR.to_string();
        }
    }

    /// Returns the arrow color as normalised (r, g, b, a).
    pub fn arrow_rgba(&self) -> (f64, f64, f64, f64) {
        parse_hex_color(&self.arrow_color).unwrap_or(DEFAULT_ARROW_RGBA)
    }
}
