//! Configuration constants and default values.
//!
//! This module contains all application constants including animation
//! tuning, arrow geometry, per-state opacities, settings defaults and
//! validation limits.

use std::time::Duration;

// === Animation ===

/// Base arrow speed in pixels per second (before the speed multiplier).
pub const BASE_ANIMATION_SPEED: f64 = 800.0;

/// Shortest allowed move, in seconds.
pub const MIN_ANIMATION_DURATION: f64 = 0.2;

/// Longest allowed move, in seconds.
pub const MAX_ANIMATION_DURATION: f64 = 2.0;

/// Render tick interval in milliseconds (~60 FPS).
pub const TICK_INTERVAL_MS: u32 = 16;

/// Render tick interval as a `Duration`.
pub const TICK_INTERVAL: Duration = Duration::from_millis(TICK_INTERVAL_MS as u64);

// === Arrow Geometry ===

/// Arrow bounding box width at size multiplier 1.0.
pub const ARROW_WIDTH: f64 = 40.0;

/// Arrow bounding box height at size multiplier 1.0.
pub const ARROW_HEIGHT: f64 = 30.0;

/// Arrow outline stroke width in pixels.
pub const ARROW_STROKE_WIDTH: f64 = 2.0;

/// Stroke color is the fill color scaled by this factor (200/255).
pub const ARROW_STROKE_SHADE: f64 = 200.0 / 255.0;

/// Drop shadow offset in pixels (down-right).
pub const SHADOW_OFFSET: f64 = 3.0;

/// Drop shadow opacity.
pub const SHADOW_OPACITY: f64 = 0.3;

// === Appearance ===

/// Arrow opacity while Ready.
pub const READY_OPACITY: f64 = 0.8;

/// Arrow opacity while Moving.
pub const MOVING_OPACITY: f64 = 0.9;

/// Arrow opacity while Parked (pulse starting value).
pub const PARKED_OPACITY: f64 = 1.0;

/// Lowest opacity reached by the parked pulse.
pub const PULSE_MIN_OPACITY: f64 = 0.6;

/// Duration of one pulse half-cycle (1.0 -> 0.6), in seconds.
pub const PULSE_HALF_CYCLE: f64 = 1.0;

// === Settings Defaults ===

/// Default animation speed multiplier.
pub const DEFAULT_ANIMATION_SPEED: f64 = 1.0;

/// Default arrow size multiplier.
pub const DEFAULT_ARROW_SIZE: f64 = 1.0;

/// Default arrow color - opaque red.
pub const DEFAULT_ARROW_COLOR: &str = "#FF0000";

/// Default arrow color as normalised RGBA.
pub const DEFAULT_ARROW_RGBA: (f64, f64, f64, f64) = (1.0, 0.0, 0.0, 1.0);

/// Autostart is off unless the user opts in.
pub const DEFAULT_AUTO_START: bool = false;

// === Validation Limits ===

/// Minimum animation speed multiplier.
pub const MIN_ANIMATION_SPEED: f64 = 0.1;

/// Maximum animation speed multiplier.
pub const MAX_ANIMATION_SPEED: f64 = 10.0;

/// Minimum arrow size multiplier.
pub const MIN_ARROW_SIZE: f64 = 0.25;

/// Maximum arrow size multiplier.
pub const MAX_ARROW_SIZE: f64 = 5.0;

// === Storage ===

/// Directory name under the per-user config directory.
pub const APP_DIR_NAME: &str = "YouAreHere";

/// Settings file name.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

// === Notifications ===

/// Title used for every user notification.
pub const NOTIFY_TITLE: &str = "You Are Here";

/// Auto-dismiss for park/unpark acknowledgements.
pub const NOTIFY_SHORT: Duration = Duration::from_millis(2000);

/// Auto-dismiss for the status report.
pub const NOTIFY_STATUS: Duration = Duration::from_millis(3000);
