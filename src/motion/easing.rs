//! Easing and duration curves for arrow moves.

use crate::clamp;
use crate::model::constants::{BASE_ANIMATION_SPEED, MAX_ANIMATION_DURATION, MIN_ANIMATION_DURATION};

/// Cubic ease-out: `1 - (1 - p)^3`.
///
/// Input is clamped to [0, 1], so the result is always in [0, 1].
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = clamp(progress, 0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Duration in seconds of a move covering `distance` pixels.
///
/// `distance / (BASE_ANIMATION_SPEED * speed_multiplier)`, clamped to
/// [`MIN_ANIMATION_DURATION`], [`MAX_ANIMATION_DURATION`].
pub fn move_duration(distance: f64, speed_multiplier: f64) -> f64 {
    let raw = distance / (BASE_ANIMATION_SPEED * speed_multiplier);
    if raw.is_nan() {
        return MIN_ANIMATION_DURATION;
    }
    clamp(raw, MIN_ANIMATION_DURATION, MAX_ANIMATION_DURATION)
}
