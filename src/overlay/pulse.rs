//! Parked-state opacity pulse.
//!
//! Linear oscillation from [`PARKED_OPACITY`] down to [`PULSE_MIN_OPACITY`]
//! over one half-cycle, then back, forever.

use std::time::Instant;

use crate::model::constants::{PARKED_OPACITY, PULSE_HALF_CYCLE, PULSE_MIN_OPACITY};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    started_at: Instant,
}

impl Pulse {
    pub fn start(now: Instant) -> Self {
        Self { started_at: now }
    }

    /// Opacity at `now`. Starts at 1.0, reaches 0.6 after one half-cycle.
    pub fn opacity_at(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started_at).as_secs_f64();
        let phase = (elapsed / PULSE_HALF_CYCLE) % 2.0;
        let t = if phase <= 1.0 { phase } else { 2.0 - phase };
        PARKED_OPACITY + (PULSE_MIN_OPACITY - PARKED_OPACITY) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn pulse_cycles_between_full_and_min_opacity() {
        let t0 = Instant::now();
        let pulse = Pulse::start(t0);
        assert!(approx(pulse.opacity_at(t0), 1.0));
        assert!(approx(pulse.opacity_at(t0 + Duration::from_millis(500)), 0.8));
        assert!(approx(pulse.opacity_at(t0 + Duration::from_secs(1)), 0.6));
        assert!(approx(pulse.opacity_at(t0 + Duration::from_millis(1500)), 0.8));
        assert!(approx(pulse.opacity_at(t0 + Duration::from_secs(2)), 1.0));
    }

    #[test]
    fn pulse_repeats_forever() {
        let t0 = Instant::now();
        let pulse = Pulse::start(t0);
        let later = t0 + Duration::from_secs(3600) + Duration::from_millis(250);
        assert!(approx(pulse.opacity_at(later), 0.9));
    }

    #[test]
    fn pulse_stays_in_range() {
        let t0 = Instant::now();
        let pulse = Pulse::start(t0);
        for ms in (0..5000).step_by(13) {
            let o = pulse.opacity_at(t0 + Duration::from_millis(ms));
            assert!((PULSE_MIN_OPACITY - 1e-12..=PARKED_OPACITY + 1e-12).contains(&o));
        }
    }
}
