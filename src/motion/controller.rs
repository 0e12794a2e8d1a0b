//! Animated arrow motion.
//!
//! `MotionController` owns the arrow's position and the in-flight
//! [`AnimationRun`]. It knows nothing about arrow states; completion is
//! reported back to the caller, which feeds it to the state machine.

use std::time::Instant;

use tracing::debug;

use super::easing::{ease_out_cubic, move_duration};
use crate::error::{PointerError, Result};
use crate::model::constants::DEFAULT_ANIMATION_SPEED;
use crate::model::Point;

/// One in-flight move. Exists only while the arrow is Moving.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationRun {
    pub start: Point,
    pub target: Point,
    pub started_at: Instant,
    /// Planned duration in seconds.
    pub duration: f64,
    /// Arrow rotation for this run, radians.
    pub rotation: f64,
    pub park_on_arrival: bool,
}

impl AnimationRun {
    /// Linear progress in [0, 1] at `now`.
    pub fn progress_at(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started_at).as_secs_f64();
        (elapsed / self.duration).clamp(0.0, 1.0)
    }
}

/// Raised by [`MotionController::tick`] on the tick a run finishes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveCompleted {
    pub position: Point,
    pub park_on_arrival: bool,
}

/// Owns the arrow position and animates it toward click targets.
#[derive(Debug, Clone)]
pub struct MotionController {
    position: Point,
    rotation: f64,
    speed_multiplier: f64,
    run: Option<AnimationRun>,
}

impl MotionController {
    /// Create a controller resting at `start`.
    ///
    /// A non-positive or non-finite speed multiplier falls back to 1.0.
    pub fn new(start: Point, speed_multiplier: f64) -> Self {
        let mut controller = Self {
            position: start,
            rotation: 0.0,
            speed_multiplier: DEFAULT_ANIMATION_SPEED,
            run: None,
        };
        controller.set_speed_multiplier(speed_multiplier);
        controller
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Current arrow rotation in radians (0 = pointing right).
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    pub fn set_speed_multiplier(&mut self, multiplier: f64) {
        self.speed_multiplier = if multiplier.is_finite() && multiplier > 0.0 {
            multiplier
        } else {
            DEFAULT_ANIMATION_SPEED
        };
    }

    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    /// The in-flight run, if any.
    pub fn run(&self) -> Option<&AnimationRun> {
        self.run.as_ref()
    }

    /// Drop the in-flight run, leaving the arrow where the last tick put it.
    pub fn cancel(&mut self) -> Option<AnimationRun> {
        self.run.take()
    }

    /// Start animating toward `target`.
    ///
    /// Targets outside the virtual screen are accepted as-is. Non-finite
    /// targets are rejected and leave the controller untouched, as does a
    /// call while another run is in flight.
    pub fn begin_move(
        &mut self,
        target: Point,
        park_on_arrival: bool,
        now: Instant,
    ) -> Result<&AnimationRun> {
        if !target.is_finite() {
            return Err(PointerError::InvalidTarget {
                x: target.x,
                y: target.y,
            });
        }
        if self.run.is_some() {
            return Err(PointerError::MoveInProgress);
        }

        let distance = self.position.distance_to(target);
        let duration = move_duration(distance, self.speed_multiplier);
        self.rotation = self.position.angle_to(target);

        debug!(
            from_x = self.position.x,
            from_y = self.position.y,
            to_x = target.x,
            to_y = target.y,
            distance,
            duration,
            park_on_arrival,
            "begin move"
        );

        Ok(&*self.run.insert(AnimationRun {
            start: self.position,
            target,
            started_at: now,
            duration,
            rotation: self.rotation,
            park_on_arrival,
        }))
    }

    /// Advance the animation to `now`.
    ///
    /// Returns `Some` exactly once per run, on the tick it reaches the
    /// target. Ticking with no run in flight does nothing.
    pub fn tick(&mut self, now: Instant) -> Option<MoveCompleted> {
        let run = self.run.as_ref()?;
        let progress = run.progress_at(now);

        if progress >= 1.0 {
            let run = self.run.take()?;
            self.position = run.target;
            return Some(MoveCompleted {
                position: run.target,
                park_on_arrival: run.park_on_arrival,
            });
        }

        self.position = run.start.lerp(run.target, ease_out_cubic(progress));
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    #[test]
    fn non_finite_target_is_rejected() {
        let now = Instant::now();
        let mut motion = MotionController::new(Point::new(5.0, 5.0), 1.0);
        let err = motion
            .begin_move(Point::new(f64::NAN, 0.0), false, now)
            .unwrap_err();
        assert!(matches!(err, PointerError::InvalidTarget { .. }));
        assert!(!motion.is_animating());
        assert_eq!(motion.position(), Point::new(5.0, 5.0));
    }

    #[test]
    fn second_move_during_run_is_rejected() {
        let now = Instant::now();
        let mut motion = MotionController::new(Point::default(), 1.0);
        motion.begin_move(Point::new(100.0, 0.0), false, now).unwrap();
        let err = motion
            .begin_move(Point::new(300.0, 400.0), true, now)
            .unwrap_err();
        assert!(matches!(err, PointerError::MoveInProgress));
        assert_eq!(motion.run().unwrap().target, Point::new(100.0, 0.0));
    }

    #[test]
    fn rotation_points_at_target() {
        let now = Instant::now();
        let mut motion = MotionController::new(Point::default(), 1.0);
        let run = motion.begin_move(Point::new(0.0, 50.0), false, now).unwrap();
        assert!((run.rotation - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn position_is_eased_midway() {
        let now = Instant::now();
        let mut motion = MotionController::new(Point::default(), 1.0);
        // 800 px at 800 px/s: one second.
        motion.begin_move(Point::new(800.0, 0.0), false, now).unwrap();
        assert!(motion.tick(now + secs(0.5)).is_none());
        let expected = 800.0 * (1.0 - 0.5f64.powi(3));
        assert!((motion.position().x - expected).abs() < 1e-9);
        assert_eq!(motion.position().y, 0.0);
    }

    #[test]
    fn tick_before_start_keeps_start_position() {
        let now = Instant::now();
        let mut motion = MotionController::new(Point::new(10.0, 10.0), 1.0);
        motion.begin_move(Point::new(500.0, 10.0), false, now + secs(1.0)).unwrap();
        assert!(motion.tick(now).is_none());
        assert_eq!(motion.position(), Point::new(10.0, 10.0));
    }

    #[test]
    fn completion_is_reported_once() {
        let now = Instant::now();
        let mut motion = MotionController::new(Point::default(), 1.0);
        motion.begin_move(Point::new(10.0, 10.0), true, now).unwrap();
        let done = motion.tick(now + secs(5.0)).unwrap();
        assert!(done.park_on_arrival);
        assert_eq!(done.position, Point::new(10.0, 10.0));
        assert!(motion.tick(now + secs(6.0)).is_none());
    }

    #[test]
    fn huge_finite_span_never_yields_non_finite_position() {
        let now = Instant::now();
        let mut motion = MotionController::new(Point::new(-1e308, 0.0), 1.0);
        let run = motion.begin_move(Point::new(1e308, 0.0), false, now).unwrap();
        assert_eq!(run.duration, 2.0);

        assert!(motion.tick(now).is_none());
        assert_eq!(motion.position(), Point::new(-1e308, 0.0));
        for ms in [100, 500, 1000, 1900] {
            assert!(motion.tick(now + Duration::from_millis(ms)).is_none());
            assert!(motion.position().is_finite(), "at {ms} ms");
        }
        motion.tick(now + secs(2.0)).unwrap();
        assert_eq!(motion.position(), Point::new(1e308, 0.0));
    }

    #[test]
    fn cancel_keeps_last_ticked_position() {
        let now = Instant::now();
        let mut motion = MotionController::new(Point::default(), 1.0);
        motion.begin_move(Point::new(800.0, 0.0), false, now).unwrap();
        motion.tick(now + secs(0.5));
        let reached = motion.position();

        let run = motion.cancel().unwrap();
        assert_eq!(run.target, Point::new(800.0, 0.0));
        assert!(!motion.is_animating());
        assert_eq!(motion.position(), reached);
        assert!(motion.tick(now + secs(5.0)).is_none());
        assert_eq!(motion.position(), reached);
    }

    #[test]
    fn invalid_speed_multiplier_falls_back_to_default() {
        assert_eq!(MotionController::new(Point::default(), 0.0).speed_multiplier(), 1.0);
        assert_eq!(MotionController::new(Point::default(), -3.0).speed_multiplier(), 1.0);
        assert_eq!(
            MotionController::new(Point::default(), f64::NAN).speed_multiplier(),
            1.0
        );
        assert_eq!(MotionController::new(Point::default(), 2.0).speed_multiplier(), 2.0);
    }
}
