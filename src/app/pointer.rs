//! The pointer coordinator.
//!
//! `PointerApp` owns the state machine and the motion controller and drives
//! the renderer and notifier seams. It is only ever touched from the UI
//! thread: clicks arrive through the event bus, time through `tick`.

use std::time::Instant;

use tracing::{debug, info, trace, warn};

use crate::arrow::{ArrowStateMachine, ClickAction};
use crate::error::PointerError;
use crate::input::ClickEvent;
use crate::model::constants::{NOTIFY_SHORT, NOTIFY_STATUS, NOTIFY_TITLE};
use crate::model::{ArrowState, Point, VirtualScreen};
use crate::motion::MotionController;
use crate::notify::{self, Notifier};
use crate::overlay::{Appearance, OverlayRenderer};

pub struct PointerApp<R, N> {
    machine: ArrowStateMachine,
    motion: MotionController,
    screen: VirtualScreen,
    renderer: R,
    notifier: N,
    pulsing: bool,
    input_warning_shown: bool,
}

impl<R: OverlayRenderer, N: Notifier> PointerApp<R, N> {
    /// Create the coordinator with the arrow resting Ready at the centre of
    /// the virtual screen, and draw the first frame.
    pub fn new(screen: VirtualScreen, speed_multiplier: f64, renderer: R, notifier: N) -> Self {
        let mut app = Self {
            machine: ArrowStateMachine::new(),
            motion: MotionController::new(screen.center(), speed_multiplier),
            screen,
            renderer,
            notifier,
            pulsing: false,
            input_warning_shown: false,
        };
        app.sync_appearance();
        app.render();
        app
    }

    pub fn state(&self) -> ArrowState {
        self.machine.state()
    }

    pub fn position(&self) -> Point {
        self.motion.position()
    }

    pub fn rotation(&self) -> f64 {
        self.motion.rotation()
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.motion.speed_multiplier()
    }

    pub fn motion(&self) -> &MotionController {
        &self.motion
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Apply a global left click.
    pub fn handle_click(&mut self, click: ClickEvent, now: Instant) {
        if !click.position.is_finite() {
            warn!(
                x = click.position.x,
                y = click.position.y,
                "dropping click with non-finite position"
            );
            return;
        }

        match self.machine.on_click(click.modifier_held) {
            ClickAction::Move { park_on_arrival } => {
                self.start_move(click.position, park_on_arrival, now);
            }
            ClickAction::Unpark => {
                info!(x = self.position().x, y = self.position().y, "arrow unparked");
                self.notifier
                    .notify(NOTIFY_TITLE, notify::UNPARKED_MESSAGE, NOTIFY_SHORT);
                self.sync_appearance();
            }
            ClickAction::Ignore => {
                trace!(state = %self.state(), "click ignored");
            }
        }
        self.render();
    }

    /// Advance the animation and redraw. Called every 16 ms.
    pub fn tick(&mut self, now: Instant) {
        if let Some(done) = self.motion.tick(now) {
            let state = self.machine.on_move_completed(done.park_on_arrival);
            debug!(x = done.position.x, y = done.position.y, state = %state, "move completed");
            if state == ArrowState::Parked {
                info!(x = done.position.x, y = done.position.y, "arrow parked");
                self.notifier
                    .notify(NOTIFY_TITLE, notify::PARKED_MESSAGE, NOTIFY_SHORT);
            }
            self.sync_appearance();
        }
        self.render();
    }

    /// Unpark if needed and glide to the geometric centre of the virtual
    /// screen.
    ///
    /// Unlike a click, this takes over a move already in flight: the run is
    /// dropped where the last tick left it and a new one starts from there.
    /// Returns `true` when the move to the centre started.
    pub fn reset_to_center(&mut self, now: Instant) -> bool {
        if let Some(run) = self.motion.cancel() {
            self.machine.cancel_move();
            debug!(
                x = run.target.x,
                y = run.target.y,
                "in-flight move replaced by reset to center"
            );
        }
        if self.machine.force_unpark() {
            info!("arrow unparked by reset to center");
        }
        let center = self.screen.center();
        let started = self.machine.begin_programmatic_move() && self.start_move(center, false, now);
        self.sync_appearance();
        self.render();
        started
    }

    /// Current status report text.
    pub fn status_report(&self) -> String {
        notify::status_message(self.state(), self.position(), self.speed_multiplier())
    }

    /// Show the status report as a notification.
    pub fn show_status(&mut self) {
        let report = self.status_report();
        self.notifier.notify(NOTIFY_TITLE, &report, NOTIFY_STATUS);
    }

    /// The global mouse hook could not be installed. The overlay keeps
    /// running without click-to-move; the user is told once.
    pub fn input_unavailable(&mut self, err: &PointerError) {
        warn!(error = %err, "click-to-move unavailable");
        if !self.input_warning_shown {
            self.input_warning_shown = true;
            self.notifier
                .notify(NOTIFY_TITLE, notify::INPUT_UNAVAILABLE_MESSAGE, NOTIFY_STATUS);
        }
    }

    /// Start a run after the state machine has entered Moving. On rejection
    /// the machine is put back to Ready.
    fn start_move(&mut self, target: Point, park_on_arrival: bool, now: Instant) -> bool {
        match self.motion.begin_move(target, park_on_arrival, now) {
            Ok(run) => {
                info!(
                    x = target.x,
                    y = target.y,
                    park = park_on_arrival,
                    duration = run.duration,
                    "moving arrow"
                );
                self.sync_appearance();
                true
            }
            Err(e) => {
                warn!(error = %e, "move rejected");
                self.machine.on_move_rejected();
                self.sync_appearance();
                false
            }
        }
    }

    /// Align the pulse and the status line with the current state.
    fn sync_appearance(&mut self) {
        let appearance = Appearance::for_state(self.state());
        if appearance.pulsing && !self.pulsing {
            self.renderer.start_pulsing();
        } else if !appearance.pulsing && self.pulsing {
            self.renderer.stop_pulsing();
        }
        self.pulsing = appearance.pulsing;
        self.notifier.set_status(&notify::tooltip_text(self.state()));
    }

    fn render(&mut self) {
        let appearance = Appearance::for_state(self.state());
        self.renderer
            .set_arrow_transform(self.motion.position(), self.motion.rotation(), appearance.opacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[derive(Default)]
    struct NullRenderer {
        frames: usize,
        pulsing: bool,
    }

    impl OverlayRenderer for NullRenderer {
        fn set_arrow_transform(&mut self, _position: Point, _rotation: f64, _opacity: f64) {
            self.frames += 1;
        }
        fn start_pulsing(&mut self) {
            self.pulsing = true;
        }
        fn stop_pulsing(&mut self) {
            self.pulsing = false;
        }
    }

    #[derive(Default)]
    struct NullNotifier {
        bodies: Vec<String>,
    }

    impl Notifier for NullNotifier {
        fn notify(&mut self, _title: &str, body: &str, _timeout: Duration) {
            self.bodies.push(body.to_string());
        }
    }

    fn app() -> PointerApp<NullRenderer, NullNotifier> {
        PointerApp::new(
            VirtualScreen::new(0.0, 0.0, 1000.0, 800.0),
            1.0,
            NullRenderer::default(),
            NullNotifier::default(),
        )
    }

    #[test]
    fn starts_ready_at_center_and_draws() {
        let app = app();
        assert_eq!(app.state(), ArrowState::Ready);
        assert_eq!(app.position(), Point::new(500.0, 400.0));
        assert_eq!(app.renderer().frames, 1);
    }

    #[test]
    fn nan_click_is_dropped_without_state_change() {
        let mut app = app();
        let t0 = Instant::now();
        app.handle_click(
            ClickEvent {
                position: Point::new(f64::NAN, 10.0),
                modifier_held: false,
            },
            t0,
        );
        assert_eq!(app.state(), ArrowState::Ready);
        assert!(!app.motion().is_animating());
    }

    #[test]
    fn input_warning_is_shown_once() {
        let mut app = app();
        let err = PointerError::HookInstall("denied".into());
        app.input_unavailable(&err);
        app.input_unavailable(&err);
        assert_eq!(app.notifier().bodies, vec![notify::INPUT_UNAVAILABLE_MESSAGE]);
    }

    #[test]
    fn reset_while_moving_takes_over_the_run() {
        let mut app = app();
        let t0 = Instant::now();
        app.handle_click(
            ClickEvent {
                position: Point::new(900.0, 400.0),
                modifier_held: true,
            },
            t0,
        );
        let t1 = t0 + Duration::from_millis(50);
        app.tick(t1);
        let midway = app.position();

        assert!(app.reset_to_center(t1));
        let run = app.motion().run().cloned().unwrap();
        assert_eq!(run.start, midway);
        assert_eq!(run.target, Point::new(500.0, 400.0));
        assert!(!run.park_on_arrival);

        app.tick(t1 + Duration::from_secs(3));
        assert_eq!(app.state(), ArrowState::Ready);
        assert_eq!(app.position(), Point::new(500.0, 400.0));
    }

    #[test]
    fn reset_from_parked_unparks_and_stops_pulse() {
        let mut app = app();
        let t0 = Instant::now();
        app.handle_click(
            ClickEvent {
                position: Point::new(100.0, 100.0),
                modifier_held: true,
            },
            t0,
        );
        app.tick(t0 + Duration::from_secs(3));
        assert_eq!(app.state(), ArrowState::Parked);
        assert!(app.renderer().pulsing);

        let t1 = t0 + Duration::from_secs(4);
        assert!(app.reset_to_center(t1));
        assert_eq!(app.state(), ArrowState::Moving);
        assert!(!app.renderer().pulsing);

        app.tick(t1 + Duration::from_secs(3));
        assert_eq!(app.state(), ArrowState::Ready);
        assert_eq!(app.position(), Point::new(500.0, 400.0));
    }
}
