//! Ready / Moving / Parked transitions.
//!
//! The state machine is the only writer of [`ArrowState`]. It decides what a
//! click means; the caller carries out the resulting [`ClickAction`].

use crate::model::ArrowState;

/// What the caller should do in response to a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Start a move to the click point. The state is now Moving.
    Move { park_on_arrival: bool },
    /// The arrow was unparked in place. The state is now Ready.
    Unpark,
    /// The click has no effect in the current state.
    Ignore,
}

#[derive(Debug, Clone, Default)]
pub struct ArrowStateMachine {
    state: ArrowState,
}

impl ArrowStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ArrowState {
        self.state
    }

    /// Apply a left click, with or without the modifier held.
    ///
    /// | state  | modifier | next   | action            |
    /// |--------|----------|--------|-------------------|
    /// | Ready  | off      | Moving | move              |
    /// | Ready  | on       | Moving | move, then park   |
    /// | Moving | any      | Moving | ignore            |
    /// | Parked | off      | Parked | ignore            |
    /// | Parked | on       | Ready  | unpark, no move   |
    pub fn on_click(&mut self, modifier_held: bool) -> ClickAction {
        match (self.state, modifier_held) {
            (ArrowState::Ready, park_on_arrival) => {
                self.state = ArrowState::Moving;
                ClickAction::Move { park_on_arrival }
            }
            (ArrowState::Moving, _) => ClickAction::Ignore,
            (ArrowState::Parked, false) => ClickAction::Ignore,
            (ArrowState::Parked, true) => {
                self.state = ArrowState::Ready;
                ClickAction::Unpark
            }
        }
    }

    /// The in-flight run reached its target.
    ///
    /// Moving becomes Parked or Ready depending on `park_on_arrival`. Outside
    /// Moving this is a no-op.
    pub fn on_move_completed(&mut self, park_on_arrival: bool) -> ArrowState {
        if self.state == ArrowState::Moving {
            self.state = if park_on_arrival {
                ArrowState::Parked
            } else {
                ArrowState::Ready
            };
        }
        self.state
    }

    /// The motion controller refused the move just granted by `on_click`.
    pub fn on_move_rejected(&mut self) {
        if self.state == ArrowState::Moving {
            self.state = ArrowState::Ready;
        }
    }

    /// Leave Parked without a click (reset-to-center).
    ///
    /// Returns `true` if the arrow was parked. Moving is left untouched.
    pub fn force_unpark(&mut self) -> bool {
        if self.state == ArrowState::Parked {
            self.state = ArrowState::Ready;
            true
        } else {
            false
        }
    }

    /// Abandon the current move without completing it (reset-to-center
    /// taking over). Returns `true` if the arrow was moving.
    pub fn cancel_move(&mut self) -> bool {
        if self.state == ArrowState::Moving {
            self.state = ArrowState::Ready;
            true
        } else {
            false
        }
    }

    /// Enter Moving for a move that did not originate from a click.
    ///
    /// Only valid from Ready; returns `false` otherwise.
    pub fn begin_programmatic_move(&mut self) -> bool {
        if self.state == ArrowState::Ready {
            self.state = ArrowState::Moving;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine_in(state: ArrowState) -> ArrowStateMachine {
        ArrowStateMachine { state }
    }

    #[test]
    fn plain_click_from_ready_moves_without_parking() {
        let mut m = ArrowStateMachine::new();
        assert_eq!(
            m.on_click(false),
            ClickAction::Move {
                park_on_arrival: false
            }
        );
        assert_eq!(m.state(), ArrowState::Moving);
    }

    #[test]
    fn modified_click_from_ready_moves_and_parks() {
        let mut m = ArrowStateMachine::new();
        assert_eq!(
            m.on_click(true),
            ClickAction::Move {
                park_on_arrival: true
            }
        );
        assert_eq!(m.state(), ArrowState::Moving);
    }

    #[test]
    fn clicks_while_moving_are_ignored() {
        let mut m = machine_in(ArrowState::Moving);
        assert_eq!(m.on_click(false), ClickAction::Ignore);
        assert_eq!(m.on_click(true), ClickAction::Ignore);
        assert_eq!(m.state(), ArrowState::Moving);
    }

    #[test]
    fn plain_click_while_parked_is_ignored() {
        let mut m = machine_in(ArrowState::Parked);
        assert_eq!(m.on_click(false), ClickAction::Ignore);
        assert_eq!(m.state(), ArrowState::Parked);
    }

    #[test]
    fn modified_click_while_parked_unparks() {
        let mut m = machine_in(ArrowState::Parked);
        assert_eq!(m.on_click(true), ClickAction::Unpark);
        assert_eq!(m.state(), ArrowState::Ready);
    }

    #[test]
    fn completion_routes_on_park_flag() {
        let mut m = machine_in(ArrowState::Moving);
        assert_eq!(m.on_move_completed(false), ArrowState::Ready);

        let mut m = machine_in(ArrowState::Moving);
        assert_eq!(m.on_move_completed(true), ArrowState::Parked);
    }

    #[test]
    fn completion_outside_moving_is_noop() {
        let mut m = machine_in(ArrowState::Parked);
        assert_eq!(m.on_move_completed(false), ArrowState::Parked);
        let mut m = machine_in(ArrowState::Ready);
        assert_eq!(m.on_move_completed(true), ArrowState::Ready);
    }

    #[test]
    fn rejected_move_returns_to_ready() {
        let mut m = ArrowStateMachine::new();
        m.on_click(false);
        m.on_move_rejected();
        assert_eq!(m.state(), ArrowState::Ready);
    }

    #[test]
    fn force_unpark_only_affects_parked() {
        let mut m = machine_in(ArrowState::Parked);
        assert!(m.force_unpark());
        assert_eq!(m.state(), ArrowState::Ready);

        let mut m = machine_in(ArrowState::Moving);
        assert!(!m.force_unpark());
        assert_eq!(m.state(), ArrowState::Moving);
    }

    #[test]
    fn cancel_move_only_leaves_moving() {
        let mut m = machine_in(ArrowState::Moving);
        assert!(m.cancel_move());
        assert_eq!(m.state(), ArrowState::Ready);

        let mut m = machine_in(ArrowState::Parked);
        assert!(!m.cancel_move());
        assert_eq!(m.state(), ArrowState::Parked);
    }

    #[test]
    fn programmatic_move_requires_ready() {
        let mut m = ArrowStateMachine::new();
        assert!(m.begin_programmatic_move());
        assert_eq!(m.state(), ArrowState::Moving);
        assert!(!m.begin_programmatic_move());
    }
}
