//! Arrow state (pure Rust, no FFI).

use std::fmt;

/// The three states of the on-screen arrow.
///
/// - `Ready`: plain clicks move the arrow.
/// - `Moving`: an animation run is in flight; clicks are dropped.
/// - `Parked`: locked in place; only a Ctrl+click unparks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrowState {
    #[default]
    Ready,
    Moving,
    Parked,
}

impl ArrowState {
    /// Human-readable state name, as shown in the status report.
    pub fn name(&self) -> &'static str {
        match self {
            ArrowState::Ready => "Ready",
            ArrowState::Moving => "Moving",
            ArrowState::Parked => "Parked",
        }
    }
}

impl fmt::Display for ArrowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
