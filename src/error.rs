//! Error types for the pointer tool.
//!
//! Only hook registration failure is ever surfaced to the user; everything
//! else is logged and absorbed by the caller.

use thiserror::Error;

/// Errors that can occur while running the overlay.
#[derive(Debug, Error)]
pub enum PointerError {
    /// A move target contained NaN or an infinite coordinate.
    #[error("invalid move target ({x}, {y})")]
    InvalidTarget { x: f64, y: f64 },

    /// A move was requested while another run is still in flight.
    #[error("a move is already in progress")]
    MoveInProgress,

    /// The global mouse listener could not be registered.
    #[error("failed to install global mouse hook: {0}")]
    HookInstall(String),

    /// The global mouse listener is already running.
    #[error("global mouse hook already installed")]
    HookAlreadyInstalled,

    /// Reading or writing the settings file failed.
    #[error("settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// The settings file is not valid JSON for the settings record.
    #[error("settings format error: {0}")]
    SettingsFormat(#[from] serde_json::Error),

    /// No per-user configuration directory could be determined.
    #[error("no per-user configuration directory available")]
    NoConfigDir,

    /// A platform API call failed.
    #[error("platform error: {0}")]
    Platform(String),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, PointerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_target_display_includes_coordinates() {
        let err = PointerError::InvalidTarget {
            x: f64::NAN,
            y: 10.0,
        };
        assert_eq!(err.to_string(), "invalid move target (NaN, 10)");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: PointerError = io.into();
        assert!(matches!(err, PointerError::SettingsIo(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn json_errors_convert() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PointerError = json_err.into();
        assert!(matches!(err, PointerError::SettingsFormat(_)));
    }
}
