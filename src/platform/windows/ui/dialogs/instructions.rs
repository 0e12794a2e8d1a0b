//! Usage instructions dialog.
//!
//! Shown on its own thread so the overlay keeps animating while the message
//! box is open.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::warn;
use windows::core::PCWSTR;
use windows::Win32::UI::WindowsAndMessaging::{
    MessageBoxW, MB_ICONINFORMATION, MB_OK, MB_SETFOREGROUND, MB_TOPMOST,
};

use crate::model::constants::NOTIFY_TITLE;
use crate::notify::INSTRUCTIONS;

/// Guard to prevent stacking several instruction boxes
static INSTRUCTIONS_OPEN: AtomicBool = AtomicBool::new(false);

/// Show the instructions. Does nothing if they are already on screen.
pub fn show_instructions() {
    if INSTRUCTIONS_OPEN
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return;
    }

    let spawned = std::thread::Builder::new()
        .name("instructions".into())
        .spawn(|| {
            let title: Vec<u16> = NOTIFY_TITLE.encode_utf16().chain(std::iter::once(0)).collect();
            let message: Vec<u16> = INSTRUCTIONS.encode_utf16().chain(std::iter::once(0)).collect();
            unsafe {
                MessageBoxW(
                    None,
                    PCWSTR(message.as_ptr()),
                    PCWSTR(title.as_ptr()),
                    MB_OK | MB_ICONINFORMATION | MB_TOPMOST | MB_SETFOREGROUND,
                );
            }
            INSTRUCTIONS_OPEN.store(false, Ordering::SeqCst);
        });

    if let Err(e) = spawned {
        warn!(error = %e, "failed to open instructions");
        INSTRUCTIONS_OPEN.store(false, Ordering::SeqCst);
    }
}
