//! Start-with-Windows registration.
//!
//! Writes or removes a value under
//! `HKCU\Software\Microsoft\Windows\CurrentVersion\Run` pointing at the
//! running executable.

use tracing::{debug, info, warn};
use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::ERROR_FILE_NOT_FOUND;
use windows::Win32::System::Registry::{
    RegDeleteKeyValueW, RegSetKeyValueW, HKEY_CURRENT_USER, REG_SZ,
};

use crate::error::{PointerError, Result};

const RUN_KEY: PCWSTR = w!("Software\\Microsoft\\Windows\\CurrentVersion\\Run");
const VALUE_NAME: PCWSTR = w!("YouAreHere");

/// Quoted command line for the Run value.
fn run_command(exe: &std::path::Path) -> String {
    format!("\"{}\"", exe.display())
}

fn register() -> Result<()> {
    let exe = std::env::current_exe().map_err(|e| PointerError::Platform(e.to_string()))?;
    let command: Vec<u16> = run_command(&exe)
        .encode_utf16()
        .chain(std::iter::once(0))
        .collect();
    unsafe {
        RegSetKeyValueW(
            HKEY_CURRENT_USER,
            RUN_KEY,
            VALUE_NAME,
            REG_SZ.0,
            Some(command.as_ptr() as *const _),
            (command.len() * std::mem::size_of::<u16>()) as u32,
        )
        .ok()
        .map_err(|e| PointerError::Platform(e.to_string()))
    }
}

fn unregister() -> Result<()> {
    let status = unsafe { RegDeleteKeyValueW(HKEY_CURRENT_USER, RUN_KEY, VALUE_NAME) };
    if status == ERROR_FILE_NOT_FOUND {
        return Ok(());
    }
    status.ok().map_err(|e| PointerError::Platform(e.to_string()))
}

/// Make the Run entry match `enabled`. Best effort; failures are logged.
pub fn apply_autostart(enabled: bool) {
    let result = if enabled { register() } else { unregister() };
    match result {
        Ok(()) if enabled => info!("autostart enabled"),
        Ok(()) => debug!("autostart disabled"),
        Err(e) => warn!(error = %e, enabled, "failed to update autostart"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_command_is_quoted() {
        let cmd = run_command(std::path::Path::new(r"C:\Program Files\You Are Here\you-are-here.exe"));
        assert_eq!(cmd, r#""C:\Program Files\You Are Here\you-are-here.exe""#);
    }
}
