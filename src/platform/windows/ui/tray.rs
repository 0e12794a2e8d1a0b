//! System tray (notification area) icon for Windows.
//!
//! The icon carries the context menu (instructions, reset to center, exit),
//! reports tray clicks to the overlay window via [`WM_TRAYICON`], and shows
//! balloon notifications through [`TrayNotifier`].

use std::cell::RefCell;
use std::time::Duration;

use tracing::warn;
use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::{HWND, LPARAM, POINT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Shell::{
    Shell_NotifyIconW, NIF_ICON, NIF_INFO, NIF_MESSAGE, NIF_TIP, NIIF_INFO, NIM_ADD, NIM_DELETE,
    NIM_MODIFY, NOTIFYICONDATAW, NOTIFYICONDATAW_0,
};
use windows::Win32::UI::WindowsAndMessaging::{
    AppendMenuW, CreateIcon, CreatePopupMenu, DestroyIcon, DestroyMenu, GetCursorPos,
    PostMessageW, SetForegroundWindow, TrackPopupMenu, HICON, HMENU, MF_SEPARATOR, MF_STRING,
    TPM_BOTTOMALIGN, TPM_LEFTALIGN, TPM_NONOTIFY, TPM_RETURNCMD, TPM_RIGHTBUTTON, WM_NULL,
    WM_USER,
};

use crate::arrow::ArrowShape;
use crate::events::AppEvent;
use crate::model::constants::DEFAULT_ARROW_RGBA;
use crate::notify::Notifier;

// Custom message for tray icon events
pub const WM_TRAYICON: u32 = WM_USER + 1;

// Menu item IDs
pub const MENU_INSTRUCTIONS: u32 = 1001;
pub const MENU_RESET: u32 = 1002;
pub const MENU_EXIT: u32 = 1003;

const TRAY_ICON_ID: u32 = 1;
const TRAY_ICON_SIZE: usize = 32;

thread_local! {
    /// Context menu of the installed icon, for the window procedure.
    static MENU: RefCell<Option<HMENU>> = const { RefCell::new(None) };
}

/// Copy `text` into a fixed UTF-16 buffer, truncating and NUL-terminating.
fn fill_wide(buf: &mut [u16], text: &str) {
    let limit = buf.len().saturating_sub(1);
    let mut len = 0;
    for (slot, c) in buf.iter_mut().zip(text.encode_utf16().take(limit)) {
        *slot = c;
        len += 1;
    }
    if let Some(end) = buf.get_mut(len) {
        *end = 0;
    }
}

fn base_data(hwnd: HWND) -> NOTIFYICONDATAW {
    NOTIFYICONDATAW {
        cbSize: std::mem::size_of::<NOTIFYICONDATAW>() as u32,
        hWnd: hwnd,
        uID: TRAY_ICON_ID,
        ..Default::default()
    }
}

/// Build the arrow icon from the rasterised arrow outline (32-bit BGRA with
/// alpha, so the AND mask is left empty).
fn create_arrow_icon() -> windows::core::Result<HICON> {
    let (r, g, b, _) = DEFAULT_ARROW_RGBA;
    let pixel = [
        (b * 255.0) as u8,
        (g * 255.0) as u8,
        (r * 255.0) as u8,
        255u8,
    ];
    let mask = ArrowShape::rasterize(TRAY_ICON_SIZE);
    let color: Vec<u8> = mask
        .iter()
        .flat_map(|&inside| if inside { pixel } else { [0u8; 4] })
        .collect();
    let and_mask = vec![0u8; TRAY_ICON_SIZE * TRAY_ICON_SIZE / 8];

    unsafe {
        let instance = GetModuleHandleW(None)?;
        CreateIcon(
            Some(instance.into()),
            TRAY_ICON_SIZE as i32,
            TRAY_ICON_SIZE as i32,
            1,
            32,
            and_mask.as_ptr(),
            color.as_ptr(),
        )
    }
}

/// The installed tray icon and its context menu. Removed on drop.
pub struct TrayIcon {
    hwnd: HWND,
    menu: HMENU,
    icon: HICON,
}

impl TrayIcon {
    /// Add the icon to the notification area, reporting to `hwnd`.
    pub fn install(hwnd: HWND) -> windows::core::Result<Self> {
        let icon = create_arrow_icon().unwrap_or_else(|e| {
            warn!(error = %e, "failed to build tray icon, using a blank one");
            HICON::default()
        });

        unsafe {
            let mut nid = base_data(hwnd);
            nid.uFlags = NIF_ICON | NIF_MESSAGE | NIF_TIP;
            nid.uCallbackMessage = WM_TRAYICON;
            nid.hIcon = icon;
            fill_wide(&mut nid.szTip, "You Are Here - Pointer Tool");
            if !Shell_NotifyIconW(NIM_ADD, &nid).as_bool() {
                warn!("failed to add tray icon");
            }

            let menu = CreatePopupMenu()?;
            AppendMenuW(menu, MF_STRING, MENU_INSTRUCTIONS as usize, w!("Instructions"))?;
            AppendMenuW(menu, MF_STRING, MENU_RESET as usize, w!("Reset to Center"))?;
            AppendMenuW(menu, MF_SEPARATOR, 0, PCWSTR::null())?;
            AppendMenuW(menu, MF_STRING, MENU_EXIT as usize, w!("Exit"))?;
            MENU.with(|m| *m.borrow_mut() = Some(menu));

            Ok(Self { hwnd, menu, icon })
        }
    }

    /// A notifier that shows balloons on this icon.
    pub fn notifier(&self) -> TrayNotifier {
        TrayNotifier { hwnd: self.hwnd }
    }
}

impl Drop for TrayIcon {
    fn drop(&mut self) {
        MENU.with(|m| *m.borrow_mut() = None);
        unsafe {
            let nid = base_data(self.hwnd);
            let _ = Shell_NotifyIconW(NIM_DELETE, &nid);
            let _ = DestroyMenu(self.menu);
            if !self.icon.is_invalid() {
                let _ = DestroyIcon(self.icon);
            }
        }
    }
}

/// Show the context menu at the cursor and map the chosen item to an event.
pub fn show_tray_menu(hwnd: HWND) -> Option<AppEvent> {
    let menu = MENU.with(|m| *m.borrow())?;
    let chosen = unsafe {
        let mut pt = POINT::default();
        let _ = GetCursorPos(&mut pt);

        // Required for the menu to close when clicking elsewhere
        let _ = SetForegroundWindow(hwnd);

        let cmd = TrackPopupMenu(
            menu,
            TPM_BOTTOMALIGN | TPM_LEFTALIGN | TPM_RIGHTBUTTON | TPM_RETURNCMD | TPM_NONOTIFY,
            pt.x,
            pt.y,
            None,
            hwnd,
            None,
        );
        let _ = PostMessageW(Some(hwnd), WM_NULL, WPARAM(0), LPARAM(0));
        cmd.0 as u32
    };

    match chosen {
        MENU_INSTRUCTIONS => Some(AppEvent::ShowInstructions),
        MENU_RESET => Some(AppEvent::ResetToCenter),
        MENU_EXIT => Some(AppEvent::Exit),
        _ => None,
    }
}

/// [`Notifier`] showing balloon tips on the tray icon.
pub struct TrayNotifier {
    hwnd: HWND,
}

impl Notifier for TrayNotifier {
    fn notify(&mut self, title: &str, body: &str, timeout: Duration) {
        unsafe {
            let mut nid = base_data(self.hwnd);
            nid.uFlags = NIF_INFO;
            nid.dwInfoFlags = NIIF_INFO;
            nid.Anonymous = NOTIFYICONDATAW_0 {
                uTimeout: timeout.as_millis().min(u32::MAX as u128) as u32,
            };
            fill_wide(&mut nid.szInfoTitle, title);
            fill_wide(&mut nid.szInfo, body);
            if !Shell_NotifyIconW(NIM_MODIFY, &nid).as_bool() {
                warn!(body, "failed to show tray notification");
            }
        }
    }

    fn set_status(&mut self, status: &str) {
        unsafe {
            let mut nid = base_data(self.hwnd);
            nid.uFlags = NIF_TIP;
            fill_wide(&mut nid.szTip, status);
            let _ = Shell_NotifyIconW(NIM_MODIFY, &nid);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_wide_truncates_and_terminates() {
        let mut buf = [0xFFFFu16; 4];
        fill_wide(&mut buf, "abcdef");
        assert_eq!(buf, [b'a' as u16, b'b' as u16, b'c' as u16, 0]);

        let mut buf = [0xFFFFu16; 4];
        fill_wide(&mut buf, "a");
        assert_eq!(buf[..2], [b'a' as u16, 0]);
    }

    #[test]
    fn tooltip_fits_tip_buffer() {
        let nid = NOTIFYICONDATAW::default();
        assert!(crate::notify::tooltip_text(crate::model::ArrowState::Moving).len() < nid.szTip.len());
    }
}
