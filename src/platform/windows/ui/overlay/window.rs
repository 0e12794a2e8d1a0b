//! The overlay window: a borderless, topmost, layered popup spanning the
//! virtual screen, made click-through after creation.
//!
//! The window procedure turns tray callbacks into [`AppEvent`]s and runs the
//! tick handler on the animation timer. Handling `WM_TIMER` here, rather than
//! in the main loop, keeps the arrow moving while a modal loop (the tray
//! menu) is pumping messages.

use std::cell::RefCell;
use std::time::Instant;

use tracing::{debug, error, warn};
use windows::core::w;
use windows::Win32::Foundation::{GetLastError, HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::HiDpi::{
    SetProcessDpiAwarenessContext, DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2,
};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, GetSystemMetrics, GetWindowLongW, KillTimer, LoadCursorW,
    PostQuitMessage, RegisterClassW, SetTimer, SetWindowLongW, ShowWindow, GWL_EXSTYLE, IDC_ARROW,
    SM_CXVIRTUALSCREEN, SM_CYVIRTUALSCREEN, SM_XVIRTUALSCREEN, SM_YVIRTUALSCREEN,
    SW_SHOWNOACTIVATE, WM_DESTROY, WM_LBUTTONUP, WM_RBUTTONUP, WM_TIMER, WNDCLASSW, WS_EX_LAYERED,
    WS_EX_NOACTIVATE, WS_EX_TOOLWINDOW, WS_EX_TOPMOST, WS_EX_TRANSPARENT, WS_POPUP,
};

use crate::events::{AppEvent, EventPublisher};
use crate::model::VirtualScreen;
use crate::platform::windows::ui::tray::{show_tray_menu, WM_TRAYICON};

/// Id of the animation timer set on the overlay window.
pub const TICK_TIMER_ID: usize = 1;

/// Runs once per animation timer tick, on the UI thread.
pub type TickHandler = Box<dyn FnMut(Instant)>;

thread_local! {
    /// Where the window procedure sends tray events.
    static WINDOW_EVENTS: RefCell<Option<EventPublisher>> = const { RefCell::new(None) };

    static TICK_HANDLER: RefCell<Option<TickHandler>> = const { RefCell::new(None) };
}

/// Route the overlay's animation timer to `on_tick`.
pub fn install_tick_handler(on_tick: TickHandler) {
    TICK_HANDLER.with(|slot| *slot.borrow_mut() = Some(on_tick));
}

/// Remove the tick handler, handing it back so the caller decides when it
/// is dropped.
pub fn take_tick_handler() -> Option<TickHandler> {
    TICK_HANDLER.with(|slot| slot.borrow_mut().take())
}

/// Start the animation timer on `hwnd`. Returns `false`, after logging the
/// failure, if Windows refused it.
pub fn start_tick_timer(hwnd: HWND, interval_ms: u32) -> bool {
    if unsafe { SetTimer(Some(hwnd), TICK_TIMER_ID, interval_ms, None) } == 0 {
        error!(
            code = unsafe { GetLastError() }.0,
            "animation timer not started, the arrow will not move"
        );
        return false;
    }
    true
}

pub fn stop_tick_timer(hwnd: HWND) {
    unsafe {
        let _ = KillTimer(Some(hwnd), TICK_TIMER_ID);
    }
}

/// Opt into per-monitor DPI awareness so hook coordinates and the
/// virtual-screen metrics share the same physical pixel space.
pub fn enable_dpi_awareness() {
    unsafe {
        if let Err(e) = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2) {
            // Already set by a manifest, or an older Windows.
            debug!(error = %e, "per-monitor DPI awareness not applied");
        }
    }
}

/// Bounding box of all monitors, in physical pixels.
pub fn virtual_screen() -> VirtualScreen {
    unsafe {
        VirtualScreen::new(
            GetSystemMetrics(SM_XVIRTUALSCREEN) as f64,
            GetSystemMetrics(SM_YVIRTUALSCREEN) as f64,
            GetSystemMetrics(SM_CXVIRTUALSCREEN) as f64,
            GetSystemMetrics(SM_CYVIRTUALSCREEN) as f64,
        )
    }
}

/// Create and show the overlay window over `screen`.
///
/// `events` receives tray menu and tray click events.
pub fn create_overlay_window(
    screen: &VirtualScreen,
    events: EventPublisher,
) -> windows::core::Result<HWND> {
    unsafe {
        let instance = GetModuleHandleW(None)?;
        let class_name = w!("YouAreHereOverlay");

        let wc = WNDCLASSW {
            lpfnWndProc: Some(wndproc),
            hInstance: instance.into(),
            hCursor: LoadCursorW(None, IDC_ARROW)?,
            lpszClassName: class_name,
            ..Default::default()
        };
        RegisterClassW(&wc);

        WINDOW_EVENTS.with(|slot| *slot.borrow_mut() = Some(events));

        let hwnd = CreateWindowExW(
            WS_EX_LAYERED | WS_EX_TOPMOST | WS_EX_NOACTIVATE | WS_EX_TOOLWINDOW,
            class_name,
            w!("You Are Here"),
            WS_POPUP,
            screen.left as i32,
            screen.top as i32,
            screen.width as i32,
            screen.height as i32,
            None,
            None,
            Some(instance.into()),
            None,
        )?;

        make_click_through(hwnd);
        let _ = ShowWindow(hwnd, SW_SHOWNOACTIVATE);
        Ok(hwnd)
    }
}

/// Add `WS_EX_TRANSPARENT` once the window exists, so every mouse event
/// falls through to the window underneath.
fn make_click_through(hwnd: HWND) {
    unsafe {
        let ex_style = GetWindowLongW(hwnd, GWL_EXSTYLE);
        let wanted = ex_style | WS_EX_TRANSPARENT.0 as i32 | WS_EX_LAYERED.0 as i32;
        if SetWindowLongW(hwnd, GWL_EXSTYLE, wanted) == 0 {
            warn!("failed to make the overlay click-through");
        }
    }
}

fn run_tick(now: Instant) {
    TICK_HANDLER.with(|slot| {
        // Already borrowed if a tick re-enters through a nested message loop.
        if let Ok(mut handler) = slot.try_borrow_mut() {
            if let Some(on_tick) = handler.as_mut() {
                on_tick(now);
            }
        }
    });
}

fn publish(event: AppEvent) {
    WINDOW_EVENTS.with(|slot| {
        if let Some(events) = slot.borrow().as_ref() {
            events.publish(event);
        }
    });
}

extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        match msg {
            WM_TIMER if wparam.0 == TICK_TIMER_ID => {
                run_tick(Instant::now());
                LRESULT(0)
            }

            msg if msg == WM_TRAYICON => {
                match lparam.0 as u32 {
                    WM_LBUTTONUP => publish(AppEvent::ShowStatus),
                    WM_RBUTTONUP => {
                        if let Some(event) = show_tray_menu(hwnd) {
                            publish(event);
                        }
                    }
                    _ => {}
                }
                LRESULT(0)
            }

            WM_DESTROY => {
                WINDOW_EVENTS.with(|slot| *slot.borrow_mut() = None);
                PostQuitMessage(0);
                LRESULT(0)
            }

            _ => DefWindowProcW(hwnd, msg, wparam, lparam),
        }
    }
}
