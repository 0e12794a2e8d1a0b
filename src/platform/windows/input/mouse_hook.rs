//! Global left-click capture via a low-level mouse hook (`WH_MOUSE_LL`).
//!
//! The hook procedure is a plain `extern "system"` function, so it reaches
//! its click sink through a thread-local slot. The slot is filled by
//! [`LowLevelMouseMonitor::start`] and cleared by `stop`/drop. The hook runs
//! on the installing thread while it pumps messages; the sink must only
//! enqueue.

use std::cell::RefCell;
use std::sync::atomic::{AtomicIsize, Ordering};

use tracing::{debug, info, trace};
use windows::Win32::Foundation::{LPARAM, LRESULT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Input::KeyboardAndMouse::{GetAsyncKeyState, VK_CONTROL};
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, SetWindowsHookExW, UnhookWindowsHookEx, HHOOK, MSLLHOOKSTRUCT, WH_MOUSE_LL,
    WM_LBUTTONDOWN,
};

use crate::error::{PointerError, Result};
use crate::input::{ClickEvent, ClickHandler, GlobalInputMonitor};
use crate::model::Point;

/// Installed hook handle (0 when none), read by the hook procedure.
static MOUSE_HOOK: AtomicIsize = AtomicIsize::new(0);

thread_local! {
    static CLICK_SINK: RefCell<Option<ClickHandler>> = const { RefCell::new(None) };
}

/// Low-level mouse hook procedure: forwards left-button presses.
extern "system" fn mouse_hook_proc(ncode: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        if ncode >= 0 && wparam.0 as u32 == WM_LBUTTONDOWN {
            let info = &*(lparam.0 as *const MSLLHOOKSTRUCT);
            let click = ClickEvent {
                position: Point::new(info.pt.x as f64, info.pt.y as f64),
                // High bit set: key is down right now.
                modifier_held: GetAsyncKeyState(VK_CONTROL.0 as i32) < 0,
            };
            trace!(x = info.pt.x, y = info.pt.y, ctrl = click.modifier_held, "left click");
            CLICK_SINK.with(|sink| {
                if let Ok(sink) = sink.try_borrow() {
                    if let Some(on_click) = sink.as_ref() {
                        on_click(click);
                    }
                }
            });
        }

        let hook = MOUSE_HOOK.load(Ordering::SeqCst);
        CallNextHookEx(Some(HHOOK(hook as *mut _)), ncode, wparam, lparam)
    }
}

/// [`GlobalInputMonitor`] backed by `SetWindowsHookExW(WH_MOUSE_LL)`.
///
/// Must be started and stopped on the thread that runs the message loop.
#[derive(Default)]
pub struct LowLevelMouseMonitor {
    hook: Option<HHOOK>,
}

impl LowLevelMouseMonitor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GlobalInputMonitor for LowLevelMouseMonitor {
    fn start(&mut self, on_click: ClickHandler) -> Result<()> {
        if self.is_running() || MOUSE_HOOK.load(Ordering::SeqCst) != 0 {
            return Err(PointerError::HookAlreadyInstalled);
        }

        CLICK_SINK.with(|sink| *sink.borrow_mut() = Some(on_click));

        let installed = unsafe {
            let module = GetModuleHandleW(None).map_err(|e| PointerError::HookInstall(e.to_string()));
            module.and_then(|module| {
                SetWindowsHookExW(WH_MOUSE_LL, Some(mouse_hook_proc), Some(module.into()), 0)
                    .map_err(|e| PointerError::HookInstall(e.to_string()))
            })
        };

        match installed {
            Ok(hook) => {
                MOUSE_HOOK.store(hook.0 as isize, Ordering::SeqCst);
                self.hook = Some(hook);
                info!("global mouse hook installed");
                Ok(())
            }
            Err(e) => {
                CLICK_SINK.with(|sink| *sink.borrow_mut() = None);
                Err(e)
            }
        }
    }

    fn stop(&mut self) {
        if let Some(hook) = self.hook.take() {
            unsafe {
                let _ = UnhookWindowsHookEx(hook);
            }
            MOUSE_HOOK.store(0, Ordering::SeqCst);
            debug!("global mouse hook removed");
        }
        CLICK_SINK.with(|sink| *sink.borrow_mut() = None);
    }

    fn is_running(&self) -> bool {
        self.hook.is_some()
    }
}

impl Drop for LowLevelMouseMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}
