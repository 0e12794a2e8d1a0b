//! Windows entry point and message loop.
//!
//! The coordinator and the event bus move into the overlay window's tick
//! handler. Each animation tick drains the bus, dispatches, then runs
//! whatever the dispatcher hands back.

use tracing::{error, info, warn};
use windows::Win32::Graphics::Direct2D::{
    D2D1CreateFactory, ID2D1Factory, D2D1_FACTORY_TYPE_SINGLE_THREADED,
};
use windows::Win32::System::Com::{CoInitializeEx, CoUninitialize, COINIT_APARTMENTTHREADED};
use windows::Win32::UI::WindowsAndMessaging::{
    DestroyWindow, DispatchMessageW, GetMessageW, PostQuitMessage, TranslateMessage, MSG,
};

use you_are_here::events::{AppEvent, EventBus};
use you_are_here::handlers::{dispatch_events, ShellRequest};
use you_are_here::input::GlobalInputMonitor;
use you_are_here::model::constants::TICK_INTERVAL_MS;
use you_are_here::platform::windows::input::LowLevelMouseMonitor;
use you_are_here::platform::windows::storage::apply_autostart;
use you_are_here::platform::windows::ui::{
    create_overlay_window, enable_dpi_awareness, install_tick_handler, show_instructions,
    start_tick_timer, stop_tick_timer, take_tick_handler, virtual_screen, LayeredOverlay,
    TrayIcon,
};
use you_are_here::settings::{JsonSettingsStore, SettingsStore};
use you_are_here::{PointerApp, Settings};

/// Main entry point for Windows.
pub fn run() {
    if let Err(e) = run_app() {
        error!(error = %e, "you-are-here failed");
        std::process::exit(1);
    }
}

fn run_app() -> windows::core::Result<()> {
    unsafe {
        CoInitializeEx(None, COINIT_APARTMENTTHREADED).ok()?;
    }
    enable_dpi_awareness();

    let result = run_overlay();

    unsafe {
        CoUninitialize();
    }
    result
}

fn load_settings() -> Settings {
    match JsonSettingsStore::default_location() {
        Ok(store) => {
            info!(path = %store.path().display(), "settings file");
            store.load()
        }
        Err(e) => {
            warn!(error = %e, "no settings location, using defaults");
            Settings::default()
        }
    }
}

fn run_overlay() -> windows::core::Result<()> {
    let settings = load_settings();
    apply_autostart(settings.auto_start_enabled);

    let factory: ID2D1Factory = unsafe { D2D1CreateFactory(D2D1_FACTORY_TYPE_SINGLE_THREADED, None)? };
    let screen = virtual_screen();
    let bus = EventBus::new();

    let hwnd = create_overlay_window(&screen, bus.publisher())?;
    let tray = TrayIcon::install(hwnd)?;
    let renderer = LayeredOverlay::new(hwnd, screen, factory, &settings);
    let mut app = PointerApp::new(screen, settings.animation_speed, renderer, tray.notifier());
    info!(
        left = screen.left,
        top = screen.top,
        width = screen.width,
        height = screen.height,
        speed = app.speed_multiplier(),
        "overlay ready"
    );

    let mut monitor = LowLevelMouseMonitor::new();
    let clicks = bus.publisher();
    if let Err(e) = monitor.start(Box::new(move |click| clicks.publish(AppEvent::Click(click)))) {
        app.input_unavailable(&e);
    }

    install_tick_handler(Box::new(move |now| {
        for request in dispatch_events(bus.drain(), &mut app, now) {
            match request {
                ShellRequest::ShowInstructions => show_instructions(),
                ShellRequest::Exit => {
                    info!("exit requested");
                    unsafe { PostQuitMessage(0) };
                }
            }
        }
    }));

    // On failure the overlay stays up with a static arrow.
    start_tick_timer(hwnd, TICK_INTERVAL_MS);

    let mut msg = MSG::default();
    while unsafe { GetMessageW(&mut msg, None, 0, 0) }.as_bool() {
        unsafe {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }

    if monitor.is_running() {
        monitor.stop();
    }
    stop_tick_timer(hwnd);
    // The coordinator holds the tray notifier; drop it before the icon.
    drop(take_tick_handler());
    drop(tray);
    unsafe {
        // Already gone if WM_DESTROY ended the loop.
        let _ = DestroyWindow(hwnd);
    }
    Ok(())
}
