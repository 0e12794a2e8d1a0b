//! UI components for Windows.

pub mod dialogs;
pub mod overlay;
pub mod tray;

pub use dialogs::show_instructions;
pub use overlay::{
    create_overlay_window, enable_dpi_awareness, install_tick_handler, start_tick_timer,
    stop_tick_timer, take_tick_handler, virtual_screen, LayeredOverlay,
};
pub use tray::{TrayIcon, TrayNotifier};
