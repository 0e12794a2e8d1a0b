//! Overlay window and its Direct2D renderer.

pub mod renderer;
pub mod window;

pub use renderer::LayeredOverlay;
pub use window::{
    create_overlay_window, enable_dpi_awareness, install_tick_handler, start_tick_timer,
    stop_tick_timer, take_tick_handler, virtual_screen, TickHandler, TICK_TIMER_ID,
};
