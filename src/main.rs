#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

//! You Are Here: click-driven arrow pointer overlay.

#[cfg(target_os = "windows")]
mod windows_main;

fn main() {
    you_are_here::logging::init();

    #[cfg(target_os = "windows")]
    windows_main::run();

    #[cfg(not(target_os = "windows"))]
    {
        tracing::error!("the overlay is only available on Windows");
        std::process::exit(1);
    }
}
