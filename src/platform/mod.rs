//! Platform-specific implementations.
//!
//! Only Windows has a backend. The core modules build and test everywhere.

#[cfg(target_os = "windows")]
pub mod windows;
