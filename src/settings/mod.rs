//! Settings persistence.

pub mod store;

pub use store::{JsonSettingsStore, SettingsStore};
