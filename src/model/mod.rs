//! Application domain model.
//!
//! This module contains pure data types (no FFI dependencies): the arrow
//! state enum, screen geometry, the settings record and configuration
//! constants.
//!
//! Settings persistence lives in `settings`; platform code lives in
//! `platform::windows`.

pub mod arrow_state;
pub mod constants;
pub mod geometry;
pub mod settings;

pub use arrow_state::ArrowState;
pub use constants::*;
pub use geometry::{Point, VirtualScreen};
pub use settings::Settings;
