//! Dialog windows for Windows.

mod instructions;

pub use instructions::show_instructions;
