//! Event handlers and dispatching.

pub mod dispatcher;

pub use dispatcher::{dispatch_events, ShellRequest};
