//! Built-in log functions

pub mod fan_out;
pub mod json;
pub mod text;

pub use fan_out::{fan_out, FanOut};
pub use json::JsonLogFunction;
pub use text::TextLogFunction;

pub use crate::core::LogFunction;

/// Line terminator appended to every formatted message.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";
