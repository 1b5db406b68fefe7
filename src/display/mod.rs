//! Human-readable rendering of constants for consoles and logs.
pub mod format;

pub use format::{format_constant, format_listing, format_number, FormatOptions};
