//! Utility modules for the range slider demo.

pub mod formatting;

pub use formatting::format_interval;
