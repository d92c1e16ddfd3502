//! Text formatting utilities for the range slider demo.
//!
//! Slider values in the demo are minutes since midnight.

/// Formats a minute-of-day value as `HH:MM`.
///
/// Fractional minutes are truncated and negative values clamp to `00:00`.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_minutes(0.0), "00:00");
/// assert_eq!(format_minutes(1439.0), "23:59");
/// ```
pub fn format_minutes(value: f32) -> String {
    let total = if value.is_finite() { value.max(0.0) as u32 } else { 0 };
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Formats an interval as `HH:MM - HH:MM`.
pub fn format_interval(lower: f32, upper: f32) -> String {
    format!("{} - {}", format_minutes(lower), format_minutes(upper))
}
