//! Value/pixel conversions for the slider track.
//!
//! This module provides pure functions for:
//! - Mapping a value to the x offset of a thumb center
//! - Converting a horizontal pointer delta into a value delta
//! - Clamping a value between two bounds
//!
//! Thumbs are squares whose side equals the control height, so the distance a
//! thumb center can travel (the span) is the control width minus one thumb
//! diameter.

/// Immutable snapshot of everything the mapping depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MappingGeometry {
    /// Control width in points
    pub width: f32,
    /// Control height in points (equals the thumb diameter)
    pub height: f32,
    pub minimum_value: f32,
    pub maximum_value: f32,
}

impl MappingGeometry {
    pub fn new(width: f32, height: f32, minimum_value: f32, maximum_value: f32) -> Self {
        Self {
            width,
            height,
            minimum_value,
            maximum_value,
        }
    }

    pub fn thumb_diameter(&self) -> f32 {
        self.height
    }

    pub fn thumb_radius(&self) -> f32 {
        self.height / 2.0
    }

    /// Pixel distance available for thumb-center travel.
    pub fn span(&self) -> f32 {
        self.width - self.thumb_diameter()
    }

    /// Returns true if the span can be used for mapping.
    pub fn has_usable_span(&self) -> bool {
        self.span() > 0.0 && self.span().is_finite()
    }

    /// Returns true when `maximum_value <= minimum_value`.
    pub fn is_degenerate_range(&self) -> bool {
        !(self.maximum_value > self.minimum_value)
    }
}

/// Maps a value to the x offset of a thumb center, relative to the control's
/// left edge.
///
/// A degenerate range pins every value to the left edge. Values outside the
/// bounds are mapped as if clamped so thumbs always stay on the track.
///
/// # Arguments
/// * `value` - The value to convert
/// * `geometry` - Control size and range bounds
pub fn position_for_value(value: f32, geometry: &MappingGeometry) -> f32 {
    let radius = geometry.thumb_radius();
    if geometry.is_degenerate_range() || !value.is_finite() {
        return radius;
    }
    let normalized = ((value - geometry.minimum_value)
        / (geometry.maximum_value - geometry.minimum_value))
        .clamp(0.0, 1.0);
    radius + normalized * geometry.span()
}

/// Converts a horizontal pointer movement into a value delta.
///
/// Uses the same scale factor as [`position_for_value`] run in reverse, so
/// dragging by one span moves a value across the whole range. Returns 0.0 if
/// the span is unusable or the range is degenerate.
///
/// # Arguments
/// * `delta_x` - Pointer movement in points (current x minus previous x)
/// * `geometry` - Control size and range bounds
pub fn value_delta_for_pixels(delta_x: f32, geometry: &MappingGeometry) -> f32 {
    if !geometry.has_usable_span() || geometry.is_degenerate_range() {
        return 0.0;
    }
    (geometry.maximum_value - geometry.minimum_value) * delta_x / geometry.span()
}

/// Clamps `value` into `[lower, upper]`.
///
/// Unlike `f32::clamp` this never panics when `lower > upper`; the upper bound
/// wins, matching `min(max(value, lower), upper)`.
pub fn bound_value(value: f32, lower: f32, upper: f32) -> f32 {
    value.max(lower).min(upper)
}
