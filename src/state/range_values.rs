//! The four numeric values of a range slider.
//!
//! Direct assignment stores what it is given; only the drag helpers and
//! [`RangeValues::assign_clamped`] enforce `min <= lower <= upper <= max`.

use crate::domain::{bound_value, value_delta_for_pixels, MappingGeometry};
use crate::state::ThumbKind;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RangeValues {
    pub minimum_value: f32,
    pub maximum_value: f32,
    pub lower_value: f32,
    pub upper_value: f32,
}

impl RangeValues {
    pub fn new(minimum_value: f32, maximum_value: f32, lower_value: f32, upper_value: f32) -> Self {
        Self {
            minimum_value,
            maximum_value,
            lower_value,
            upper_value,
        }
    }

    /// Full range selected.
    pub fn full(minimum_value: f32, maximum_value: f32) -> Self {
        Self::new(minimum_value, maximum_value, minimum_value, maximum_value)
    }

    pub fn value(&self, kind: ThumbKind) -> f32 {
        match kind {
            ThumbKind::Lower => self.lower_value,
            ThumbKind::Upper => self.upper_value,
        }
    }

    /// Returns true if `min <= lower <= upper <= max` holds.
    pub fn is_ordered(&self) -> bool {
        self.minimum_value <= self.lower_value
            && self.lower_value <= self.upper_value
            && self.upper_value <= self.maximum_value
    }

    pub fn geometry(&self, width: f32, height: f32) -> MappingGeometry {
        MappingGeometry::new(width, height, self.minimum_value, self.maximum_value)
    }

    /// Sets both interval ends, each clamped to `[min, max]`.
    ///
    /// `lower > upper` is left as given.
    pub fn assign_clamped(&mut self, lower: f32, upper: f32) {
        self.lower_value = bound_value(lower, self.minimum_value, self.maximum_value);
        self.upper_value = bound_value(upper, self.minimum_value, self.maximum_value);
    }

    /// Applies a pointer delta to the captured thumb's value.
    ///
    /// The lower value is kept within `[min, upper]` and the upper value within
    /// `[lower, max]`, so the thumbs never cross. Returns the new value.
    pub fn drag(&mut self, kind: ThumbKind, delta_x: f32, geometry: &MappingGeometry) -> f32 {
        let delta = value_delta_for_pixels(delta_x, geometry);
        match kind {
            ThumbKind::Lower => {
                self.lower_value =
                    bound_value(self.lower_value + delta, self.minimum_value, self.upper_value);
                self.lower_value
            }
            ThumbKind::Upper => {
                self.upper_value =
                    bound_value(self.upper_value + delta, self.lower_value, self.maximum_value);
                self.upper_value
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_clamped_keeps_order_as_given() {
        let mut values = RangeValues::full(0.0, 100.0);
        values.assign_clamped(-5.0, 150.0);
        assert_eq!((values.lower_value, values.upper_value), (0.0, 100.0));

        values.assign_clamped(80.0, 20.0);
        assert_eq!((values.lower_value, values.upper_value), (80.0, 20.0));
        assert!(!values.is_ordered());
    }

    #[test]
    fn test_drag_lower_stops_at_upper() {
        let mut values = RangeValues::new(0.0, 100.0, 10.0, 40.0);
        let g = values.geometry(124.0, 24.0);

        assert_eq!(values.drag(ThumbKind::Lower, 20.0, &g), 30.0);
        assert_eq!(values.drag(ThumbKind::Lower, 50.0, &g), 40.0);
        assert!(values.is_ordered());
    }

    #[test]
    fn test_drag_upper_stops_at_lower_and_max() {
        let mut values = RangeValues::new(0.0, 100.0, 10.0, 40.0);
        let g = values.geometry(124.0, 24.0);

        assert_eq!(values.drag(ThumbKind::Upper, -100.0, &g), 10.0);
        assert_eq!(values.drag(ThumbKind::Upper, 500.0, &g), 100.0);
    }
}
