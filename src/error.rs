//! Error type for slider configuration and value assignment.
//!
//! Normal interaction never fails: drag input is clamped and degenerate
//! geometry is a no-op. Errors are only raised when a host hands the control
//! input it cannot represent.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SliderError {
    /// A value setter received NaN or an infinity.
    #[error("{field} must be a finite number, got {value}")]
    NonFiniteValue { field: &'static str, value: f32 },

    /// `minimum_value` is greater than `maximum_value`.
    #[error("invalid bounds: minimum {min} is greater than maximum {max}")]
    InvalidBounds { min: f32, max: f32 },

    /// Range bounds cannot change while a thumb is captured.
    #[error("range bounds cannot change while a thumb is being dragged")]
    BoundsLockedDuringDrag,

    #[error("roundness must be within 0.0..=1.0, got {0}")]
    InvalidRoundness(f32),

    #[error("invalid color '{0}', expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),
}

/// Rejects NaN and infinities, naming the offending field.
pub(crate) fn ensure_finite(field: &'static str, value: f32) -> Result<f32, SliderError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SliderError::NonFiniteValue { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("lower_value", 3.5), Ok(3.5));
        assert!(matches!(
            ensure_finite("lower_value", f32::NAN),
            Err(SliderError::NonFiniteValue { field: "lower_value", .. })
        ));
        assert!(ensure_finite("upper_value", f32::INFINITY).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = SliderError::InvalidBounds { min: 5.0, max: 1.0 };
        assert_eq!(err.to_string(), "invalid bounds: minimum 5 is greater than maximum 1");
        assert_eq!(
            SliderError::BoundsLockedDuringDrag.to_string(),
            "range bounds cannot change while a thumb is being dragged"
        );
    }
}
