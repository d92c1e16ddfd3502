//! JSON configuration for a range slider.
//!
//! A config describes the initial values and the style colors. It is
//! validated before being applied, so a slider never starts from an invalid
//! range.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::SliderError;
use crate::range_slider::RangeSlider;
use crate::state::{RangeValues, DEFAULT_ANIMATION_DURATION};
use crate::style::SliderStyle;
use crate::theme::parse_hex_color;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub minimum_value: f32,
    pub maximum_value: f32,
    pub lower_value: f32,
    pub upper_value: f32,
    pub roundness: f32,
    pub in_interval_color: Option<String>,
    pub out_interval_color: Option<String>,
    pub thumb_tint: Option<String>,
    pub animation_duration: f32,
}

impl Default for SliderConfig {
    /// Minutes of a day, fully selected.
    fn default() -> Self {
        Self {
            minimum_value: 0.0,
            maximum_value: 1439.0,
            lower_value: 0.0,
            upper_value: 1439.0,
            roundness: 1.0,
            in_interval_color: None,
            out_interval_color: None,
            thumb_tint: None,
            animation_duration: DEFAULT_ANIMATION_DURATION,
        }
    }
}

impl SliderConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SliderConfig = serde_json::from_str(json).context("Failed to parse slider config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read slider config {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("Invalid slider config {}", path.display()))
    }

    /// Checks that values are finite, bounds and interval are ordered, and
    /// colors parse.
    pub fn validate(&self) -> Result<(), SliderError> {
        let fields = [
            ("minimum_value", self.minimum_value),
            ("maximum_value", self.maximum_value),
            ("lower_value", self.lower_value),
            ("upper_value", self.upper_value),
            ("roundness", self.roundness),
            ("animation_duration", self.animation_duration),
        ];
        for (field, value) in fields {
            crate::error::ensure_finite(field, value)?;
        }

        if self.minimum_value > self.maximum_value {
            return Err(SliderError::InvalidBounds {
                min: self.minimum_value,
                max: self.maximum_value,
            });
        }
        if !self.values().is_ordered() {
            return Err(SliderError::InvalidBounds {
                min: self.lower_value,
                max: self.upper_value,
            });
        }
        if !(0.0..=1.0).contains(&self.roundness) {
            return Err(SliderError::InvalidRoundness(self.roundness));
        }
        for color in [&self.in_interval_color, &self.out_interval_color, &self.thumb_tint]
            .into_iter()
            .flatten()
        {
            parse_hex_color(color)?;
        }
        Ok(())
    }

    pub fn values(&self) -> RangeValues {
        RangeValues::new(self.minimum_value, self.maximum_value, self.lower_value, self.upper_value)
    }

    /// Applies colors, roundness and duration on top of `base`.
    pub fn style(&self, base: SliderStyle) -> Result<SliderStyle, SliderError> {
        let mut style = base;
        if let Some(color) = &self.in_interval_color {
            style.in_interval_track_color = parse_hex_color(color)?;
        }
        if let Some(color) = &self.out_interval_color {
            style.out_interval_track_color = parse_hex_color(color)?;
        }
        if let Some(color) = &self.thumb_tint {
            style.thumb_tint_color = parse_hex_color(color)?;
        }
        style.set_roundness(self.roundness);
        style.animation_duration = self.animation_duration.max(0.0);
        Ok(style)
    }

    /// Builds a slider from this config with `base` as the starting style.
    pub fn build(&self, base: SliderStyle) -> Result<RangeSlider, SliderError> {
        self.validate()?;
        Ok(RangeSlider::with_style(self.values(), self.style(base)?))
    }

    /// Applies this config to an existing slider, keeping its listeners and
    /// thumb images. Values move with a single layout pass.
    pub fn apply_to(&self, slider: &mut RangeSlider, animate: bool) -> Result<(), SliderError> {
        self.validate()?;
        let style = self.style(slider.style().clone())?;
        slider.reconfigure(
            self.minimum_value,
            self.maximum_value,
            self.lower_value,
            self.upper_value,
            animate,
        )?;
        slider.set_style(style);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_day_range() {
        let config = SliderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.values(), RangeValues::full(0.0, 1439.0));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SliderConfig::from_json_str(r#"{ "lower_value": 600, "upper_value": 900 }"#).unwrap();
        assert_eq!(config.maximum_value, 1439.0);
        assert_eq!(config.lower_value, 600.0);
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let err = SliderConfig::from_json_str(
            r#"{ "minimum_value": 10, "maximum_value": 0, "lower_value": 0, "upper_value": 0 }"#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("invalid bounds"));
    }

    #[test]
    fn test_rejects_bad_color_and_roundness() {
        let config = SliderConfig {
            in_interval_color: Some("blue".to_string()),
            ..SliderConfig::default()
        };
        assert_eq!(config.validate(), Err(SliderError::InvalidColor("blue".to_string())));

        let config = SliderConfig {
            roundness: 2.0,
            ..SliderConfig::default()
        };
        assert_eq!(config.validate(), Err(SliderError::InvalidRoundness(2.0)));
    }

    #[test]
    fn test_build_applies_style() {
        let config = SliderConfig {
            in_interval_color: Some("#1a51c3".to_string()),
            roundness: 0.5,
            ..SliderConfig::default()
        };
        let slider = config.build(SliderStyle::default()).unwrap();
        assert_eq!(slider.style().in_interval_track_color, egui::Color32::from_rgb(26, 81, 195));
        assert_eq!(slider.style().roundness(), 0.5);
        assert_eq!(slider.upper_value(), 1439.0);
    }

    #[test]
    fn test_apply_to_existing_slider() {
        let mut slider = RangeSlider::new(0.0, 100.0);
        slider.layout(egui::vec2(300.0, 24.0));
        let config = SliderConfig {
            lower_value: 600.0,
            upper_value: 900.0,
            roundness: 0.0,
            ..SliderConfig::default()
        };

        config.apply_to(&mut slider, false).unwrap();

        assert_eq!(slider.maximum_value(), 1439.0);
        assert_eq!(slider.lower_value(), 600.0);
        assert_eq!(slider.upper_value(), 900.0);
        assert_eq!(slider.style().roundness(), 0.0);
    }

    #[test]
    fn test_apply_to_animates_from_displayed_thumbs() {
        let mut slider = RangeSlider::new(0.0, 100.0);
        slider.layout(egui::vec2(300.0, 24.0));
        let passes = slider.layout_passes();
        let upper_before = slider.displayed_frames().unwrap().upper_center_x();
        let config = SliderConfig {
            lower_value: 600.0,
            upper_value: 900.0,
            ..SliderConfig::default()
        };

        config.apply_to(&mut slider, true).unwrap();

        assert_eq!(slider.layout_passes(), passes + 1);
        assert!(slider.is_animating());
        assert_eq!(slider.displayed_frames().unwrap().upper_center_x(), upper_before);
        let target = slider.frames().unwrap().upper_center_x();
        assert!((target - slider.position_for_value(900.0)).abs() < 1e-3);

        slider.advance(1.0);
        slider.advance(2.0);
        assert_eq!(slider.displayed_frames().unwrap().upper_center_x(), target);
    }

    #[test]
    fn test_apply_to_rejects_invalid_config() {
        let mut slider = RangeSlider::new(0.0, 100.0);
        let config = SliderConfig {
            animation_duration: f32::NAN,
            ..SliderConfig::default()
        };
        assert!(config.apply_to(&mut slider, false).is_err());
        assert_eq!(slider.maximum_value(), 100.0);
    }
}
