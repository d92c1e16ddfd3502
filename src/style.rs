//! Presentation attributes of the slider.
//!
//! Style has no behavioral invariants beyond `roundness` staying in `[0, 1]`.

use egui::{Color32, TextureId};
use serde::{Deserialize, Serialize};

use crate::state::{ThumbImages, DEFAULT_ANIMATION_DURATION};
use crate::theme::{color32_to_hex, hex_to_color32, ThemeColors};

#[derive(Debug, Clone, PartialEq)]
pub struct SliderStyle {
    pub in_interval_track_color: Color32,
    pub out_interval_track_color: Color32,
    roundness: f32,
    pub thumb_tint_color: Color32,
    pub lower_thumb_image: Option<TextureId>,
    pub upper_thumb_image: Option<TextureId>,
    pub active_lower_thumb_image: Option<TextureId>,
    pub active_upper_thumb_image: Option<TextureId>,
    /// Seconds an animated `set_value` takes
    pub animation_duration: f32,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            in_interval_track_color: Color32::from_rgb(0, 122, 255),
            out_interval_track_color: Color32::TRANSPARENT,
            roundness: 1.0,
            thumb_tint_color: Color32::from_rgb(0, 122, 255),
            lower_thumb_image: None,
            upper_thumb_image: None,
            active_lower_thumb_image: None,
            active_upper_thumb_image: None,
            animation_duration: DEFAULT_ANIMATION_DURATION,
        }
    }
}

impl SliderStyle {
    /// Style using a theme's slider colors.
    pub fn from_theme(colors: &ThemeColors) -> Self {
        Self {
            in_interval_track_color: colors.in_interval_track,
            out_interval_track_color: colors.out_interval_track,
            thumb_tint_color: colors.thumb_tint,
            ..Self::default()
        }
    }

    pub fn roundness(&self) -> f32 {
        self.roundness
    }

    /// Sets the corner roundness, clamped to `[0, 1]`. NaN becomes 0.
    pub fn set_roundness(&mut self, roundness: f32) {
        self.roundness = if roundness.is_nan() { 0.0 } else { roundness.clamp(0.0, 1.0) };
    }

    pub fn lower_images(&self) -> ThumbImages {
        ThumbImages {
            resting: self.lower_thumb_image,
            active: self.active_lower_thumb_image,
        }
    }

    pub fn upper_images(&self) -> ThumbImages {
        ThumbImages {
            resting: self.upper_thumb_image,
            active: self.active_upper_thumb_image,
        }
    }

    /// Serializable part of the style, for settings storage.
    pub fn to_settings(&self) -> StyleSettings {
        StyleSettings {
            in_interval_color: color32_to_hex(self.in_interval_track_color),
            out_interval_color: color32_to_hex(self.out_interval_track_color),
            thumb_tint: color32_to_hex(self.thumb_tint_color),
            roundness: self.roundness,
            animation_duration: self.animation_duration,
        }
    }

    /// Overwrites colors, roundness and duration from stored settings.
    pub fn apply_settings(&mut self, settings: &StyleSettings) {
        self.in_interval_track_color = hex_to_color32(&settings.in_interval_color);
        self.out_interval_track_color = hex_to_color32(&settings.out_interval_color);
        self.thumb_tint_color = hex_to_color32(&settings.thumb_tint);
        self.set_roundness(settings.roundness);
        self.animation_duration = settings.animation_duration.max(0.0);
    }
}

/// Persisted style settings. Images are runtime resources and not stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSettings {
    pub in_interval_color: String,
    pub out_interval_color: String,
    pub thumb_tint: String,
    pub roundness: f32,
    pub animation_duration: f32,
}
