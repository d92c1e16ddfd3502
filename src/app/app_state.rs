//! Centralized application state for the time picker demo.

use std::cell::RefCell;
use std::rc::Rc;

use rslider::{RangeSlider, SliderConfig, SliderStyle, StyleSettings};

use crate::app::ThemeState;
use crate::presentation::ThumbTextures;
use crate::utils::format_interval;

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// The time-of-day range slider, over minutes of the day
    pub slider: RangeSlider,

    /// Theme and styling state
    pub theme: ThemeState,

    // ===== Top-Level State =====
    /// "HH:MM - HH:MM" text, kept current by the slider's change listener
    pub interval_label: Rc<RefCell<String>>,

    /// Whether the reset button animates the thumbs
    pub animate_reset: bool,

    /// Thumb textures and the theme they were rasterized for
    pub thumb_textures: Option<(String, ThumbTextures)>,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("slider", &self.slider)
            .field("theme", &self.theme)
            .field("interval_label", &self.interval_label.borrow())
            .field("error_message", &self.error_message)
            .finish_non_exhaustive()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ThemeState::default(), None, None)
    }
}

impl AppState {
    /// Creates the application state.
    ///
    /// # Arguments
    /// * `theme` - Theme state restored from storage
    /// * `config` - Slider config given on the command line; takes precedence over `stored_style`
    /// * `stored_style` - Style settings persisted by a previous session
    pub fn new(theme: ThemeState, config: Option<SliderConfig>, stored_style: Option<StyleSettings>) -> Self {
        let base = SliderStyle::from_theme(theme.colors());
        let has_config = config.is_some();
        let config = config.unwrap_or_default();

        let (mut slider, error_message) = match config.build(base.clone()) {
            Ok(slider) => (slider, None),
            Err(err) => {
                tracing::error!(error = %err, "slider config rejected, using defaults");
                let fallback = SliderConfig::default();
                (RangeSlider::with_style(fallback.values(), base), Some(err.to_string()))
            }
        };

        if let (false, Some(settings)) = (has_config, stored_style) {
            let mut style = slider.style().clone();
            style.apply_settings(&settings);
            slider.set_style(style);
        }

        let interval_label = Rc::new(RefCell::new(format_interval(slider.lower_value(), slider.upper_value())));
        let label = Rc::clone(&interval_label);
        slider.on_value_changed(move |lower, upper| {
            *label.borrow_mut() = format_interval(lower, upper);
        });

        Self {
            slider,
            theme,
            interval_label,
            animate_reset: true,
            thumb_textures: None,
            error_message,
        }
    }

    /// Re-reads the label from the slider after a programmatic change.
    pub fn refresh_interval_label(&mut self) {
        *self.interval_label.borrow_mut() = format_interval(self.slider.lower_value(), self.slider.upper_value());
    }

    /// Returns true if thumb textures exist for the current theme.
    pub fn has_current_thumb_textures(&self) -> bool {
        self.thumb_textures
            .as_ref()
            .is_some_and(|(theme, _)| theme == self.theme.current_theme_name())
    }
}
