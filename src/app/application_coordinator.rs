//! Application-level coordination logic.
//!
//! Reacts to panel interactions and keeps the slider in step with the
//! selected theme.

use std::path::{Path, PathBuf};

use rslider::{SliderConfig, SliderStyle, ThumbImages, TrackingState};

use crate::app::AppState;
use crate::presentation::ThumbTextures;

/// Interval selected by the reset button, 10:00 to 15:00 in minutes.
pub const RESET_INTERVAL: (f32, f32) = (600.0, 900.0);

/// Coordinates high-level application operations.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Rasterizes the "Ring" and "Dot" thumb images for the current theme if
    /// they are missing or stale, and installs them on the slider.
    pub fn ensure_thumb_images(state: &mut AppState, ctx: &egui::Context) {
        if state.has_current_thumb_textures() {
            return;
        }
        let colors = state.theme.colors();
        let textures = ThumbTextures::load(ctx, colors.thumb_tint, colors.thumb_ring);
        let images = ThumbImages::from_provider(&textures, "Ring", "Dot");

        let mut style = state.slider.style().clone();
        style.lower_thumb_image = images.resting;
        style.upper_thumb_image = images.resting;
        style.active_lower_thumb_image = images.active;
        style.active_upper_thumb_image = images.active;
        state.slider.set_style(style);

        tracing::debug!(theme = state.theme.current_theme_name(), "thumb images installed");
        state.thumb_textures = Some((state.theme.current_theme_name().to_string(), textures));
    }

    /// Switches theme and recolors the slider. Roundness and animation
    /// duration survive the switch.
    pub fn change_theme(state: &mut AppState, theme_name: &str) {
        if !state.theme.set_theme(theme_name) {
            state.error_message = Some(format!("Unknown theme: {theme_name}"));
            return;
        }
        let previous = state.slider.style().clone();
        let mut style = SliderStyle::from_theme(state.theme.colors());
        style.set_roundness(previous.roundness());
        style.animation_duration = previous.animation_duration;
        state.slider.set_style(style);
        state.thumb_textures = None;
        tracing::info!(theme = theme_name, "theme changed");
    }

    /// Moves the thumbs to the reset interval.
    pub fn reset_interval(state: &mut AppState) {
        let (lower, upper) = RESET_INTERVAL;
        match state.slider.set_value(lower, upper, state.animate_reset) {
            Ok(()) => {
                state.error_message = None;
                state.refresh_interval_label();
            }
            Err(err) => {
                tracing::warn!(error = %err, "reset rejected");
                state.error_message = Some(err.to_string());
            }
        }
    }

    /// Loads a JSON slider config and applies it to the running slider.
    pub fn open_config(state: &mut AppState, path: &Path) {
        let result = SliderConfig::from_file(path)
            .and_then(|config| Ok(config.apply_to(&mut state.slider, state.animate_reset)?));
        match result {
            Ok(()) => {
                tracing::info!(path = %path.display(), "slider config applied");
                state.error_message = None;
                state.refresh_interval_label();
            }
            Err(err) => {
                tracing::error!(path = %path.display(), error = %format!("{err:#}"), "failed to apply slider config");
                state.error_message = Some(format!("{err:#}"));
            }
        }
    }

    /// Config picked up when none is given on the command line.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("rslider").join("slider.json"))
            .filter(|path| path.is_file())
    }

    /// Escape aborts a drag in progress and leaves the values where they are.
    pub fn handle_keyboard(state: &mut AppState, ctx: &egui::Context) {
        if state.slider.tracking_state() == TrackingState::Idle {
            return;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            state.slider.cancel_tracking();
            state.refresh_interval_label();
        }
    }
}
