//! Header panel UI rendering
//!
//! Handles the top bar with config loading, the reset button, roundness control and theme selector.

use eframe::egui;
use egui::Color32;
use std::path::PathBuf;

use crate::app::{AppState, RESET_INTERVAL};
use crate::utils::format_interval;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a slider config file
    OpenConfigRequested(PathBuf),
    /// User clicked the reset button
    ResetRequested,
    /// User picked another theme
    ThemeSelected(String),
}

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open Config").clicked() {
            let mut dialog = rfd::FileDialog::new().add_filter("Slider Config", &["json"]);
            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }
            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenConfigRequested(path));
            }
        }

        ui.separator();

        let (lower, upper) = RESET_INTERVAL;
        if ui.button(format!("⟲ Reset {}", format_interval(lower, upper))).clicked() {
            interaction = Some(HeaderInteraction::ResetRequested);
        }
        ui.checkbox(&mut state.animate_reset, "Animate");

        ui.separator();

        let mut roundness = state.slider.style().roundness();
        let roundness_response = ui.add(egui::Slider::new(&mut roundness, 0.0..=1.0).text("Roundness"));
        if roundness_response.changed() {
            state.slider.set_roundness(roundness);
        }

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut selected = state.theme.current_theme_name().to_string();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&selected)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut selected, theme_name.to_string(), theme_name);
                    }
                });

            if selected != state.theme.current_theme_name() {
                interaction = Some(HeaderInteraction::ThemeSelected(selected));
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}
