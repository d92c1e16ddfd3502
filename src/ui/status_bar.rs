//! Status bar UI rendering
//!
//! Shows the raw slider values and the drag state.

use eframe::egui;
use egui::RichText;
use rslider::TrackingState;

use crate::app::AppState;

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    let slider = &state.slider;
    let dim = state.theme.colors().text_dim;
    let tracking = match slider.tracking_state() {
        TrackingState::Idle => "Idle",
        TrackingState::DraggingLower => "Dragging lower",
        TrackingState::DraggingUpper => "Dragging upper",
    };

    ui.horizontal(|ui| {
        ui.label(RichText::new(format!(
            "Range: {:.0}..{:.0} | Lower: {:.1} | Upper: {:.1}",
            slider.minimum_value(),
            slider.maximum_value(),
            slider.lower_value(),
            slider.upper_value()
        )).strong());
        ui.label(RichText::new("|").strong());
        ui.label(RichText::new(tracking).strong());
        if slider.is_animating() {
            ui.label(RichText::new("| Animating").strong());
        }
        ui.label(RichText::new(format!("| Layout passes: {}", slider.layout_passes())).color(dim));
    });
}
