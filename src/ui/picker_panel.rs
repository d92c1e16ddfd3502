//! Central panel: the selected interval as text above the range slider.

use eframe::egui;
use egui::RichText;
use rslider::RangeSliderWidget;

use crate::app::AppState;

/// Horizontal margin around the slider.
const SIDE_MARGIN: f32 = 40.0;

/// Renders the interval label and the slider
///
/// # Returns
/// * `bool` - True if a drag changed the values this frame
pub fn render_picker_panel(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    let text_color = state.theme.colors().text;
    let mut changed = false;

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);
        let label = state.interval_label.borrow().clone();
        ui.label(RichText::new(label).size(28.0).color(text_color));
        ui.add_space(16.0);

        ui.horizontal(|ui| {
            ui.add_space(SIDE_MARGIN);
            let width = (ui.available_width() - SIDE_MARGIN).max(0.0);
            let response = ui.add(RangeSliderWidget::new(&mut state.slider).width(width));
            changed = response.changed();
        });
    });

    changed
}
