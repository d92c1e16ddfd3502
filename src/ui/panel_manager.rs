//! Panel orchestration and layout management.

use crate::app::AppState;
use crate::ui::{header, picker_panel, status_bar};

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to load a slider config
    OpenConfigRequested(std::path::PathBuf),
    /// User requested the reset interval
    ResetRequested,
    /// User picked another theme
    ThemeSelected(String),
    /// A drag moved the thumbs
    IntervalDragged,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenConfigRequested(path) => {
                        PanelInteraction::OpenConfigRequested(path)
                    }
                    header::HeaderInteraction::ResetRequested => PanelInteraction::ResetRequested,
                    header::HeaderInteraction::ThemeSelected(name) => PanelInteraction::ThemeSelected(name),
                });
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let picker_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(8))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default().frame(picker_frame).show(ctx, |ui| {
            if picker_panel::render_picker_panel(ui, state) && interaction.is_none() {
                interaction = Some(PanelInteraction::IntervalDragged);
            }
        });

        interaction
    }
}
