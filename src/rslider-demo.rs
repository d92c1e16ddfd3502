//! Time-of-day range picker demo.
//!
//! A window with one range slider over the minutes of a day and a label
//! showing the selected interval as "HH:MM - HH:MM". The demo features:
//! - Image thumbs ("Ring" at rest, "Dot" while dragged) rasterized per theme
//! - An animated reset to 10:00 - 15:00
//! - Slider configs loaded from JSON (command line, file dialog or config dir)
//! - Multiple themes with persistent preferences

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use rslider::{SliderConfig, StyleSettings};
use tracing_subscriber::EnvFilter;

mod app;
mod presentation;
mod ui;
mod utils;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator, ThemeState};
use ui::panel_manager::{PanelInteraction, PanelManager};

const STYLE_KEY: &str = "slider_style";
const ANIMATE_RESET_KEY: &str = "animate_reset";

/// Main application entry point.
///
/// An optional first argument names a JSON slider config.
fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rslider=info,rslider_demo=info")),
        )
        .init();

    let config_path = std::env::args()
        .nth(1)
        .map(std::path::PathBuf::from)
        .or_else(ApplicationCoordinator::default_config_path);

    let mut startup_error = None;
    let config = config_path.and_then(|path| match SliderConfig::from_file(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "loaded slider config");
            Some(config)
        }
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "ignoring slider config");
            startup_error = Some(format!("{err:#}"));
            None
        }
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 280.0])
            .with_title("Time Range Picker"),
        ..Default::default()
    };

    eframe::run_native(
        "Time Range Picker",
        options,
        Box::new(move |cc| Ok(Box::new(PickerApp::new(cc, config, startup_error)))),
    )
}

/// The demo application, delegating to coordinators:
/// - `ApplicationCoordinator` handles resets, config loading and thumb images
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct PickerApp {
    state: AppState,
}

impl PickerApp {
    /// Creates the app with theme and style settings loaded from persistent storage.
    fn new(cc: &eframe::CreationContext, config: Option<SliderConfig>, startup_error: Option<String>) -> Self {
        let theme = ThemeState::with_theme(ThemeCoordinator::load_theme_from_storage(cc.storage));
        let stored_style: Option<StyleSettings> = SettingsCoordinator::try_load_setting(cc.storage, STYLE_KEY);

        let mut state = AppState::new(theme, config, stored_style);
        state.animate_reset = SettingsCoordinator::load_setting_or(cc.storage, ANIMATE_RESET_KEY, true);
        if state.error_message.is_none() {
            state.error_message = startup_error;
        }
        Self { state }
    }

    fn persist(&self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(storage, STYLE_KEY, &self.state.slider.style().to_settings());
        SettingsCoordinator::save_setting(storage, ANIMATE_RESET_KEY, &self.state.animate_reset);
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::OpenConfigRequested(path) => {
                ApplicationCoordinator::open_config(&mut self.state, &path);
            }
            PanelInteraction::ResetRequested => {
                ApplicationCoordinator::reset_interval(&mut self.state);
            }
            PanelInteraction::ThemeSelected(name) => {
                ApplicationCoordinator::change_theme(&mut self.state, &name);
            }
            PanelInteraction::IntervalDragged => {
                tracing::trace!(label = %self.state.interval_label.borrow(), "interval dragged");
            }
        }
    }
}

impl eframe::App for PickerApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.persist(storage);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ThemeCoordinator::apply_current_theme(ctx, &self.state);
        ApplicationCoordinator::ensure_thumb_images(&mut self.state, ctx);
        ApplicationCoordinator::handle_keyboard(&mut self.state, ctx);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction);
            ctx.request_repaint();
        }
    }
}
