//! Application-level modules for the time picker demo.
//!
//! This module contains the main application coordinator and centralized state management.

mod app_state;
mod application_coordinator;
mod settings_coordinator;
mod theme_coordinator;
mod theme_state;

pub use app_state::AppState;
pub use application_coordinator::{ApplicationCoordinator, RESET_INTERVAL};
pub use settings_coordinator::SettingsCoordinator;
pub use theme_coordinator::ThemeCoordinator;
pub use theme_state::ThemeState;
