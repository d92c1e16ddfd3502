//! Theme selection state for the demo window.

use rslider::{ThemeColors, ThemeManager};

/// Default theme, the palette of the original time picker.
pub const DEFAULT_THEME: &str = "Light";

/// State related to visual theme and styling.
pub struct ThemeState {
    theme_manager: ThemeManager,
    current_theme_name: String,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current_theme_name", &self.current_theme_name)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::with_theme(DEFAULT_THEME.to_string())
    }
}

impl ThemeState {
    /// Creates a theme state with a specific theme. Unknown names fall back
    /// to the default theme.
    ///
    /// # Arguments
    /// * `theme_name` - The name of the theme to use
    pub fn with_theme(theme_name: String) -> Self {
        let theme_manager = ThemeManager::new();
        let current_theme_name = if theme_manager.get_theme(&theme_name).is_some() {
            theme_name
        } else {
            tracing::warn!(theme = %theme_name, "unknown theme, using {}", DEFAULT_THEME);
            DEFAULT_THEME.to_string()
        };
        Self {
            theme_manager,
            current_theme_name,
        }
    }

    // ===== Theme Queries =====

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    /// Colors of the current theme.
    pub fn colors(&self) -> &ThemeColors {
        &self.theme_manager.theme_or_default(&self.current_theme_name).colors
    }

    // ===== Theme Mutations =====

    /// Sets the current theme by name. Returns false for unknown names.
    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        if self.theme_manager.get_theme(theme_name).is_none() {
            return false;
        }
        self.current_theme_name = theme_name.to_string();
        true
    }
}
