//! Theme support for the range slider
//!
//! This module provides color schemes for the slider track, thumbs and the
//! surrounding demo window. It includes built-in themes (Light, Dark, Dracula,
//! One Dark Pro) and a centralized theme manager.
//!
//! # Examples
//!
//! ```
//! use rslider::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dracula = manager.get_theme("Dracula").unwrap();
//! println!("Dracula track: {:?}", dracula.colors.in_interval_track);
//! ```

use egui::Color32;
use std::collections::HashMap;

use crate::error::SliderError;

/// Complete color palette for a theme
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Window colors
    pub background: Color32,
    pub panel_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,

    // Slider colors
    pub in_interval_track: Color32,
    pub out_interval_track: Color32,
    pub thumb_tint: Color32,
    pub thumb_ring: Color32,
}

/// A complete theme definition with metadata and color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Centralized theme manager providing access to all available themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    /// Returned for unknown names
    fallback: Theme,
}

impl ThemeManager {
    /// Creates a new ThemeManager initialized with all built-in themes
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dark".to_string(), dark_theme());
        themes.insert("Dracula".to_string(), dracula_theme());
        themes.insert("One Dark Pro".to_string(), one_dark_pro_theme());

        Self {
            themes,
            fallback: light_theme(),
        }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Retrieves a theme by name, falling back to Light
    pub fn theme_or_default(&self, name: &str) -> &Theme {
        self.themes.get(name).unwrap_or(&self.fallback)
    }

    /// Returns a list of all available theme names
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.window_fill = colors.background;
        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.in_interval_track;
        visuals.selection.stroke.color = colors.thumb_tint;
        visuals.widgets.active.bg_fill = colors.in_interval_track;
        visuals.widgets.hovered.weak_bg_fill = adjust_brightness(colors.in_interval_track, 1.2);
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the Light theme, the palette of the original time picker
fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "White window with a blue selected interval".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(255, 255, 255),
            panel_background: Color32::from_rgb(255, 255, 255),

            text: Color32::from_rgb(135, 142, 152),
            text_dim: Color32::from_rgb(170, 175, 182),

            in_interval_track: Color32::from_rgb(26, 81, 195),
            out_interval_track: Color32::from_rgb(244, 246, 247),
            thumb_tint: Color32::from_rgb(26, 81, 195),
            thumb_ring: Color32::from_rgb(255, 255, 255),
        },
    }
}

/// Creates the Dark theme using egui defaults
fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark theme with egui default colors".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(39, 39, 39),
            panel_background: Color32::from_rgb(39, 39, 39),

            text: Color32::from_rgb(255, 255, 255),
            text_dim: Color32::from_rgb(160, 160, 160),

            in_interval_track: Color32::from_rgb(52, 152, 219),
            out_interval_track: Color32::from_rgb(70, 70, 70),
            thumb_tint: Color32::from_rgb(52, 152, 219),
            thumb_ring: Color32::from_rgb(16, 16, 16),
        },
    }
}

/// Creates the Dracula theme
///
/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Official Dracula theme color palette".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#282a36"),
            panel_background: hex_to_color32("#282a36"),

            text: hex_to_color32("#f8f8f2"),
            // Comment
            text_dim: hex_to_color32("#6272a4"),

            in_interval_track: hex_to_color32("#bd93f9"),
            // Current Line
            out_interval_track: hex_to_color32("#44475a"),
            thumb_tint: hex_to_color32("#ff79c6"),
            thumb_ring: hex_to_color32("#21222c"),
        },
    }
}

/// Creates the One Dark Pro theme
///
/// Official colors from: https://github.com/Binaryify/OneDark-Pro
fn one_dark_pro_theme() -> Theme {
    Theme {
        name: "One Dark Pro".to_string(),
        description: "VSCode One Dark Pro color palette".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#282c34"),
            panel_background: hex_to_color32("#282c34"),

            text: hex_to_color32("#abb2bf"),
            text_dim: hex_to_color32("#5c6370"),

            in_interval_track: hex_to_color32("#61afef"),
            // Gutter Grey
            out_interval_track: hex_to_color32("#4b5263"),
            thumb_tint: hex_to_color32("#98c379"),
            thumb_ring: hex_to_color32("#21252b"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    parse_hex_color(hex).unwrap_or(Color32::from_rgb(0, 0, 0))
}

/// Parses a `#rrggbb` or `#rrggbbaa` string, rejecting anything else
pub fn parse_hex_color(hex: &str) -> Result<Color32, SliderError> {
    let digits = hex.trim_start_matches('#');
    let invalid = || SliderError::InvalidColor(hex.to_string());

    if !(digits.len() == 6 || digits.len() == 8) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |start: usize| u8::from_str_radix(&digits[start..start + 2], 16).map_err(|_| invalid());
    let alpha = if digits.len() == 8 { channel(6)? } else { 255 };
    Ok(Color32::from_rgba_unmultiplied(channel(0)?, channel(2)?, channel(4)?, alpha))
}

/// Formats a color as `#rrggbb`, or `#rrggbbaa` when not opaque
pub fn color32_to_hex(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    if a == 255 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}
