//! Generic settings persistence coordination.
//!
//! Settings are stored in eframe's persistent storage as JSON strings.

use serde::{Deserialize, Serialize};

/// Coordinates generic settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Attempts to load a setting, returning None if not found or invalid.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    ///
    /// # Examples
    /// ```ignore
    /// let style: Option<StyleSettings> = SettingsCoordinator::try_load_setting(storage, "slider_style");
    /// ```
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "discarding unreadable setting");
                None
            }
        }
    }

    /// Loads a setting with a custom default.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Saves a setting to persistent storage.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface (mutable)
    /// * `key` - The storage key for this setting
    /// * `value` - The value to serialize and save
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(err) => tracing::warn!(key, error = %err, "failed to serialize setting"),
        }
    }
}
