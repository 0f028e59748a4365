use std::{collections::HashMap, path::PathBuf};

use core_types::Theme;
use serde_json::Value;

use crate::{error::Error, view_models::Settings};

/// Loads and stores user preferences as a JSON map in the data directory.
///
/// Settings are read once on start and written back on every change, callers keep
/// the returned [`Settings`] and pass it on explicitly.
#[derive(Debug)]
pub struct SettingsService {
    settings_path: PathBuf,
}

impl SettingsService {
    pub fn new(settings_path: PathBuf) -> Self {
        Self { settings_path }
    }

    pub fn settings_path(&self) -> &PathBuf {
        &self.settings_path
    }

    /// Load settings from the settings file.
    ///
    /// A missing file gives default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not a JSON object.
    pub async fn load_settings(&self) -> Result<Settings, Error> {
        if !async_std::path::Path::new(&self.settings_path).exists().await {
            tracing::debug!(path = %self.settings_path.display(), "No settings file, using defaults");
            return Ok(Settings::default());
        }

        let json = async_std::fs::read_to_string(&self.settings_path)
            .await
            .map_err(|e| Error::SettingsError(format!("Failed to read settings: {}", e)))?;
        let stored: HashMap<String, Value> = serde_json::from_str(&json)
            .map_err(|e| Error::SettingsError(format!("Failed to parse settings: {}", e)))?;

        // unknown keys may hold any JSON value, only strings are read
        let settings_map: HashMap<String, String> = stored
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(value) => Some((key, value)),
                _ => None,
            })
            .collect();

        Ok(Settings::from(settings_map))
    }

    /// Save settings to the settings file, replacing whatever was there.
    pub async fn save_settings(&self, settings: &Settings) -> Result<(), Error> {
        let settings_map: HashMap<String, String> = settings.into();
        let json = serde_json::to_string_pretty(&settings_map)?;

        if let Some(parent) = self.settings_path.parent() {
            async_std::fs::create_dir_all(parent).await?;
        }
        async_std::fs::write(&self.settings_path, json)
            .await
            .map_err(|e| Error::SettingsError(format!("Failed to save settings: {}", e)))?;

        tracing::info!(path = %self.settings_path.display(), "Settings saved");
        Ok(())
    }

    /// Change the theme and persist it right away.
    pub async fn set_theme(&self, settings: &Settings, theme: Theme) -> Result<Settings, Error> {
        if settings.theme == theme {
            return Ok(settings.clone());
        }
        let updated = Settings { theme };
        self.save_settings(&updated).await?;
        Ok(updated)
    }

    pub async fn toggle_theme(&self, settings: &Settings) -> Result<Settings, Error> {
        self.set_theme(settings, settings.theme.toggle()).await
    }
}
