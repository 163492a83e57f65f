//! Application settings
//!
//! User preferences for how results are shown. Persisted to
//! ~/Library/Application Support/Coffee Ratio Calculator/app_settings.json
//! (or the platform data directory elsewhere). Presets are never stored here.

use log::Level;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Largest number of decimals shown in summaries
pub const MAX_DECIMAL_PLACES: usize = 6;

/// Application-wide settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Decimals shown for volumes and masses
    pub decimal_places: usize,
    /// Show debug output in the terminal (the log file always gets it)
    pub verbose_logging: bool,
    /// Show grounds in scoops next to grams
    pub show_scoops: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            decimal_places: 2,
            verbose_logging: false,
            show_scoops: true,
        }
    }
}

impl AppSettings {
    const SETTINGS_FILE: &'static str = "app_settings.json";

    /// Get the app data directory (~/Library/Application Support/Coffee Ratio Calculator/)
    fn get_app_data_dir() -> Result<PathBuf, String> {
        let data_dir =
            dirs::data_dir().ok_or_else(|| "Could not determine data directory".to_string())?;

        let app_dir = data_dir.join("Coffee Ratio Calculator");

        // Create directory if it doesn't exist
        if !app_dir.exists() {
            std::fs::create_dir_all(&app_dir)
                .map_err(|e| format!("Failed to create app data directory: {}", e))?;
        }

        Ok(app_dir)
    }

    /// Path of the settings file in the app data directory
    pub fn settings_path() -> Result<PathBuf, String> {
        Ok(Self::get_app_data_dir()?.join(Self::SETTINGS_FILE))
    }

    /// Load app settings from disk, or return defaults if not found
    ///
    /// Runs before logging is set up, so what happened is returned as notes
    /// for the caller to log afterwards.
    pub fn load() -> LoadedSettings {
        match Self::settings_path() {
            Ok(path) => Self::load_at(&path),
            Err(e) => LoadedSettings::defaults(format!("Using default app settings: {}", e)),
        }
    }

    /// Load from `path`, creating it with the defaults if it does not exist
    fn load_at(path: &Path) -> LoadedSettings {
        // First run: write the defaults
        if !path.exists() {
            let mut loaded =
                LoadedSettings::defaults(format!("Created settings file {:?}", path));
            if let Err(e) = loaded.settings.save_to(path) {
                let note = format!("Could not write default settings: {}", e);
                loaded.notes = vec![(Level::Debug, note)];
            }
            return loaded;
        }

        match Self::read_from(path) {
            Ok((settings, clamped)) => {
                let note = format!("Loaded app settings from {:?}", path);
                let mut notes = vec![(Level::Debug, note)];
                notes.extend(clamped.map(|warning| (Level::Warn, warning)));
                LoadedSettings { settings, notes }
            }
            Err(e) => LoadedSettings::defaults(format!("Using default app settings: {}", e)),
        }
    }

    /// Load settings from a specific file
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let (settings, clamped) = Self::read_from(path)?;
        if let Some(warning) = clamped {
            log::warn!("{}", warning);
        }
        Ok(settings)
    }

    /// Parse and normalize a settings file, returning any clamp warning
    fn read_from(path: &Path) -> Result<(Self, Option<String>), String> {
        if !path.exists() {
            return Err("Settings file not found".to_string());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read settings: {}", e))?;

        let settings: Self = serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse settings: {}", e))?;

        Ok(settings.normalized())
    }

    /// Save settings to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        std::fs::write(path, json).map_err(|e| format!("Failed to write settings: {}", e))?;

        log::debug!("Saved app settings to {:?}", path);
        Ok(())
    }

    fn normalized(mut self) -> (Self, Option<String>) {
        // Clamp decimals to what summaries support
        if self.decimal_places > MAX_DECIMAL_PLACES {
            let warning = format!(
                "decimal_places {} is too large, using {}",
                self.decimal_places, MAX_DECIMAL_PLACES
            );
            self.decimal_places = MAX_DECIMAL_PLACES;
            return (self, Some(warning));
        }
        (self, None)
    }
}

/// Settings read at startup, plus log lines deferred until logging is up
#[derive(Debug)]
pub struct LoadedSettings {
    pub settings: AppSettings,
    pub notes: Vec<(Level, String)>,
}

impl LoadedSettings {
    fn defaults(note: String) -> Self {
        Self {
            settings: AppSettings::default(),
            notes: vec![(Level::Debug, note)],
        }
    }

    /// Log the deferred notes
    pub fn log_notes(&self) {
        for (level, note) in &self.notes {
            log::log!(*level, "{}", note);
        }
    }
}
