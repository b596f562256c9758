//! Game rules
//!
//! Persisted separately from game saves in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_WINNING_VALUE, MAX_TILE};

/// Rejected settings
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("winning value must be a power of two from 4 to {max}, got {0}", max = MAX_TILE)]
    InvalidWinningValue(u32),
}

/// Rule configuration supplied when a game starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Tile value that wins (e.g. 512 or 2048)
    pub winning_value: u32,
    /// Allow play to continue after the winning tile appears
    #[serde(default)]
    pub continue_after_win: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            winning_value: DEFAULT_WINNING_VALUE,
            continue_after_win: false,
        }
    }
}

impl Settings {
    pub fn with_winning_value(mut self, winning_value: u32) -> Self {
        self.winning_value = winning_value;
        self
    }

    /// Spawned tiles are 2 or 4, so anything below 4, above the largest
    /// reachable tile, or not a power of two is won at once or never
    pub fn validate(&self) -> Result<(), SettingsError> {
        let value = self.winning_value;
        if !(4..=MAX_TILE).contains(&value) || !value.is_power_of_two() {
            return Err(SettingsError::InvalidWinningValue(self.winning_value));
        }
        Ok(())
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Option<Self> {
        let settings: Settings = serde_json::from_str(json).ok()?;
        match settings.validate() {
            Ok(()) => Some(settings),
            Err(e) => {
                log::warn!("Ignoring stored settings: {e}");
                None
            }
        }
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "slide_2048_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let settings = Settings::default();
        assert_eq!(settings.winning_value, 2048);
        assert!(!settings.continue_after_win);
        assert_eq!(settings.validate(), Ok(()));
    }

    #[test]
    fn test_validate_winning_value() {
        assert!(Settings::default().with_winning_value(512).validate().is_ok());
        assert!(Settings::default().with_winning_value(4).validate().is_ok());
        assert_eq!(
            Settings::default().with_winning_value(2).validate(),
            Err(SettingsError::InvalidWinningValue(2))
        );
        assert_eq!(
            Settings::default().with_winning_value(1000).validate(),
            Err(SettingsError::InvalidWinningValue(1000))
        );
        assert_eq!(
            Settings::default().with_winning_value(0).validate(),
            Err(SettingsError::InvalidWinningValue(0))
        );
        assert!(Settings::default().with_winning_value(MAX_TILE).validate().is_ok());
        assert!(Settings::default().with_winning_value(MAX_TILE * 2).validate().is_err());
    }

    #[test]
    fn test_from_json() {
        let settings = Settings::from_json(r#"{"winning_value":512}"#);
        assert_eq!(settings, Some(Settings::default().with_winning_value(512)));

        assert_eq!(Settings::from_json(r#"{"winning_value":300}"#), None);
        assert_eq!(Settings::from_json("not json"), None);
    }
}
