//! Game settings
//!
//! Read once at startup from a JSON block embedded in the page. Never written
//! back.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Problems with a settings document
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),
    #[error("key binding `{0}` is empty")]
    EmptyKey(&'static str),
}

/// Key identifiers, matched case-insensitively against `KeyboardEvent.key`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub pause: String,
    pub player_one: String,
    pub player_two: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            pause: "p".into(),
            player_one: "f".into(),
            player_two: "l".into(),
        }
    }
}

impl KeyBindings {
    fn validate(&self) -> Result<(), SettingsError> {
        if self.pause.is_empty() {
            return Err(SettingsError::EmptyKey("pause"));
        }
        if self.player_one.is_empty() {
            return Err(SettingsError::EmptyKey("player_one"));
        }
        if self.player_two.is_empty() {
            return Err(SettingsError::EmptyKey("player_two"));
        }
        Ok(())
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub keys: KeyBindings,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            keys: KeyBindings::default(),
            master_volume: 0.8,
            music_volume: 0.7,
            sfx_volume: 1.0,
        }
    }
}

impl Settings {
    /// Parse settings, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.keys.validate()?;
        settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
        settings.music_volume = settings.music_volume.clamp(0.0, 1.0);
        settings.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
        Ok(settings)
    }

    /// Effective music volume
    pub fn music_level(&self) -> f32 {
        self.master_volume * self.music_volume
    }

    /// Effective sound effect volume
    pub fn sfx_level(&self) -> f32 {
        self.master_volume * self.sfx_volume
    }

    /// Element id of the embedded config block
    const CONFIG_ELEMENT_ID: &'static str = "gameConfig";

    /// Load settings from the page's config block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json {
            Some(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from #{}", Self::CONFIG_ELEMENT_ID);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring settings: {e}");
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        log::debug!("No #{} block natively, using defaults", Self::CONFIG_ELEMENT_ID);
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "keys": { "player_two": "k" } }"#).unwrap();
        assert_eq!(settings.keys.player_one, "f");
        assert_eq!(settings.keys.player_two, "k");
        assert_eq!(settings.keys.pause, "p");
        assert_eq!(settings.music_volume, 0.7);
    }

    #[test]
    fn test_volumes_clamped() {
        let settings =
            Settings::from_json(r#"{ "master_volume": 3.0, "sfx_volume": -1.0 }"#).unwrap();
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.sfx_volume, 0.0);
        assert_eq!(settings.sfx_level(), 0.0);
    }

    #[test]
    fn test_rejects_empty_key_and_bad_json() {
        let err = Settings::from_json(r#"{ "keys": { "pause": "" } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::EmptyKey("pause")));

        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
    }
}
