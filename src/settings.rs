//! Game settings and preferences
//!
//! Presentation and host options only; the rules of the game are fixed.
//! Persisted in LocalStorage on the web, read from a JSON file natively.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{CHAR_PIXEL, MAX_CHAR_PIXEL, MAX_SURFACE_SIDE};
use crate::renderer::Palette;

/// Environment variable naming a native settings file
pub const SETTINGS_ENV: &str = "PONG_SETTINGS";

/// Errors while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pixel size of one score-font cell
    pub char_pixel: u32,
    /// Drawing colors
    pub palette: Palette,
    /// Fixed serve seed; hosts pick one from the clock when unset
    pub seed: Option<u64>,

    // === Native host ===
    /// Framebuffer width
    pub width: u32,
    /// Framebuffer height
    pub height: u32,
    /// Length of the headless demo run
    pub demo_seconds: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            char_pixel: CHAR_PIXEL,
            palette: Palette::default(),
            seed: None,
            width: 800,
            height: 600,
            demo_seconds: 30.0,
        }
    }
}

impl Settings {
    /// Parse settings JSON; missing fields take their defaults and sizes are
    /// clamped to what the hosts can allocate
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.clamped())
    }

    fn clamped(mut self) -> Self {
        self.char_pixel = self.char_pixel.clamp(1, MAX_CHAR_PIXEL);
        self.width = self.width.clamp(1, MAX_SURFACE_SIDE);
        self.height = self.height.clamp(1, MAX_SURFACE_SIDE);
        self
    }

    /// Read and parse a settings file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "classic_pong_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
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

    /// Load settings from the file named by `PONG_SETTINGS`, if any
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(SETTINGS_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_path(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}: {})", path, e);
                Self::default()
            }
        }
    }
}
