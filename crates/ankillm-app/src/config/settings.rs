//! Settings loading from config.toml and the environment

use std::path::{Path, PathBuf};

use ankillm_core::prelude::*;

use super::types::Settings;
use super::{API_KEY_ENV, MODEL_ENV};

const CONFIG_DIR: &str = "anki-llm";
const CONFIG_FILENAME: &str = "config.toml";

/// Location of the user config file, if the platform has a config dir
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from the user config file, then apply environment overrides
pub fn load_settings() -> Settings {
    let mut settings = match config_path() {
        Some(path) => load_settings_from(&path),
        None => {
            debug!("No config directory on this platform, using defaults");
            Settings::default()
        }
    };
    settings.apply_env_overrides();
    settings
}

/// Load settings from a specific file. Missing or invalid files yield defaults.
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

impl Settings {
    /// Apply `GEMINI_MODEL` on top of file settings
    pub fn apply_env_overrides(&mut self) {
        if let Some(model) = non_empty_env(MODEL_ENV) {
            debug!("Using model {} from {}", model, MODEL_ENV);
            self.llm.model = model;
        }
    }
}

/// Read the Gemini API key. Startup fails without one.
pub fn api_key_from_env() -> Result<String> {
    non_empty_env(API_KEY_ENV).ok_or(Error::MissingCredential { var: API_KEY_ENV })
}

fn non_empty_env(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}
