//! Configuration types

use std::time::Duration;

use ankillm_remote::{DEFAULT_ANKI_URL, DEFAULT_GEMINI_MODEL};
use serde::{Deserialize, Serialize};

/// Top-level settings from config.toml
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub anki: AnkiSettings,

    #[serde(default)]
    pub llm: LlmSettings,

    #[serde(default)]
    pub notes: NoteSettings,
}

/// AnkiConnect settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnkiSettings {
    /// AnkiConnect endpoint
    #[serde(default = "default_anki_url")]
    pub url: String,
}

impl Default for AnkiSettings {
    fn default() -> Self {
        Self {
            url: default_anki_url(),
        }
    }
}

/// Note generation settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LlmSettings {
    /// Gemini model name (overridden by `GEMINI_MODEL`)
    #[serde(default = "default_model")]
    pub model: String,

    /// Upper bound for one generation, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl LlmSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Settings for submitted notes
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NoteSettings {
    /// Note template (Anki model) to generate
    #[serde(default = "default_template")]
    pub template: String,

    /// Tags attached to every submitted note
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Default for NoteSettings {
    fn default() -> Self {
        Self {
            template: default_template(),
            tags: Vec::new(),
        }
    }
}

fn default_anki_url() -> String {
    DEFAULT_ANKI_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    180
}

fn default_template() -> String {
    "Basic".to_string()
}
