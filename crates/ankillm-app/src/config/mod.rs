//! Configuration loading
//!
//! Settings live in `<config dir>/anki-llm/config.toml`. Environment
//! variables are applied on top.

mod settings;
mod types;

pub use settings::{api_key_from_env, config_path, load_settings, load_settings_from};
pub use types::{AnkiSettings, LlmSettings, NoteSettings, Settings};

/// Environment variable holding the Gemini API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable overriding the Gemini model
pub const MODEL_ENV: &str = "GEMINI_MODEL";
