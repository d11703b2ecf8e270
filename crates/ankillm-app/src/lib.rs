//! ankillm-app - Application state and orchestration for anki-llm
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! review workflow: a single [`AppState`], a [`Message`] enum covering input
//! and background completions, one `update` function, and the [`Engine`]
//! that owns the message channel and spawns background work.

pub mod actions;
pub mod config;
pub mod engine;
pub mod file_picker;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod screen;
pub mod services;
pub mod signals;
pub mod state;
pub mod text_input;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_support;

// Re-export primary types
pub use config::Settings;
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use screen::Screen;
pub use services::Services;
pub use state::{AppPhase, AppState, DeckCatalog};
