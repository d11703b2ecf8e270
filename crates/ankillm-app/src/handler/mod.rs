//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per screen
//! - `picker`: File picker handlers
//! - `review`: Note review handlers
//! - `deck`: Deck selection and creation handlers
//! - `completions`: Background task completion handlers

pub(crate) mod completions;
pub(crate) mod deck;
pub(crate) mod keys;
pub(crate) mod picker;
pub(crate) mod review;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use ankillm_core::NoteFields;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

pub use keys::handle_key;

/// Background work requested by a handler. The engine turns each one into a
/// spawned task that reports back with exactly one completion message.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Generate notes from a PDF
    GenerateNotes { path: PathBuf, template: String },

    /// Submit notes to a deck
    AddNotes {
        deck: String,
        template: String,
        notes: Vec<NoteFields>,
    },

    /// Create a deck in Anki
    CreateDeck { name: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
