//! # ankillm-remote - External Service Clients
//!
//! HTTP clients for the two services anki-llm orchestrates:
//!
//! - [`AnkiClient`] talks to the AnkiConnect add-on (deck listing, deck
//!   creation, note submission)
//! - [`GeminiClient`] uploads a PDF to Gemini and asks it for notes
//!
//! Both are exposed to the rest of the workspace through the object-safe
//! [`DeckService`] and [`NoteGenerator`] traits so the application layer can
//! hold them as `Arc<dyn ...>` and swap in fakes under test.

pub mod anki;
pub mod document;
pub mod gemini;
pub mod http;
pub mod schema;

#[cfg(test)]
pub(crate) mod test_server;

use ankillm_core::{Note, NoteFields, NoteTemplate, Result};
use futures_util::future::BoxFuture;

pub use anki::{AnkiClient, DEFAULT_ANKI_URL};
pub use document::Document;
pub use gemini::{GeminiClient, GeminiConfig, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
pub use http::http_client;

/// Deck management and note submission
pub trait DeckService: Send + Sync {
    /// Create a deck. Creating an existing deck is not an error.
    fn create_deck<'a>(&'a self, name: &'a str) -> BoxFuture<'a, Result<()>>;

    /// List every deck name known to the collection
    fn deck_names(&self) -> BoxFuture<'_, Result<Vec<String>>>;

    /// Submit notes built from raw field maps into `deck`
    fn add_notes<'a>(
        &'a self,
        deck: &'a str,
        template: NoteTemplate,
        notes: &'a [NoteFields],
    ) -> BoxFuture<'a, Result<()>>;
}

/// Turns a document into flashcards
pub trait NoteGenerator: Send + Sync {
    fn generate(&self, document: Document, template: NoteTemplate)
        -> BoxFuture<'_, Result<Vec<Note>>>;
}
