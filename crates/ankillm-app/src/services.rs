//! Remote service handles shared with background tasks

use std::sync::Arc;
use std::time::Duration;

use ankillm_remote::{DeckService, NoteGenerator};

/// Everything a background task needs besides its own inputs
#[derive(Clone)]
pub struct Services {
    pub decks: Arc<dyn DeckService>,
    pub generator: Arc<dyn NoteGenerator>,
    /// Upper bound for one note generation
    pub generation_timeout: Duration,
}

impl Services {
    pub fn new(
        decks: Arc<dyn DeckService>,
        generator: Arc<dyn NoteGenerator>,
        generation_timeout: Duration,
    ) -> Self {
        Self {
            decks,
            generator,
            generation_timeout,
        }
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("generation_timeout", &self.generation_timeout)
            .finish_non_exhaustive()
    }
}
