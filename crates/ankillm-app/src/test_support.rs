//! In-memory service fakes for handler, action and engine tests

use std::sync::{Arc, Mutex};

use ankillm_core::{Error, Note, NoteFields, NoteTemplate, Result};
use ankillm_remote::{DeckService, Document, NoteGenerator};
use futures_util::future::{self, BoxFuture};
use futures_util::FutureExt;

#[derive(Clone, Default)]
pub struct FakeDecks {
    names: Vec<String>,
    fail_names: Option<String>,
    fail_add: Option<String>,
    fail_create: Option<String>,
    created: Arc<Mutex<Vec<String>>>,
    added: Arc<Mutex<Vec<(String, Vec<NoteFields>)>>>,
}

impl FakeDecks {
    pub fn with_names(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn unreachable() -> Self {
        Self {
            fail_names: Some("connection refused".into()),
            ..Self::default()
        }
    }

    pub fn failing_add(error: &str) -> Self {
        Self {
            fail_add: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn failing_create(error: &str) -> Self {
        Self {
            fail_create: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn created(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }

    pub fn added(&self) -> Vec<(String, Vec<NoteFields>)> {
        self.added.lock().unwrap().clone()
    }
}

impl DeckService for FakeDecks {
    fn create_deck<'a>(&'a self, name: &'a str) -> BoxFuture<'a, Result<()>> {
        let result = match &self.fail_create {
            Some(e) => Err(Error::anki(e.clone())),
            None => {
                self.created.lock().unwrap().push(name.to_string());
                Ok(())
            }
        };
        future::ready(result).boxed()
    }

    fn deck_names(&self) -> BoxFuture<'_, Result<Vec<String>>> {
        let result = match &self.fail_names {
            Some(e) => Err(Error::anki(e.clone())),
            None => Ok(self.names.clone()),
        };
        future::ready(result).boxed()
    }

    fn add_notes<'a>(
        &'a self,
        deck: &'a str,
        _template: NoteTemplate,
        notes: &'a [NoteFields],
    ) -> BoxFuture<'a, Result<()>> {
        let result = match &self.fail_add {
            Some(e) => Err(Error::anki(e.clone())),
            None => {
                self.added
                    .lock()
                    .unwrap()
                    .push((deck.to_string(), notes.to_vec()));
                Ok(())
            }
        };
        future::ready(result).boxed()
    }
}

#[derive(Clone)]
enum Behaviour {
    Return(Vec<Note>),
    Fail(String),
    Hang,
}

#[derive(Clone)]
pub struct FakeGenerator {
    behaviour: Behaviour,
    documents: Arc<Mutex<Vec<String>>>,
}

impl FakeGenerator {
    fn new(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            documents: Arc::default(),
        }
    }

    pub fn returning(notes: Vec<Note>) -> Self {
        Self::new(Behaviour::Return(notes))
    }

    pub fn failing(error: &str) -> Self {
        Self::new(Behaviour::Fail(error.into()))
    }

    /// Never completes; for timeout and cancellation tests
    pub fn hanging() -> Self {
        Self::new(Behaviour::Hang)
    }

    /// Display names of the documents received so far
    pub fn documents(&self) -> Vec<String> {
        self.documents.lock().unwrap().clone()
    }
}

impl NoteGenerator for FakeGenerator {
    fn generate(
        &self,
        document: Document,
        _template: NoteTemplate,
    ) -> BoxFuture<'_, Result<Vec<Note>>> {
        self.documents.lock().unwrap().push(document.display_name);
        match &self.behaviour {
            Behaviour::Return(notes) => future::ready(Ok(notes.clone())).boxed(),
            Behaviour::Fail(e) => future::ready(Err(Error::llm(e.clone()))).boxed(),
            Behaviour::Hang => future::pending().boxed(),
        }
    }
}
