//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every task receives owned inputs, races its work against the shutdown
//! signal and reports back with exactly one completion message.

use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use ankillm_core::prelude::*;
use ankillm_core::{Note, NoteFields, NoteTemplate};
use ankillm_remote::{DeckService, Document, NoteGenerator};
use tokio::sync::{mpsc, watch};

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::services::Services;

/// Execute an action by spawning a background task
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    services: &Services,
    shutdown_rx: watch::Receiver<bool>,
) {
    match action {
        UpdateAction::GenerateNotes { path, template } => {
            let generator = services.generator.clone();
            let timeout = services.generation_timeout;
            tokio::spawn(async move {
                let result = cancellable(
                    shutdown_rx,
                    generate_notes(generator, &path, &template, timeout),
                )
                .await;

                let msg = match result {
                    Ok(notes) => Message::NotesGenerated { notes },
                    Err(e) => {
                        error!("Generating notes from {} failed: {}", path.display(), e);
                        Message::NoteGenerationFailed {
                            error: e.to_string(),
                        }
                    }
                };
                deliver(&msg_tx, msg).await;
            });
        }

        UpdateAction::AddNotes {
            deck,
            template,
            notes,
        } => {
            let decks = services.decks.clone();
            tokio::spawn(async move {
                let result = cancellable(shutdown_rx, add_notes(decks, &deck, &template, &notes)).await;

                let msg = match result {
                    Ok(()) => Message::NotesAdded { count: notes.len() },
                    Err(e) => {
                        error!("Adding notes to '{}' failed: {}", deck, e);
                        Message::NotesAddFailed {
                            error: e.to_string(),
                        }
                    }
                };
                deliver(&msg_tx, msg).await;
            });
        }

        UpdateAction::CreateDeck { name } => {
            let decks = services.decks.clone();
            tokio::spawn(async move {
                let result = cancellable(shutdown_rx, decks.create_deck(&name)).await;

                let msg = match result {
                    Ok(()) => Message::DeckCreated { name },
                    Err(e) => {
                        error!("Creating deck '{}' failed: {}", name, e);
                        Message::DeckCreationFailed {
                            error: e.to_string(),
                        }
                    }
                };
                deliver(&msg_tx, msg).await;
            });
        }
    }
}

/// Read the PDF and generate notes from it within `timeout`
pub async fn generate_notes(
    generator: Arc<dyn NoteGenerator>,
    path: &Path,
    template: &str,
    timeout: Duration,
) -> Result<Vec<Note>> {
    let template: NoteTemplate = template.parse()?;
    let document = Document::read(path).await?;

    match tokio::time::timeout(timeout, generator.generate(document, template)).await {
        Ok(result) => result,
        Err(_) => Err(Error::Timeout {
            secs: timeout.as_secs(),
        }),
    }
}

/// Submit raw note fields to `deck`
pub async fn add_notes(
    decks: Arc<dyn DeckService>,
    deck: &str,
    template: &str,
    notes: &[NoteFields],
) -> Result<()> {
    let template: NoteTemplate = template.parse()?;
    decks.add_notes(deck, template, notes).await
}

/// Run `work` unless shutdown is signalled first
pub async fn cancellable<T>(
    mut shutdown_rx: watch::Receiver<bool>,
    work: impl Future<Output = Result<T>>,
) -> Result<T> {
    tokio::select! {
        result = work => result,
        _ = wait_for_shutdown(&mut shutdown_rx) => {
            debug!("Background task cancelled by shutdown");
            Err(Error::Cancelled)
        }
    }
}

/// Resolves once shutdown is requested or the engine is gone
async fn wait_for_shutdown(shutdown_rx: &mut watch::Receiver<bool>) {
    while !*shutdown_rx.borrow() {
        if shutdown_rx.changed().await.is_err() {
            return;
        }
    }
}

async fn deliver(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        debug!("Message channel closed, dropping task result");
    }
}
