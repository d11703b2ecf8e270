//! Headless mode runner - one pass through the workflow without the TUI
//!
//! Steps run strictly in order: create the deck, generate notes from the
//! PDF, submit every note. The first failure ends the run.

use std::path::PathBuf;

use ankillm_app::actions::{self, cancellable};
use ankillm_app::signals::{self, SignalTarget};
use ankillm_app::Services;
use ankillm_core::prelude::*;
use ankillm_core::NoteFields;
use tokio::sync::watch;

use super::HeadlessEvent;

/// What a headless run works on
#[derive(Debug, Clone)]
pub struct HeadlessRequest {
    pub pdf: PathBuf,
    pub deck: String,
    pub template: String,
}

/// Run in headless mode. Returns the number of notes added.
pub async fn run_headless(services: Services, request: HeadlessRequest) -> Result<usize> {
    info!("═══════════════════════════════════════════════════════");
    info!("anki-llm starting in HEADLESS mode");
    info!("PDF: {}", request.pdf.display());
    info!("Deck: {}", request.deck);
    info!("═══════════════════════════════════════════════════════");

    // SIGINT/SIGTERM cancels whichever step is in flight
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    signals::forward_signals(SignalTarget::Shutdown(shutdown_tx));

    let result = run_steps(&services, &request, shutdown_rx, |event| event.emit()).await;

    match &result {
        Ok(count) => info!("Headless run added {} notes", count),
        Err(e) => error!("Headless run failed: {}", e),
    }
    result
}

/// Drive the three steps, reporting progress through `emit`
async fn run_steps(
    services: &Services,
    request: &HeadlessRequest,
    shutdown_rx: watch::Receiver<bool>,
    mut emit: impl FnMut(HeadlessEvent),
) -> Result<usize> {
    let mut report = |event: HeadlessEvent| {
        debug!("Headless event: {}", event.name());
        emit(event);
    };

    report(HeadlessEvent::started(
        &request.pdf.display().to_string(),
        &request.deck,
    ));

    let outcome = async {
        // Fail on a bad path before touching Anki
        if !request.pdf.is_file() {
            return Err(Error::document_not_found(&request.pdf));
        }

        cancellable(shutdown_rx.clone(), services.decks.create_deck(&request.deck)).await?;
        report(HeadlessEvent::deck_ready(&request.deck));

        let notes = cancellable(
            shutdown_rx.clone(),
            actions::generate_notes(
                services.generator.clone(),
                &request.pdf,
                &request.template,
                services.generation_timeout,
            ),
        )
        .await?;
        for note in &notes {
            report(HeadlessEvent::note_generated(&note.front));
        }

        if notes.is_empty() {
            warn!("No notes generated from {}", request.pdf.display());
        } else {
            let fields: Vec<NoteFields> = notes.iter().map(|n| n.fields.clone()).collect();
            cancellable(
                shutdown_rx.clone(),
                actions::add_notes(
                    services.decks.clone(),
                    &request.deck,
                    &request.template,
                    &fields,
                ),
            )
            .await?;
        }

        report(HeadlessEvent::notes_added(&request.deck, notes.len()));
        Ok::<_, Error>(notes.len())
    }
    .await;

    if let Err(e) = &outcome {
        report(HeadlessEvent::error(e.to_string(), e.is_fatal()));
    }
    outcome
}
