//! Main TUI runner - entry point and event loop
//!
//! Contains the application lifecycle:
//! - `run`: build the Engine, load decks, own the terminal
//! - `run_loop`: drain background messages, render, poll input

use std::path::PathBuf;

use ankillm_app::{Engine, Services, Settings};
use ankillm_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI until the user quits.
///
/// The deck catalog is fetched before the terminal switches to the
/// alternate screen, so a slow AnkiConnect never shows a blank frame.
pub async fn run(settings: Settings, services: Services, start_dir: PathBuf) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut engine = Engine::new(settings, services, start_dir);
    engine.load_deck_catalog().await;

    let mut term = terminal::init()?;
    info!("anki-llm TUI started");

    let result = run_loop(&mut term, &mut engine);

    // Stop any generation or submission still in flight
    engine.shutdown();

    ratatui::restore();

    if let Err(e) = &result {
        error!("TUI loop failed: {}", e);
    }
    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Completions from background tasks and the signal handler
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
