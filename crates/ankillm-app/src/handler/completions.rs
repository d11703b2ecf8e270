//! Background task completion handlers
//!
//! Completions are applied regardless of the active screen, so a result is
//! never lost when the user navigated away while it was in flight.

use ankillm_core::prelude::*;
use ankillm_core::Note;

use crate::screen::Screen;
use crate::state::AppState;

use super::UpdateResult;

pub fn handle_notes_generated(state: &mut AppState, notes: Vec<Note>) -> UpdateResult {
    info!("Received {} generated notes", notes.len());
    state.replace_notes(notes);
    state.loading = false;
    state.error = None;
    state.status = "generated".to_string();
    UpdateResult::none()
}

pub fn handle_generation_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Note generation failed: {}", error);
    state.error = Some(error);
    state.loading = false;
    state.status = "generation error".to_string();
    UpdateResult::none()
}

pub fn handle_notes_added(state: &mut AppState, count: usize) -> UpdateResult {
    info!("Anki accepted {} notes", count);
    state.loading = false;
    state.status = "added to anki".to_string();
    UpdateResult::none()
}

pub fn handle_add_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Adding notes failed: {}", error);
    state.loading = false;
    state.status = format!("anki error: {error}");
    UpdateResult::none()
}

pub fn handle_deck_created(state: &mut AppState, name: String) -> UpdateResult {
    state.decks.add(name);
    state.loading = false;
    state.status = "deck created".to_string();
    state.screen = Screen::Review;
    UpdateResult::none()
}

pub fn handle_deck_creation_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Deck creation failed: {}", error);
    state.loading = false;
    state.status = format!("error creating deck: {error}");
    UpdateResult::none()
}
