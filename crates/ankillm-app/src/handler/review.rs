//! Note review handlers

use ankillm_core::prelude::*;

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_cursor_up(state: &mut AppState) -> UpdateResult {
    if state.screen.is_review() {
        state.cursor = state.cursor.saturating_sub(1);
    }
    UpdateResult::none()
}

pub fn handle_cursor_down(state: &mut AppState) -> UpdateResult {
    if state.screen.is_review() && state.cursor + 1 < state.notes.len() {
        state.cursor += 1;
    }
    UpdateResult::none()
}

pub fn handle_cursor_top(state: &mut AppState) -> UpdateResult {
    if state.screen.is_review() {
        state.cursor = 0;
    }
    UpdateResult::none()
}

pub fn handle_cursor_bottom(state: &mut AppState) -> UpdateResult {
    if state.screen.is_review() {
        state.cursor = state.notes.len().saturating_sub(1);
    }
    UpdateResult::none()
}

/// Toggle the highlighted note
pub fn handle_toggle(state: &mut AppState) -> UpdateResult {
    if !state.screen.is_review() || state.cursor >= state.notes.len() {
        return UpdateResult::none();
    }

    let index = state.cursor;
    if !state.selection.remove(&index) {
        state.selection.insert(index);
    }
    UpdateResult::none()
}

/// Select every note, or clear the selection when everything is selected
pub fn handle_toggle_all(state: &mut AppState) -> UpdateResult {
    if !state.screen.is_review() {
        return UpdateResult::none();
    }

    if state.selection.len() == state.notes.len() {
        state.selection.clear();
    } else {
        state.selection = (0..state.notes.len()).collect();
    }
    UpdateResult::none()
}

/// Submit the selected notes to the active deck
pub fn handle_add_selected(state: &mut AppState) -> UpdateResult {
    if !state.screen.is_review() {
        return UpdateResult::none();
    }

    if state.selection.is_empty() {
        state.status = "no notes selected".to_string();
        return UpdateResult::none();
    }

    if state.loading {
        debug!("Ignoring add request while a task is running");
        return UpdateResult::none();
    }

    let notes = state.selected_fields();
    info!("Adding {} notes to '{}'", notes.len(), state.decks.active);
    state.start_loading("adding to Anki...");

    UpdateResult::action(UpdateAction::AddNotes {
        deck: state.decks.active.clone(),
        template: state.template.clone(),
        notes,
    })
}

/// Generate a fresh note list from the chosen PDF
pub fn handle_regenerate(state: &mut AppState) -> UpdateResult {
    if !state.screen.is_review() {
        return UpdateResult::none();
    }

    let Some(path) = state.file_path.clone() else {
        state.status = "no pdf selected".to_string();
        return UpdateResult::none();
    };

    if state.loading {
        debug!("Ignoring regenerate request while a task is running");
        return UpdateResult::none();
    }

    info!("Regenerating notes from {}", path.display());
    state.start_loading("regenerating...");

    UpdateResult::action(UpdateAction::GenerateNotes {
        path,
        template: state.template.clone(),
    })
}
