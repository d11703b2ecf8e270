//! Deck selection and creation handlers

use ankillm_core::prelude::*;

use crate::screen::Screen;
use crate::state::AppState;
use crate::text_input::TextInputState;

use super::{UpdateAction, UpdateResult};

/// Open the deck selector from review
pub fn handle_change_deck(state: &mut AppState) -> UpdateResult {
    if state.screen.is_review() {
        state.screen = Screen::SelectDeck { cursor: 0 };
        state.status = "select deck".to_string();
    }
    UpdateResult::none()
}

pub fn handle_deck_up(state: &mut AppState) -> UpdateResult {
    if let Screen::SelectDeck { cursor } = &mut state.screen {
        *cursor = cursor.saturating_sub(1);
    }
    UpdateResult::none()
}

pub fn handle_deck_down(state: &mut AppState) -> UpdateResult {
    let last = state.deck_rows() - 1;
    if let Screen::SelectDeck { cursor } = &mut state.screen {
        *cursor = (*cursor + 1).min(last);
    }
    UpdateResult::none()
}

/// Row 0 opens deck creation; any other row activates that deck
pub fn handle_confirm_deck(state: &mut AppState) -> UpdateResult {
    let Screen::SelectDeck { cursor } = state.screen else {
        return UpdateResult::none();
    };

    if cursor == 0 {
        state.screen = Screen::CreateDeck(TextInputState::new());
        return UpdateResult::none();
    }

    let Some(name) = state.decks.names.get(cursor - 1).cloned() else {
        return UpdateResult::none();
    };

    info!("Active deck changed to '{}'", name);
    state.status = format!("deck changed to {name}");
    state.decks.active = name;
    state.screen = Screen::Review;
    UpdateResult::none()
}

pub fn handle_cancel_select(state: &mut AppState) -> UpdateResult {
    if matches!(state.screen, Screen::SelectDeck { .. }) {
        state.screen = Screen::Review;
        state.status.clear();
    }
    UpdateResult::none()
}

pub fn handle_name_input(state: &mut AppState, c: char) -> UpdateResult {
    if let Screen::CreateDeck(input) = &mut state.screen {
        input.insert_char(c);
    }
    UpdateResult::none()
}

pub fn handle_name_backspace(state: &mut AppState) -> UpdateResult {
    if let Screen::CreateDeck(input) = &mut state.screen {
        input.backspace();
    }
    UpdateResult::none()
}

pub fn handle_name_clear(state: &mut AppState) -> UpdateResult {
    if let Screen::CreateDeck(input) = &mut state.screen {
        input.clear();
    }
    UpdateResult::none()
}

/// Validate the typed name and start creating the deck. The screen stays
/// until the task reports back.
pub fn handle_confirm_new_deck(state: &mut AppState) -> UpdateResult {
    let Screen::CreateDeck(input) = &state.screen else {
        return UpdateResult::none();
    };

    let name = input.value().trim().to_string();
    if name.is_empty() {
        state.status = "deck name cannot be empty".to_string();
        return UpdateResult::none();
    }

    if state.loading {
        debug!("Ignoring deck creation while a task is running");
        return UpdateResult::none();
    }

    info!("Creating deck '{}'", name);
    state.start_loading("creating deck...");
    UpdateResult::action(UpdateAction::CreateDeck { name })
}

pub fn handle_cancel_new_deck(state: &mut AppState) -> UpdateResult {
    if matches!(state.screen, Screen::CreateDeck(_)) {
        state.screen = Screen::Review;
    }
    UpdateResult::none()
}
