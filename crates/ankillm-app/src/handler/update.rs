//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{completions, deck, keys::handle_key, picker, review, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Tick => {
            if state.loading {
                state.tick();
            }
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        // ─────────────────────────────────────────────────────────
        // Background Task Completions (any screen)
        // ─────────────────────────────────────────────────────────
        Message::NotesGenerated { notes } => completions::handle_notes_generated(state, notes),
        Message::NoteGenerationFailed { error } => {
            completions::handle_generation_failed(state, error)
        }
        Message::NotesAdded { count } => completions::handle_notes_added(state, count),
        Message::NotesAddFailed { error } => completions::handle_add_failed(state, error),
        Message::DeckCreated { name } => completions::handle_deck_created(state, name),
        Message::DeckCreationFailed { error } => {
            completions::handle_deck_creation_failed(state, error)
        }

        // ─────────────────────────────────────────────────────────
        // File Picker Messages
        // ─────────────────────────────────────────────────────────
        Message::PickerUp => picker::handle_move(state, |p| p.move_up()),
        Message::PickerDown => picker::handle_move(state, |p| p.move_down()),
        Message::PickerTop => picker::handle_move(state, |p| p.move_to_top()),
        Message::PickerBottom => picker::handle_move(state, |p| p.move_to_bottom()),
        Message::PickerOpen => picker::handle_open(state),
        Message::PickerParent => picker::handle_parent(state),

        // ─────────────────────────────────────────────────────────
        // Review Messages
        // ─────────────────────────────────────────────────────────
        Message::NoteUp => review::handle_cursor_up(state),
        Message::NoteDown => review::handle_cursor_down(state),
        Message::NoteTop => review::handle_cursor_top(state),
        Message::NoteBottom => review::handle_cursor_bottom(state),
        Message::ToggleNote => review::handle_toggle(state),
        Message::ToggleAllNotes => review::handle_toggle_all(state),
        Message::AddSelected => review::handle_add_selected(state),
        Message::Regenerate => review::handle_regenerate(state),
        Message::ChangeDeck => deck::handle_change_deck(state),

        // ─────────────────────────────────────────────────────────
        // Deck Messages
        // ─────────────────────────────────────────────────────────
        Message::DeckUp => deck::handle_deck_up(state),
        Message::DeckDown => deck::handle_deck_down(state),
        Message::ConfirmDeck => deck::handle_confirm_deck(state),
        Message::CancelDeckSelect => deck::handle_cancel_select(state),
        Message::DeckNameInput(c) => deck::handle_name_input(state, c),
        Message::DeckNameBackspace => deck::handle_name_backspace(state),
        Message::DeckNameClear => deck::handle_name_clear(state),
        Message::ConfirmNewDeck => deck::handle_confirm_new_deck(state),
        Message::CancelNewDeck => deck::handle_cancel_new_deck(state),
    }
}
