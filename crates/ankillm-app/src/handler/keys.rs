//! Key event handlers for each screen

use crate::input_key::InputKey;
use crate::message::Message;
use crate::screen::Screen;
use crate::state::AppState;

/// Convert key events to messages based on the active screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.screen {
        Screen::Pick(_) => handle_key_picker(key),
        Screen::Review => handle_key_review(key),
        Screen::SelectDeck { .. } => handle_key_select_deck(key),
        Screen::CreateDeck(_) => handle_key_create_deck(key),
    }
}

/// Handle key events on the file picker
fn handle_key_picker(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char('j') | InputKey::Down => Some(Message::PickerDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::PickerUp),
        InputKey::Char('g') | InputKey::Home => Some(Message::PickerTop),
        InputKey::Char('G') | InputKey::End => Some(Message::PickerBottom),

        InputKey::Enter | InputKey::Char('l') | InputKey::Right => Some(Message::PickerOpen),
        InputKey::Backspace | InputKey::Char('h') | InputKey::Left => Some(Message::PickerParent),

        _ => None,
    }
}

/// Handle key events while reviewing notes
fn handle_key_review(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char('j') | InputKey::Down => Some(Message::NoteDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::NoteUp),
        InputKey::Char('g') | InputKey::Home => Some(Message::NoteTop),
        InputKey::Char('G') | InputKey::End => Some(Message::NoteBottom),

        InputKey::Char(' ') => Some(Message::ToggleNote),
        InputKey::Char('s') => Some(Message::ToggleAllNotes),
        InputKey::Char('a') => Some(Message::AddSelected),
        InputKey::Char('r') => Some(Message::Regenerate),
        InputKey::Char('d') => Some(Message::ChangeDeck),

        _ => None,
    }
}

/// Handle key events in the deck selector
fn handle_key_select_deck(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => {
            Some(Message::CancelDeckSelect)
        }

        InputKey::Char('j') | InputKey::Down => Some(Message::DeckDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::DeckUp),

        InputKey::Enter => Some(Message::ConfirmDeck),

        _ => None,
    }
}

/// Handle key events while typing a new deck name
fn handle_key_create_deck(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::CharCtrl('u') => Some(Message::DeckNameClear),
        InputKey::Esc => Some(Message::CancelNewDeck),
        InputKey::Enter => Some(Message::ConfirmNewDeck),
        InputKey::Backspace => Some(Message::DeckNameBackspace),
        InputKey::Char(c) if !c.is_control() => Some(Message::DeckNameInput(c)),
        _ => None,
    }
}
