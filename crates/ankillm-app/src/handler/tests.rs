//! Tests for handler module

use std::path::PathBuf;

use super::*;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::screen::Screen;
use crate::state::{AppPhase, AppState, DeckCatalog};
use crate::text_input::TextInputState;
use ankillm_core::Note;
use tempfile::tempdir;

/// Run a message through update, following up messages the way the engine
/// does, and return the action requested (if any)
fn send(state: &mut AppState, message: Message) -> Option<UpdateAction> {
    let mut msg = Some(message);
    let mut action = None;
    while let Some(m) = msg {
        let result = update(state, m);
        if result.action.is_some() {
            action = result.action;
        }
        msg = result.message;
    }
    action
}

fn press(state: &mut AppState, key: InputKey) -> Option<UpdateAction> {
    send(state, Message::Key(key))
}

fn notes(n: usize) -> Vec<Note> {
    (0..n)
        .map(|i| Note::basic(format!("Q{}", i + 1), format!("A{}", i + 1)))
        .collect()
}

/// State on the review screen with `n` generated notes
fn review_state(n: usize) -> AppState {
    let mut state = AppState::new(std::env::temp_dir(), "Basic");
    state.screen = Screen::Review;
    state.file_path = Some(PathBuf::from("/tmp/lecture.pdf"));
    state.decks = DeckCatalog::new(vec!["Default".into(), "French".into()]);
    state.replace_notes(notes(n));
    state
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = review_state(0);
    assert_eq!(state.phase, AppPhase::Running);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_q_and_ctrl_c_quit_from_review() {
    let mut state = review_state(1);
    press(&mut state, InputKey::Char('q'));
    assert!(state.should_quit());

    let mut state = review_state(1);
    press(&mut state, InputKey::CharCtrl('c'));
    assert!(state.should_quit());
}

#[test]
fn test_q_quits_from_picker() {
    let mut state = AppState::new(std::env::temp_dir(), "Basic");
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::Quit)
    ));
    press(&mut state, InputKey::Char('q'));
    assert!(state.should_quit());
}

#[test]
fn test_tick_advances_spinner_only_while_loading() {
    let mut state = review_state(0);
    update(&mut state, Message::Tick);
    assert_eq!(state.animation_frame, 0);

    state.loading = true;
    update(&mut state, Message::Tick);
    update(&mut state, Message::Tick);
    assert_eq!(state.animation_frame, 2);
}

// ─────────────────────────────────────────────────────────
// Review navigation and selection
// ─────────────────────────────────────────────────────────

#[test]
fn test_cursor_clamped_to_note_range() {
    let mut state = review_state(3);

    press(&mut state, InputKey::Char('k'));
    assert_eq!(state.cursor, 0);

    for _ in 0..5 {
        press(&mut state, InputKey::Char('j'));
    }
    assert_eq!(state.cursor, 2);

    press(&mut state, InputKey::Up);
    assert_eq!(state.cursor, 1);
    press(&mut state, InputKey::Down);
    assert_eq!(state.cursor, 2);
}

#[test]
fn test_cursor_movement_noop_without_notes() {
    let mut state = review_state(0);
    press(&mut state, InputKey::Char('j'));
    press(&mut state, InputKey::Char('k'));
    press(&mut state, InputKey::End);
    assert_eq!(state.cursor, 0);
}

#[test]
fn test_home_end_jump() {
    let mut state = review_state(4);
    press(&mut state, InputKey::End);
    assert_eq!(state.cursor, 3);
    press(&mut state, InputKey::Home);
    assert_eq!(state.cursor, 0);
}

#[test]
fn test_space_toggles_cursor_note() {
    let mut state = review_state(3);
    press(&mut state, InputKey::Char('j'));
    press(&mut state, InputKey::Char(' '));
    assert!(state.is_selected(1));

    press(&mut state, InputKey::Char(' '));
    assert!(!state.is_selected(1));
    assert!(state.selection.is_empty());
}

#[test]
fn test_toggle_noop_without_notes() {
    let mut state = review_state(0);
    press(&mut state, InputKey::Char(' '));
    assert!(state.selection.is_empty());
}

#[test]
fn test_select_all_twice_restores_empty_selection() {
    let mut state = review_state(3);

    press(&mut state, InputKey::Char('s'));
    assert_eq!(state.selection.len(), 3);

    press(&mut state, InputKey::Char('s'));
    assert!(state.selection.is_empty());
}

#[test]
fn test_select_all_twice_restores_full_selection() {
    let mut state = review_state(3);
    state.selection.extend(0..3);

    press(&mut state, InputKey::Char('s'));
    assert!(state.selection.is_empty());

    press(&mut state, InputKey::Char('s'));
    assert_eq!(state.selection, (0..3).collect());
}

#[test]
fn test_select_all_with_partial_selection_selects_everything() {
    let mut state = review_state(3);
    state.selection.insert(1);

    press(&mut state, InputKey::Char('s'));
    assert_eq!(state.selection.len(), 3);
}

// ─────────────────────────────────────────────────────────
// Add and regenerate
// ─────────────────────────────────────────────────────────

#[test]
fn test_add_without_selection() {
    let mut state = review_state(2);
    let action = press(&mut state, InputKey::Char('a'));

    assert!(action.is_none());
    assert_eq!(state.status, "no notes selected");
    assert!(!state.loading);
}

#[test]
fn test_add_selected_requests_submission() {
    let mut state = review_state(3);
    state.selection.insert(0);
    state.selection.insert(2);

    let action = press(&mut state, InputKey::Char('a'));

    assert!(state.loading);
    assert_eq!(state.status, "adding to Anki...");
    match action {
        Some(UpdateAction::AddNotes {
            deck,
            template,
            notes,
        }) => {
            assert_eq!(deck, "Default");
            assert_eq!(template, "Basic");
            assert_eq!(notes.len(), 2);
            assert_eq!(notes[0]["Front"], "Q1");
            assert_eq!(notes[1]["Front"], "Q3");
        }
        other => panic!("expected AddNotes, got {other:?}"),
    }
}

#[test]
fn test_add_rejected_while_loading() {
    let mut state = review_state(2);
    state.selection.insert(0);
    state.start_loading("regenerating...");

    assert!(press(&mut state, InputKey::Char('a')).is_none());
    assert_eq!(state.status, "regenerating...");
}

#[test]
fn test_regenerate_requests_generation() {
    let mut state = review_state(2);
    let action = press(&mut state, InputKey::Char('r'));

    assert!(state.loading);
    assert_eq!(state.status, "regenerating...");
    assert_eq!(
        action,
        Some(UpdateAction::GenerateNotes {
            path: PathBuf::from("/tmp/lecture.pdf"),
            template: "Basic".into(),
        })
    );
}

#[test]
fn test_regenerate_without_file() {
    let mut state = review_state(2);
    state.file_path = None;

    assert!(press(&mut state, InputKey::Char('r')).is_none());
    assert_eq!(state.status, "no pdf selected");
    assert!(!state.loading);
}

#[test]
fn test_regenerate_rejected_while_loading() {
    let mut state = review_state(2);
    state.start_loading("adding to Anki...");
    assert!(press(&mut state, InputKey::Char('r')).is_none());
}

// ─────────────────────────────────────────────────────────
// Completions
// ─────────────────────────────────────────────────────────

#[test]
fn test_generation_success_replaces_notes() {
    let mut state = review_state(0);
    state.start_loading("generating notes...");

    update(
        &mut state,
        Message::NotesGenerated {
            notes: vec![Note::basic("Q1", "A1")],
        },
    );

    assert_eq!(state.notes.len(), 1);
    assert_eq!(state.notes[0].front, "Q1");
    assert!(state.selection.is_empty());
    assert_eq!(state.status, "generated");
    assert!(!state.loading);
}

#[test]
fn test_regeneration_clears_selection_and_cursor() {
    let mut state = review_state(4);
    state.cursor = 3;
    state.selection.extend([0, 3]);
    state.start_loading("regenerating...");

    update(&mut state, Message::NotesGenerated { notes: notes(2) });

    assert!(state.selection.is_empty());
    assert_eq!(state.cursor, 0);
    assert_eq!(state.notes.len(), 2);
}

#[test]
fn test_generation_failure_sets_error() {
    let mut state = review_state(0);
    state.start_loading("generating notes...");

    update(
        &mut state,
        Message::NoteGenerationFailed {
            error: "upload failed".into(),
        },
    );

    assert_eq!(state.error.as_deref(), Some("upload failed"));
    assert_eq!(state.status, "generation error");
    assert!(!state.loading);
}

#[test]
fn test_error_survives_navigation_and_clears_on_success() {
    let mut state = review_state(0);
    state.error = Some("upload failed".into());

    press(&mut state, InputKey::Char('d'));
    press(&mut state, InputKey::Esc);
    assert_eq!(state.error.as_deref(), Some("upload failed"));

    update(&mut state, Message::NotesGenerated { notes: notes(1) });
    assert!(state.error.is_none());
}

#[test]
fn test_add_failure_keeps_selection() {
    let mut state = review_state(3);
    state.selection.extend([0, 1]);
    press(&mut state, InputKey::Char('a'));

    update(
        &mut state,
        Message::NotesAddFailed {
            error: "timeout".into(),
        },
    );

    assert_eq!(state.status, "anki error: timeout");
    assert!(!state.loading);
    assert_eq!(state.selection.len(), 2);
}

#[test]
fn test_add_success_keeps_selection() {
    let mut state = review_state(3);
    state.selection.insert(2);
    press(&mut state, InputKey::Char('a'));

    update(&mut state, Message::NotesAdded { count: 1 });

    assert_eq!(state.status, "added to anki");
    assert!(!state.loading);
    assert!(state.is_selected(2));
}

#[test]
fn test_completion_applied_on_other_screen() {
    let mut state = review_state(0);
    state.start_loading("regenerating...");
    press(&mut state, InputKey::Char('d'));
    assert!(matches!(state.screen, Screen::SelectDeck { .. }));

    update(&mut state, Message::NotesGenerated { notes: notes(2) });

    assert_eq!(state.notes.len(), 2);
    assert!(!state.loading);
    assert!(matches!(state.screen, Screen::SelectDeck { .. }));
}

// ─────────────────────────────────────────────────────────
// Deck selection
// ─────────────────────────────────────────────────────────

#[test]
fn test_change_deck_opens_selector() {
    let mut state = review_state(1);
    press(&mut state, InputKey::Char('d'));

    assert_eq!(state.screen, Screen::SelectDeck { cursor: 0 });
    assert_eq!(state.status, "select deck");
}

#[test]
fn test_deck_cursor_clamped_to_catalog_plus_create_row() {
    let mut state = review_state(1);
    press(&mut state, InputKey::Char('d'));

    for _ in 0..5 {
        press(&mut state, InputKey::Char('j'));
    }
    assert_eq!(state.screen, Screen::SelectDeck { cursor: 2 });

    for _ in 0..5 {
        press(&mut state, InputKey::Up);
    }
    assert_eq!(state.screen, Screen::SelectDeck { cursor: 0 });
}

#[test]
fn test_select_existing_deck() {
    let mut state = review_state(1);
    press(&mut state, InputKey::Char('d'));
    press(&mut state, InputKey::Char('j'));
    press(&mut state, InputKey::Char('j'));
    press(&mut state, InputKey::Enter);

    assert_eq!(state.decks.active, "French");
    assert_eq!(state.screen, Screen::Review);
    assert_eq!(state.status, "deck changed to French");
}

#[test]
fn test_cancel_deck_select_keeps_active_deck() {
    for key in [InputKey::Esc, InputKey::Char('q'), InputKey::CharCtrl('c')] {
        let mut state = review_state(1);
        press(&mut state, InputKey::Char('d'));
        press(&mut state, InputKey::Char('j'));
        press(&mut state, key);

        assert_eq!(state.screen, Screen::Review);
        assert_eq!(state.decks.active, "Default");
        assert_eq!(state.status, "");
        assert!(!state.should_quit());
    }
}

#[test]
fn test_create_row_opens_deck_input() {
    let mut state = review_state(1);
    press(&mut state, InputKey::Char('d'));
    press(&mut state, InputKey::Enter);

    assert_eq!(state.screen, Screen::CreateDeck(TextInputState::new()));
}

// ─────────────────────────────────────────────────────────
// Deck creation
// ─────────────────────────────────────────────────────────

fn create_deck_state() -> AppState {
    let mut state = review_state(1);
    state.screen = Screen::CreateDeck(TextInputState::new());
    state
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, InputKey::Char(c));
    }
}

#[test]
fn test_typing_edits_deck_name() {
    let mut state = create_deck_state();
    type_text(&mut state, "Biologyq");
    press(&mut state, InputKey::Backspace);

    match &state.screen {
        Screen::CreateDeck(input) => assert_eq!(input.value(), "Biology"),
        other => panic!("unexpected screen {other:?}"),
    }
    assert!(!state.should_quit());

    press(&mut state, InputKey::CharCtrl('u'));
    assert_eq!(state.screen, Screen::CreateDeck(TextInputState::new()));
}

#[test]
fn test_empty_deck_name_rejected() {
    let mut state = create_deck_state();
    type_text(&mut state, "   ");
    let action = press(&mut state, InputKey::Enter);

    assert!(action.is_none());
    assert!(matches!(state.screen, Screen::CreateDeck(_)));
    assert_eq!(state.status, "deck name cannot be empty");
    assert!(!state.loading);
}

#[test]
fn test_confirm_deck_name_requests_creation() {
    let mut state = create_deck_state();
    type_text(&mut state, "Biology");
    let action = press(&mut state, InputKey::Enter);

    assert_eq!(
        action,
        Some(UpdateAction::CreateDeck {
            name: "Biology".into()
        })
    );
    assert!(state.loading);
    assert_eq!(state.status, "creating deck...");
    assert!(matches!(state.screen, Screen::CreateDeck(_)));
}

#[test]
fn test_deck_created_activates_and_returns_to_review() {
    let mut state = create_deck_state();
    type_text(&mut state, "Biology");
    press(&mut state, InputKey::Enter);

    update(
        &mut state,
        Message::DeckCreated {
            name: "Biology".into(),
        },
    );

    assert_eq!(state.screen, Screen::Review);
    assert_eq!(state.decks.active, "Biology");
    assert_eq!(state.decks.names.last().map(String::as_str), Some("Biology"));
    assert_eq!(state.status, "deck created");
    assert!(!state.loading);
}

#[test]
fn test_deck_creation_failure_stays_on_screen() {
    let mut state = create_deck_state();
    type_text(&mut state, "Biology");
    press(&mut state, InputKey::Enter);

    update(
        &mut state,
        Message::DeckCreationFailed {
            error: "failed to create deck: refused".into(),
        },
    );

    assert!(matches!(state.screen, Screen::CreateDeck(_)));
    assert_eq!(state.status, "error creating deck: failed to create deck: refused");
    assert!(!state.loading);
    assert_eq!(state.decks.active, "Default");
}

#[test]
fn test_esc_cancels_deck_creation() {
    let mut state = create_deck_state();
    type_text(&mut state, "Bio");
    press(&mut state, InputKey::Esc);

    assert_eq!(state.screen, Screen::Review);
    assert_eq!(state.decks.names.len(), 2);
}

#[test]
fn test_ctrl_c_quits_from_deck_creation() {
    let mut state = create_deck_state();
    press(&mut state, InputKey::CharCtrl('c'));
    assert!(state.should_quit());
}

// ─────────────────────────────────────────────────────────
// File picker
// ─────────────────────────────────────────────────────────

fn picker_state() -> (tempfile::TempDir, AppState) {
    let temp = tempdir().unwrap();
    std::fs::create_dir(temp.path().join("chapters")).unwrap();
    std::fs::write(temp.path().join("chapters").join("ch1.pdf"), b"").unwrap();
    std::fs::write(temp.path().join("lecture.pdf"), b"").unwrap();
    std::fs::write(temp.path().join("notes.txt"), b"").unwrap();
    let state = AppState::new(temp.path().to_path_buf(), "Basic");
    (temp, state)
}

fn picker_dir(state: &AppState) -> PathBuf {
    match &state.screen {
        Screen::Pick(picker) => picker.dir.clone(),
        other => panic!("expected picker, got {other:?}"),
    }
}

#[test]
fn test_choose_pdf_starts_generation() {
    let (temp, mut state) = picker_state();
    // chapters/, lecture.pdf, notes.txt
    press(&mut state, InputKey::Char('j'));
    let action = press(&mut state, InputKey::Enter);

    let expected = temp.path().join("lecture.pdf");
    assert_eq!(state.screen, Screen::Review);
    assert_eq!(state.file_path.as_deref(), Some(expected.as_path()));
    assert!(state.loading);
    assert_eq!(state.status, "generating notes...");
    assert_eq!(
        action,
        Some(UpdateAction::GenerateNotes {
            path: expected,
            template: "Basic".into(),
        })
    );
}

#[test]
fn test_non_pdf_cannot_be_selected() {
    let (_temp, mut state) = picker_state();
    press(&mut state, InputKey::End);
    let action = press(&mut state, InputKey::Enter);

    assert!(action.is_none());
    assert!(matches!(state.screen, Screen::Pick(_)));
    assert_eq!(state.status, "cannot select that file");
}

#[test]
fn test_enter_directory_and_back() {
    let (temp, mut state) = picker_state();
    press(&mut state, InputKey::Enter);
    assert_eq!(picker_dir(&state), temp.path().join("chapters"));

    press(&mut state, InputKey::Backspace);
    assert_eq!(picker_dir(&state), temp.path());
}

#[test]
fn test_generation_completion_after_choosing() {
    let (_temp, mut state) = picker_state();
    press(&mut state, InputKey::Char('j'));
    press(&mut state, InputKey::Enter);

    update(
        &mut state,
        Message::NotesGenerated {
            notes: vec![Note::basic("Q1", "A1")],
        },
    );

    assert_eq!(state.notes.len(), 1);
    assert_eq!(state.status, "generated");
}

#[test]
fn test_screen_messages_ignored_elsewhere() {
    let mut state = review_state(2);
    update(&mut state, Message::ConfirmDeck);
    update(&mut state, Message::PickerOpen);
    update(&mut state, Message::DeckNameInput('x'));
    assert_eq!(state.screen, Screen::Review);
    assert_eq!(state.status, "");
}
