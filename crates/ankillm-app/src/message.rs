//! Message types for the application (TEA pattern)

use ankillm_core::Note;

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Leave the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // File Picker Messages
    // ─────────────────────────────────────────────────────────
    PickerUp,
    PickerDown,
    PickerTop,
    PickerBottom,
    /// Open the highlighted directory or choose the highlighted PDF
    PickerOpen,
    /// Go to the parent directory
    PickerParent,

    // ─────────────────────────────────────────────────────────
    // Review Messages
    // ─────────────────────────────────────────────────────────
    NoteUp,
    NoteDown,
    NoteTop,
    NoteBottom,
    /// Toggle selection of the highlighted note
    ToggleNote,
    /// Select every note, or clear when all are already selected
    ToggleAllNotes,
    /// Submit selected notes to the active deck
    AddSelected,
    /// Generate a fresh note list from the same PDF
    Regenerate,
    /// Open the deck selector
    ChangeDeck,

    // ─────────────────────────────────────────────────────────
    // Deck Selector Messages
    // ─────────────────────────────────────────────────────────
    DeckUp,
    DeckDown,
    /// Pick the highlighted row
    ConfirmDeck,
    /// Back to review without changing the deck
    CancelDeckSelect,

    // ─────────────────────────────────────────────────────────
    // Create Deck Messages
    // ─────────────────────────────────────────────────────────
    DeckNameInput(char),
    DeckNameBackspace,
    DeckNameClear,
    ConfirmNewDeck,
    CancelNewDeck,

    // ─────────────────────────────────────────────────────────
    // Background Task Completions
    // ─────────────────────────────────────────────────────────
    /// Note generation finished
    NotesGenerated { notes: Vec<Note> },

    /// Note generation failed (includes timeout and cancellation)
    NoteGenerationFailed { error: String },

    /// Selected notes were accepted by Anki
    NotesAdded { count: usize },

    /// Anki rejected the submission or was unreachable
    NotesAddFailed { error: String },

    /// A new deck exists in Anki
    DeckCreated { name: String },

    /// Deck creation failed
    DeckCreationFailed { error: String },
}
