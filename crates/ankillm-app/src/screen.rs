//! Screens of the review workflow

use crate::file_picker::FilePickerState;
use crate::text_input::TextInputState;

/// Label of the synthetic first row in the deck selector
pub const CREATE_DECK_LABEL: &str = "+ Create new deck";

/// The active screen. Exactly one is shown at a time; transitions replace it
/// outright, there is no back stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Choosing the PDF to generate notes from
    Pick(FilePickerState),

    /// Reviewing generated notes
    Review,

    /// Choosing the target deck. Row 0 is [`CREATE_DECK_LABEL`], row `n`
    /// is catalog entry `n - 1`.
    SelectDeck { cursor: usize },

    /// Typing the name of a new deck
    CreateDeck(TextInputState),
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Pick(_) => "Choose PDF",
            Screen::Review => "Select Notes",
            Screen::SelectDeck { .. } => "Select Deck",
            Screen::CreateDeck(_) => "Create New Deck",
        }
    }

    pub fn is_review(&self) -> bool {
        matches!(self, Screen::Review)
    }
}
