//! Application state (Model in TEA pattern)

use std::collections::BTreeSet;
use std::path::PathBuf;

use ankillm_core::prelude::*;
use ankillm_core::{Note, NoteFields};

use crate::file_picker::FilePickerState;
use crate::screen::Screen;

/// Deck used when the catalog could not be loaded or is empty
pub const DEFAULT_DECK: &str = "Default";

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Known deck names plus the deck notes are added to.
///
/// `active` does not have to appear in `names`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckCatalog {
    pub names: Vec<String>,
    pub active: String,
}

impl DeckCatalog {
    pub fn new(names: Vec<String>) -> Self {
        let active = names
            .first()
            .cloned()
            .unwrap_or_else(|| DEFAULT_DECK.to_string());
        Self { names, active }
    }

    /// Record a newly created deck and make it active
    pub fn add(&mut self, name: String) {
        self.active = name.clone();
        self.names.push(name);
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for DeckCatalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Active screen
    pub screen: Screen,

    /// Lifecycle phase
    pub phase: AppPhase,

    /// PDF notes are generated from, once chosen
    pub file_path: Option<PathBuf>,

    /// Note template name passed to the generator and to Anki
    pub template: String,

    /// Generated notes, in generation order
    pub notes: Vec<Note>,

    /// Indices into `notes` chosen for submission
    pub selection: BTreeSet<usize>,

    /// Highlighted note in the review list
    pub cursor: usize,

    /// Known decks and the active one
    pub decks: DeckCatalog,

    /// One-line status shown in the footer
    pub status: String,

    /// Generation error; replaces the whole view while set
    pub error: Option<String>,

    /// A background task is in flight
    pub loading: bool,

    /// Spinner frame counter, advanced on every tick
    pub animation_frame: u64,
}

impl AppState {
    /// Start on the file picker rooted at `start_dir`
    pub fn new(start_dir: PathBuf, template: impl Into<String>) -> Self {
        let mut picker = FilePickerState::new(start_dir);
        let status = match picker.load() {
            Ok(()) => String::new(),
            Err(e) => {
                warn!("Failed to list {}: {}", picker.dir.display(), e);
                e.to_string()
            }
        };

        Self {
            screen: Screen::Pick(picker),
            phase: AppPhase::Running,
            file_path: None,
            template: template.into(),
            notes: Vec::new(),
            selection: BTreeSet::new(),
            cursor: 0,
            decks: DeckCatalog::default(),
            status,
            error: None,
            loading: false,
            animation_frame: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn request_quit(&mut self) {
        info!("Quit requested");
        self.phase = AppPhase::Quitting;
    }

    /// Mark a background task as started
    pub fn start_loading(&mut self, status: impl Into<String>) {
        self.loading = true;
        self.status = status.into();
    }

    /// Advance the spinner
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    /// Swap in a fresh note list. Selection and cursor always reset with it.
    pub fn replace_notes(&mut self, notes: Vec<Note>) {
        self.notes = notes;
        self.selection.clear();
        self.cursor = 0;
    }

    pub fn current_note(&self) -> Option<&Note> {
        self.notes.get(self.cursor)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.contains(&index)
    }

    /// Raw fields of the selected notes, in list order
    pub fn selected_fields(&self) -> Vec<NoteFields> {
        self.selection
            .iter()
            .filter_map(|&i| self.notes.get(i))
            .map(|note| note.fields.clone())
            .collect()
    }

    /// Rows in the deck selector: the create entry plus every known deck
    pub fn deck_rows(&self) -> usize {
        self.decks.len() + 1
    }
}
