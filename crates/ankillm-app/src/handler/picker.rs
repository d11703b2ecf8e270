//! File picker handlers

use ankillm_core::prelude::*;

use crate::file_picker::FilePickerState;
use crate::screen::Screen;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Apply a cursor movement to the picker
pub fn handle_move(state: &mut AppState, f: impl FnOnce(&mut FilePickerState)) -> UpdateResult {
    if let Screen::Pick(picker) = &mut state.screen {
        f(picker);
    }
    UpdateResult::none()
}

/// Open the highlighted directory, or choose the highlighted PDF and start
/// generating notes from it
pub fn handle_open(state: &mut AppState) -> UpdateResult {
    let Screen::Pick(picker) = &mut state.screen else {
        return UpdateResult::none();
    };
    let Some(entry) = picker.selected().cloned() else {
        return UpdateResult::none();
    };

    if entry.is_dir {
        state.status = match picker.enter(entry.path) {
            Ok(()) => String::new(),
            Err(e) => e.to_string(),
        };
        return UpdateResult::none();
    }

    if !entry.is_pdf() {
        state.status = "cannot select that file".to_string();
        return UpdateResult::none();
    }

    if state.loading {
        debug!("Ignoring file choice while a task is running");
        return UpdateResult::none();
    }

    info!("Chose {}", entry.path.display());
    state.file_path = Some(entry.path.clone());
    state.screen = Screen::Review;
    state.start_loading("generating notes...");

    UpdateResult::action(UpdateAction::GenerateNotes {
        path: entry.path,
        template: state.template.clone(),
    })
}

/// Go to the parent directory
pub fn handle_parent(state: &mut AppState) -> UpdateResult {
    let Screen::Pick(picker) = &mut state.screen else {
        return UpdateResult::none();
    };

    match picker.go_up() {
        Ok(true) => state.status.clear(),
        Ok(false) => {}
        Err(e) => state.status = e.to_string(),
    }
    UpdateResult::none()
}
