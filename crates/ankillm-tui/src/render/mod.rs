//! Main render/view function (View in TEA pattern)


use ankillm_app::{AppState, Screen};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{palette, styles};

/// Render the complete UI (View function in TEA)
///
/// A pending error takes over the whole frame: nothing else is drawn until a
/// later successful operation clears it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    if let Some(error) = &state.error {
        render_error(frame, error, area);
        return;
    }

    let areas = layout::create(area);

    let file_name = state
        .file_path
        .as_deref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy());
    let header = widgets::MainHeader::new(state.screen.title()).with_file(file_name.as_deref());
    frame.render_widget(header, areas.header);

    match &state.screen {
        Screen::Pick(picker) => {
            frame.render_widget(widgets::FileList::new(picker), areas.content);
        }
        Screen::Review => render_review(frame, state, areas.content),
        Screen::SelectDeck { cursor } => {
            frame.render_widget(widgets::DeckList::new(&state.decks, *cursor), areas.content);
        }
        Screen::CreateDeck(input) => {
            frame.render_widget(widgets::DeckInput::new(input), areas.content);
        }
    }

    let hints = widgets::hints_for(&state.screen, &state.decks.active);
    let footer = widgets::Footer::new(hints, &state.status)
        .loading(state.loading, state.animation_frame);
    frame.render_widget(footer, areas.footer);
}

/// Note list beside a preview of the note under the cursor
fn render_review(frame: &mut Frame, state: &AppState, area: Rect) {
    let (list_area, preview_area) = layout::review_panes(area);

    frame.render_widget(
        widgets::NoteList::new(&state.notes, &state.selection, state.cursor),
        list_area,
    );
    frame.render_widget(widgets::NotePreview::new(state.current_note()), preview_area);
}

fn render_error(frame: &mut Frame, error: &str, area: Rect) {
    let line = Line::from(vec![
        Span::styled("Error: ", styles::status_red()),
        Span::styled(error, styles::status_red()),
    ]);
    frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: false }), area);
}
