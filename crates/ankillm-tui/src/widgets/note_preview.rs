//! Preview of the note under the cursor

use ankillm_core::Note;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

/// Placeholder shown when there is nothing to preview
pub const NO_NOTES: &str = "(no notes)";

pub struct NotePreview<'a> {
    note: Option<&'a Note>,
}

impl<'a> NotePreview<'a> {
    pub fn new(note: Option<&'a Note>) -> Self {
        Self { note }
    }
}

impl Widget for NotePreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("Preview", false);

        let Some(note) = self.note else {
            Paragraph::new(Line::styled(NO_NOTES, styles::text_muted()))
                .block(block)
                .render(area, buf);
            return;
        };

        let mut lines = vec![Line::styled("Front", styles::heading())];
        lines.extend(note.front.lines().map(Line::raw));
        lines.push(Line::raw(""));
        lines.push(Line::styled("Back", styles::heading()));
        lines.extend(note.back.lines().map(Line::raw));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
