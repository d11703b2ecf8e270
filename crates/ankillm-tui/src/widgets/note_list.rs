//! Note list widget
//!
//! One row per generated note: cursor marker, checkbox and the front text.
//! The window scrolls so the cursor row is always visible.

use std::collections::BTreeSet;

use ankillm_core::Note;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

use super::{first_line, truncate_with_ellipsis};

pub struct NoteList<'a> {
    notes: &'a [Note],
    selection: &'a BTreeSet<usize>,
    cursor: usize,
}

impl<'a> NoteList<'a> {
    pub fn new(notes: &'a [Note], selection: &'a BTreeSet<usize>, cursor: usize) -> Self {
        Self {
            notes,
            selection,
            cursor,
        }
    }

    /// Index of the first visible row for a window of `height` rows
    fn scroll_offset(&self, height: usize) -> usize {
        if height == 0 {
            return 0;
        }
        self.cursor.saturating_sub(height - 1)
    }

    fn row(&self, index: usize, note: &Note, width: usize) -> Line<'static> {
        let marker = if index == self.cursor { ">" } else { " " };
        let check = if self.selection.contains(&index) {
            "[x]"
        } else {
            "[ ]"
        };
        let text = truncate_with_ellipsis(
            &format!("{marker} {check} {}", first_line(&note.front)),
            width,
        );

        let style = if index == self.cursor {
            styles::focused_selected()
        } else if self.selection.contains(&index) {
            styles::status_green()
        } else {
            styles::text_primary()
        };
        Line::styled(text, style)
    }
}

impl Widget for NoteList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!("Notes ({}/{})", self.selection.len(), self.notes.len());
        let block = styles::titled_block(&title, true);
        let inner = block.inner(area);

        let height = inner.height as usize;
        let width = inner.width as usize;
        let offset = self.scroll_offset(height);

        let lines: Vec<Line> = self
            .notes
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(i, note)| self.row(i, note, width))
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
