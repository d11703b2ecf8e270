//! File picker widget
//!
//! Current directory on the first row, then its listing. Directories carry a
//! trailing slash; entries that cannot be chosen are dimmed.

use ankillm_app::file_picker::{FilePickerState, PickerEntry};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

use super::{truncate_start, truncate_with_ellipsis};

const EMPTY_DIR: &str = "(empty directory)";

pub struct FileList<'a> {
    picker: &'a FilePickerState,
}

impl<'a> FileList<'a> {
    pub fn new(picker: &'a FilePickerState) -> Self {
        Self { picker }
    }

    fn row(&self, index: usize, entry: &PickerEntry, width: usize) -> Line<'static> {
        let focused = index == self.picker.cursor;
        let marker = if focused { "> " } else { "  " };
        let suffix = if entry.is_dir { "/" } else { "" };
        let text = truncate_with_ellipsis(&format!("{marker}{}{suffix}", entry.name), width);

        let style = if focused {
            styles::focused_selected()
        } else if entry.is_dir {
            styles::accent()
        } else if entry.is_pdf() {
            styles::text_primary()
        } else {
            styles::text_muted()
        };
        Line::styled(text, style)
    }
}

impl Widget for FileList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("Files", true);
        let inner = block.inner(area);
        let width = inner.width as usize;

        let dir = self.picker.dir.display().to_string();
        let mut lines = vec![Line::styled(
            truncate_start(&dir, width),
            styles::text_secondary(),
        )];

        // One row goes to the directory path
        let height = (inner.height as usize).saturating_sub(1);

        if self.picker.entries.is_empty() {
            lines.push(Line::styled(EMPTY_DIR, styles::text_muted()));
        } else if height > 0 {
            let offset = self.picker.cursor.saturating_sub(height - 1);
            lines.extend(
                self.picker
                    .entries
                    .iter()
                    .enumerate()
                    .skip(offset)
                    .take(height)
                    .map(|(i, entry)| self.row(i, entry, width)),
            );
        }

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
