//! Deck selector widget
//!
//! Row 0 is the create entry, the rest are known decks. The active deck is
//! marked with a star.

use ankillm_app::screen::CREATE_DECK_LABEL;
use ankillm_app::DeckCatalog;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct DeckList<'a> {
    catalog: &'a DeckCatalog,
    cursor: usize,
}

impl<'a> DeckList<'a> {
    pub fn new(catalog: &'a DeckCatalog, cursor: usize) -> Self {
        Self { catalog, cursor }
    }

    fn row(&self, index: usize, label: &'a str, is_active: bool) -> Line<'a> {
        let focused = index == self.cursor;
        let marker = if focused { "> " } else { "  " };

        let style = if focused {
            styles::focused_selected()
        } else if index == 0 {
            styles::accent()
        } else {
            styles::text_primary()
        };

        let mut spans = vec![Span::styled(marker, style), Span::styled(label, style)];
        if is_active {
            spans.push(Span::styled(" *", styles::status_green()));
        }
        Line::from(spans)
    }
}

impl Widget for DeckList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("Decks", true);
        let inner = block.inner(area);
        let height = inner.height as usize;
        let offset = if height == 0 {
            0
        } else {
            self.cursor.saturating_sub(height - 1)
        };

        let rows = std::iter::once((CREATE_DECK_LABEL, false)).chain(
            self.catalog
                .names
                .iter()
                .map(|name| (name.as_str(), *name == self.catalog.active)),
        );

        let lines: Vec<Line> = rows
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(i, (label, is_active))| self.row(i, label, is_active))
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
