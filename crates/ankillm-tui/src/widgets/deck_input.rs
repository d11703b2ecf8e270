//! Deck name input widget

use ankillm_app::text_input::TextInputState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

const PROMPT: &str = "Deck name: ";
const PLACEHOLDER: &str = "New deck name";

pub struct DeckInput<'a> {
    input: &'a TextInputState,
}

impl<'a> DeckInput<'a> {
    pub fn new(input: &'a TextInputState) -> Self {
        Self { input }
    }
}

impl Widget for DeckInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("New Deck", true);

        let mut spans = vec![Span::styled(PROMPT, styles::text_secondary())];
        if self.input.is_empty() {
            spans.push(Span::styled("█", styles::accent()));
            spans.push(Span::styled(PLACEHOLDER, styles::text_muted()));
        } else {
            spans.push(Span::styled(self.input.value(), styles::text_primary()));
            spans.push(Span::styled("█", styles::accent()));
        }

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}
