//! Footer widget
//!
//! Key hints for the active screen followed by the status text, or a
//! spinner while a background task runs.

use ankillm_app::Screen;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Braille spinner characters, one per tick
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Gap between the hints and the status text
const STATUS_GAP: &str = "    ";

/// Key hints for `screen`. The review hints name the active deck.
pub fn hints_for(screen: &Screen, active_deck: &str) -> String {
    match screen {
        Screen::Pick(_) => "up/down:move  enter:select  backspace:parent  q:quit".to_string(),
        Screen::Review => format!(
            "j/k:move  space:toggle  a:add  s:select-all  d:change-deck ({active_deck})  r:regenerate  q:quit"
        ),
        Screen::SelectDeck { .. } => "j/k:move  enter:select  esc:cancel".to_string(),
        Screen::CreateDeck(_) => "enter:confirm  esc:cancel".to_string(),
    }
}

pub struct Footer<'a> {
    hints: String,
    status: &'a str,
    loading: bool,
    animation_frame: u64,
}

impl<'a> Footer<'a> {
    pub fn new(hints: String, status: &'a str) -> Self {
        Self {
            hints,
            status,
            loading: false,
            animation_frame: 0,
        }
    }

    /// Replace the status text with "working" and a spinner
    pub fn loading(mut self, loading: bool, animation_frame: u64) -> Self {
        self.loading = loading;
        self.animation_frame = animation_frame;
        self
    }

    fn status_spans(&self) -> Vec<Span<'a>> {
        if self.loading {
            let spinner = SPINNER[(self.animation_frame as usize) % SPINNER.len()];
            vec![
                Span::styled("working", styles::status_yellow()),
                Span::styled(format!(" {spinner}"), styles::accent()),
            ]
        } else if self.status.is_empty() {
            Vec::new()
        } else {
            vec![Span::styled(self.status, styles::text_primary())]
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);

        let mut spans = vec![
            Span::styled(" ", styles::text_muted()),
            Span::styled(self.hints.clone(), styles::text_muted()),
            Span::raw(STATUS_GAP),
        ];
        spans.extend(self.status_spans());

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}
