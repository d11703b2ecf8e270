//! Header bar widget
//!
//! Shows the app name, the active screen title and the chosen PDF.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

use super::truncate_with_ellipsis;

const APP_NAME: &str = "anki-llm";

/// Main header showing app name, screen title and the source document
pub struct MainHeader<'a> {
    title: &'a str,
    file_name: Option<&'a str>,
}

impl<'a> MainHeader<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            file_name: None,
        }
    }

    /// Show the chosen document on the right-hand side
    pub fn with_file(mut self, file_name: Option<&'a str>) -> Self {
        self.file_name = file_name;
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::styled(format!(" {APP_NAME}"), styles::accent_bold()),
            Span::styled(" │ ", styles::text_muted()),
            Span::styled(self.title, styles::heading()),
        ]);
        let title_width = title.width() as u16;

        let [left, right] =
            Layout::horizontal([Constraint::Length(title_width), Constraint::Min(0)]).areas(inner);
        title.render(left, buf);

        // File name only when there is room after the title
        if let Some(name) = self.file_name {
            let room = (right.width as usize).saturating_sub(2);
            if room > 3 {
                let shown = truncate_with_ellipsis(name, room);
                let width = shown.width() as u16 + 1;
                let x = right.x + right.width.saturating_sub(width);
                buf.set_string(x, right.y, shown, styles::text_secondary());
            }
        }
    }
}
